//! Schema bootstrap for the identity and credential tables

use crate::InfrastructureError;

use super::DatabasePool;

/// Identity store: one row per known subject
pub const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id CHAR(24) NOT NULL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        created_at DATETIME(6) NOT NULL
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
"#;

/// Credential store: at most one refresh hash per subject
pub const CREATE_CREDENTIALS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS credentials (
        subject_id CHAR(24) NOT NULL PRIMARY KEY,
        refresh_hash VARCHAR(72) NOT NULL,
        updated_at DATETIME(6) NOT NULL
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
"#;

/// Create the tables if they are missing
pub async fn ensure_schema(database: &DatabasePool) -> Result<(), InfrastructureError> {
    for statement in [CREATE_USERS_TABLE, CREATE_CREDENTIALS_TABLE] {
        super::bounded(
            "ensure_schema",
            database.query_timeout(),
            sqlx::query(statement).execute(database.get_pool()),
        )
        .await?;
    }
    tracing::info!("Database schema verified");
    Ok(())
}
