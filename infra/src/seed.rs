//! Demo users for local runs

use tp_core::domain::entities::user::User;
use tp_core::errors::DomainError;
use tp_core::repositories::UserRepository;

/// Names of the users created by [`seed_demo_users`]
pub const DEMO_USER_NAMES: [&str; 2] = ["Bonnie", "Clyde"];

/// Inserts the demo users with freshly generated identifiers
///
/// The identifiers are logged so they can be used with `POST /auth`.
pub async fn seed_demo_users<R: UserRepository + ?Sized>(
    users: &R,
) -> Result<Vec<User>, DomainError> {
    let mut created = Vec::with_capacity(DEMO_USER_NAMES.len());
    for name in DEMO_USER_NAMES {
        let user = users.create(User::new(name)).await?;
        tracing::info!(subject = %user.id, name = %user.name, "Seeded demo user");
        created.push(user);
    }
    Ok(created)
}
