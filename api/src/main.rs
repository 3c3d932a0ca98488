use std::path::PathBuf;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use clap::Parser;

use tp_api::app::create_app;
use tp_api::config::load_config;
use tp_api::routes::AppState;
use tp_api::telemetry::init_tracing;
use tp_core::repositories::RefreshHasher;
use tp_core::services::{FileKeyProvider, KeyProvider, RefreshTokenGenerator, RotationService};
use tp_core::TokenServiceConfig;
use tp_infra::database::schema::ensure_schema;
use tp_infra::seed::seed_demo_users;
use tp_infra::{DatabasePool, MySqlCredentialStore, MySqlUserRepository};

#[derive(Parser, Debug)]
#[command(name = "tokenpair", version, about = "RS512 access tokens with rotating refresh tokens")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Generate a new signing key pair before starting
    #[arg(long)]
    generate_keys: bool,

    /// Insert demo users and log their identifiers
    #[arg(long)]
    seed_users: bool,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = load_config(cli.config.as_deref())?;
    init_tracing(&config.logging)?;

    tracing::info!(environment = %config.environment, "Starting TokenPair API server");

    let keys = Arc::new(FileKeyProvider::from_config(&config.keys));
    if cli.generate_keys {
        let generator = keys.clone();
        web::block(move || generator.generate_and_persist())
            .await
            .context("key generation task failed")??;
    }

    // Both are fatal: without keys or randomness nothing can be issued
    keys.key_pair().context("signing keys are unavailable")?;
    RefreshTokenGenerator::new()
        .generate()
        .context("random source is unavailable")?;

    let database = DatabasePool::new(config.database.clone()).await?;
    if config.database.ensure_schema {
        ensure_schema(&database).await?;
    }

    let users = MySqlUserRepository::from_database(&database);
    if cli.seed_users {
        seed_demo_users(&users).await?;
    }

    let token_config = TokenServiceConfig::from(&config.token);
    let credentials = MySqlCredentialStore::from_database(
        &database,
        RefreshHasher::new(token_config.refresh_hash_cost),
    );
    let app_state = web::Data::new(AppState::new(RotationService::new(
        keys,
        credentials,
        users,
        &token_config,
    )));

    let bind_address = config.server.bind_address();
    let json_limit = config.server.max_payload_size;
    tracing::info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(app_state.clone(), json_limit))
        .keep_alive(std::time::Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    database.close().await;
    Ok(())
}
