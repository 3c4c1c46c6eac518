use anyhow::{Context, Result};
use api::{handler::AppRouter, state::AppState};
use dotenv::dotenv;
use shared::{
    config::{Config, ConnectionManager, ConnectionPool},
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    init_logger("petpantry", is_dev, is_enable_file);

    info!("🚀 Starting Pet Pantry backend initialization...");

    let config = Config::init().context("Failed to load configuration")?;

    let db_pool = ConnectionManager::new_pool(&config.database_url, config.db_max_conn)
        .await
        .context("Failed to initialize database pool")?;

    if config.run_migrations {
        run_migrations(&db_pool)
            .await
            .context("Failed to run database migrations")?;
    }

    let state = AppState::new(db_pool);

    info!("✅ Application setup completed successfully");

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    Ok(())
}

async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
