use hotelcore::server::{config::Config, error::AppError, scheduler::sweeps, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Database ready, starting sweep scheduler");

    let mut scheduler = sweeps::start_scheduler(db, &config).await?;

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to listen for shutdown: {}", e)))?;

    tracing::info!("Shutting down");

    scheduler.shutdown().await?;

    Ok(())
}
