//! # Dog Walking
//!
//! Booking API for dog-walking orders.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Database connection pool and migrations
//! - HTTP server

use anyhow::Result;
use tracing::info;

use dog_walking::config::Settings;
use dog_walking::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    dog_walking::telemetry::init_tracing();

    info!("Starting dog walking service...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
