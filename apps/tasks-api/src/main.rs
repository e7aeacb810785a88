//! Tasks API - REST server for the task list

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config_with_retry, run_migrations};
use migration::Migrator;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to PostgreSQL");

    let db = connect_from_config_with_retry(config.postgres.clone(), None).await?;

    run_migrations::<Migrator>(&db, env!("CARGO_PKG_NAME")).await?;

    let state = AppState {
        config: config.clone(),
        db,
    };

    // Build REST router
    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router
        .merge(health_router(state.config.app.clone()))
        .merge(api::health::router(state.clone()));

    info!("Starting Tasks API on port {}", state.config.server.port);

    // Run server with graceful shutdown
    create_production_app(app, &state.config.server, Duration::from_secs(30), {
        let db = state.db.clone();
        async move {
            info!("Shutting down: closing database connection");
            if let Err(e) = db.close().await {
                tracing::warn!("Error closing database connection: {}", e);
            }
        }
    })
    .await?;

    info!("Tasks API shutdown complete");
    Ok(())
}
