use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let db = database::postgres::connect_from_config(config.database.clone())
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    // Bring the producto table up to date before serving traffic
    database::postgres::run_migrations::<migration::Migrator>(&db, "catalog_api")
        .await
        .map_err(|e| eyre::eyre!("Migration failed: {}", e))?;

    let state = AppState { config, db };

    // Build router with API routes (state applied per domain router)
    let api_routes = api::routes(&state);

    // create_router adds docs/middleware to our composed routes
    let router = create_router::<openapi::ApiDoc>(api_routes);

    // Merge health endpoints into the app
    // - /health: liveness check with app name/version
    // - /ready: readiness check with an actual db health check
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    info!("Starting catalog API");

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Shutting down: closing database connection");
    match state.db.close().await {
        Ok(_) => info!("PostgreSQL connection closed successfully"),
        Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
    }

    info!("Catalog API shutdown complete");
    Ok(())
}
