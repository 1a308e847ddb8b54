//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! Useful for development and debugging when you only want the HTTP surface with its
//! OpenAPI/Swagger UI. The workspace's main `healthassist-run` binary serves the same router.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use healthassist_core::{config::load_from_env, source_from_config, FacilityFinder};

/// Main entry point for the HealthAssist REST API server
///
/// # Environment Variables
/// - `HEALTHASSIST_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `FACILITY_STORE_URL`, `FACILITY_STORE_KEY`, `FACILITY_TABLE`: hosted facility store
/// - `FACILITY_DATA_FILE`: local JSON/YAML facility list
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the environment describes an invalid facility store,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("healthassist_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = load_from_env()?;
    let finder = FacilityFinder::new(source_from_config(cfg.facility_store())?);

    tracing::info!("-- Starting HealthAssist REST API on {}", cfg.rest_addr());

    let listener = tokio::net::TcpListener::bind(cfg.rest_addr()).await?;
    let app = router(AppState::new(finder));
    axum::serve(listener, app).await?;

    Ok(())
}
