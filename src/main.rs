use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use healthassist_core::{FacilityFinder, config::load_from_env, source_from_config};

/// Main entry point for the HealthAssist application
///
/// Serves the HTTP API (assessments, hospitals, health, OpenAPI/Swagger UI) and shuts down
/// cleanly on Ctrl-C.
///
/// # Environment Variables
/// - `HEALTHASSIST_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `FACILITY_STORE_URL`: base URL of the hosted facility store
/// - `FACILITY_STORE_KEY`: API key for the hosted facility store
/// - `FACILITY_TABLE`: facility table name (default: "hospitals")
/// - `FACILITY_DATA_FILE`: local JSON/YAML facility list, used instead of a hosted store
///
/// # Returns
/// * `Ok(())` - If the server starts and shuts down cleanly
/// * `Err(anyhow::Error)` - If configuration, binding or serving fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("healthassist_run=info".parse()?)
                .add_directive("healthassist_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = load_from_env()?;
    let finder = FacilityFinder::new(source_from_config(cfg.facility_store())?);

    tracing::info!("++ Starting HealthAssist REST on {}", cfg.rest_addr());

    let listener = tokio::net::TcpListener::bind(cfg.rest_addr()).await?;
    let app = router(AppState::new(finder));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- HealthAssist stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
