//! EMCode server binary.
//!
//! ## Purpose
//! Serves the EMCode REST API (with OpenAPI/Swagger UI) built by the
//! `api-rest` crate.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the EMCode server.
///
/// Starts the REST server on the configured address (default: 0.0.0.0:3000).
///
/// # Environment Variables
/// - `EMCODE_REST_ADDR`: server address (default: "0.0.0.0:3000")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("emcode_run=info".parse()?)
                .add_directive("emcode_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("EMCODE_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("++ Starting EMCode REST on {}", addr);

    let app = api_rest::app();

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
