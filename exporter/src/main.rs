use std::env;

use exporter::fetch::{AirGradientClient, DEFAULT_API_URL};
use exporter::{metrics, server};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // All logging, including fatal configuration errors, goes to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .unwrap_or(3000);
    let api_url = env::var("AIRGRADIENT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let token = match env::var("AIRGRADIENT_API_TOKEN") {
        Ok(token) if !token.is_empty() => token,
        _ => {
            error!("AIRGRADIENT_API_TOKEN environment variable is required");
            std::process::exit(1);
        }
    };

    info!("Starting AirGradient exporter");
    info!("Upstream API: {}", api_url);

    metrics::init_metrics();

    let client = AirGradientClient::new(api_url, token);
    let app = server::create_router(client);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        });

    info!("HTTP server listening on {}", addr);
    info!("Metrics available at http://localhost:{}/metrics", port);
    info!("Health check at http://localhost:{}/health", port);

    axum::serve(listener, app).await.unwrap_or_else(|e| {
        error!("HTTP server error: {}", e);
    });
}
