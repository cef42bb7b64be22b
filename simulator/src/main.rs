mod readings;

use std::env;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info};

#[derive(Debug, Clone)]
struct AppState {
    devices: usize,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MeasuresQuery {
    token: Option<String>,
}

#[tokio::main]
async fn main() {
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .unwrap_or(8080);
    let devices: usize = env::var("DEVICES")
        .unwrap_or_else(|_| "3".to_string())
        .parse()
        .unwrap_or(3);
    let token = env::var("AIRGRADIENT_API_TOKEN").ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("Starting AirGradient API simulator");
    info!(
        "Devices: {}, token check: {}",
        devices,
        if token.is_some() { "on" } else { "off" }
    );

    let state = AppState { devices, token };
    let app = Router::new()
        .route(
            "/public/api/v1/locations/measures/current",
            get(current_measures),
        )
        .fallback(not_found)
        .with_state(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        });

    info!("Simulated AirGradient API listening on {}", addr);

    axum::serve(listener, app).await.unwrap_or_else(|e| {
        error!("HTTP server error: {}", e);
    });
}

async fn current_measures(
    State(state): State<AppState>,
    Query(query): Query<MeasuresQuery>,
) -> impl IntoResponse {
    if let Some(expected) = &state.token {
        if query.token.as_deref() != Some(expected.as_str()) {
            return (StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
        }
    }

    let mut rng = rand::thread_rng();
    let batch: Vec<_> = (0..state.devices)
        .map(|index| readings::generate_reading(&mut rng, index))
        .collect();

    Json(batch).into_response()
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}
