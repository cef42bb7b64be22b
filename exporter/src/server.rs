use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tracing::error;

use crate::fetch::AirGradientClient;
use crate::metrics::gather_metrics;
use crate::update;

#[derive(Debug, Clone)]
struct AppState {
    client: AirGradientClient,
}

pub fn create_router(client: AirGradientClient) -> Router {
    let state = AppState { client };

    Router::new()
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .fallback(not_found)
        .with_state(state)
}

/// Scrape handler: fetch the current upstream snapshot, fold it into the
/// gauges, and render the exposition. Always answers 200 so the scrape
/// itself never flaps; upstream failures are visible through the
/// `airgradient_config_ok` / `airgradient_post_ok` series instead.
async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.client.current_measures().await {
        Ok(readings) => update::update_metrics(&readings),
        Err(e) => {
            error!("Failed to fetch AirGradient data: {}", e);
            update::mark_scrape_failed();
        }
    }

    (
        [(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)],
        gather_metrics(),
    )
}

async fn health_handler() -> &'static str {
    "OK"
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_router() -> Router {
        // Port 1 is never listening; only routes that skip the upstream
        // fetch are exercised here. Scrape behavior is covered by the
        // integration tests, where the process-wide gauges are not shared
        // with other test threads.
        create_router(AirGradientClient::new("http://127.0.0.1:1", "test-token"))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_path_returns_404() {
        let response = test_router()
            .oneshot(Request::get("/foo").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
