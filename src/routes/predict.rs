//! The `/predict` relay to the external ML service.
//!
//! A single GET is forwarded to the configured upstream endpoint. On
//! success the upstream JSON payload is returned unchanged with status 200;
//! any transport failure collapses to one fixed error body with status 500.
//! No retries, no timeout tuning, no circuit breaking — the upstream is
//! local and either answers or it doesn't.

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use serde_json::json;
use tracing::{error, info};

use super::AppState;

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/predict", get(handler))
}

async fn handler(State((client, config)): State<AppState>) -> impl IntoResponse {
    // ---
    info!("GET /predict - forwarding to {}", config.ml_service_url);

    match forward_prediction(&client, &config.ml_service_url).await {
        Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
        Err(e) => {
            error!("ML service request failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "ML service not reachable" })),
            )
                .into_response()
        }
    }
}

/// Fetch the prediction payload from the upstream service.
///
/// The body is decoded only as far as [`serde_json::Value`] so it passes
/// through unchanged; a body that is not JSON counts as a failed upstream.
async fn forward_prediction(
    client: &reqwest::Client,
    url: &str,
) -> Result<serde_json::Value, reqwest::Error> {
    // ---
    client.get(url).send().await?.json().await
}
