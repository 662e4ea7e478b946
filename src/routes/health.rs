// src/routes/health.rs
//! Liveness endpoints for the relay service.
//!
//! Two flavors are exposed. `GET /` answers with the plain-text string the
//! dashboard's operators curl for ("Backend is running"); `GET /health`
//! answers JSON for container orchestrators and CI pipelines. Neither
//! touches the upstream ML service or any other external dependency.
//!
//! This is a sibling module in the `routes` directory following the
//! Explicit Module Boundary Pattern (EMBP): handlers stay internal, the
//! gateway (`mod.rs`) merges the exported subrouter.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// JSON response body for the `/health` endpoint.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Handle `GET /`.
async fn root() -> &'static str {
    "Backend is running"
}

/// Handle `GET /health`.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Create a subrouter containing the liveness routes.
///
/// Generic over the application state so it merges cleanly with the gateway
/// router regardless of the state type.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}
