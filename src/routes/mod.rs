use axum::Router;
use reqwest::Client;
use tower_http::cors::CorsLayer;

use crate::Config;

mod health;
mod history;
mod predict;

// ---

/// Shared state for all route handlers: the outbound HTTP client and the
/// immutable configuration snapshot.
pub type AppState = (Client, Config);

pub fn router(client: Client, config: Config) -> Router {
    // ---
    Router::new()
        .merge(health::router())
        .merge(predict::router())
        .merge(history::router())
        // The dashboard page is served from elsewhere; accept any origin.
        .layer(CorsLayer::permissive())
        .with_state((client, config))
}
