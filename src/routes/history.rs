//! The declared history-lookup boundary.
//!
//! The dashboard's history panel asks for the reading recorded at a chosen
//! date and time. The route parses the requested timestamp and consults a
//! [`HistorySource`]; with only the placeholder [`NoHistory`] source
//! shipped, every well-formed request answers 404 with a no-data message.

use axum::{
    extract::Query, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use super::AppState;
use crate::dashboard::{HistorySource, NoHistory};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/api/history", get(handler))
}

/// Query parameters for the history lookup.
#[derive(Debug, Deserialize)]
struct HistoryQuery {
    /// Requested instant, RFC 3339 or the `datetime-local` input shape
    /// (`2025-03-26T18:45`).
    datetime: String,
}

async fn handler(Query(params): Query<HistoryQuery>) -> impl IntoResponse {
    // ---
    info!("GET /api/history - datetime={}", params.datetime);

    let timestamp = match parse_datetime(&params.datetime) {
        Some(ts) => ts,
        None => {
            debug!("Rejecting unparseable datetime {:?}", params.datetime);
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid datetime format" })),
            )
                .into_response();
        }
    };

    match NoHistory.fetch_historical_reading(timestamp) {
        Some(reading) => (StatusCode::OK, Json(reading)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "No data available for the selected time." })),
        )
            .into_response(),
    }
}

/// Parse the timestamp the history panel sends.
///
/// Browsers' `datetime-local` inputs produce minute-precision local strings
/// without a zone; those are taken as UTC. Full RFC 3339 is accepted too.
fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    // ---
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .ok()
        .map(|naive| naive.and_utc())
}
