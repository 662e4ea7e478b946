//! Library surface for the `envwatch-dashboard` backend service.
//!
//! Two independent pieces live here:
//! - `dashboard` – the stateless evaluation core: threshold bands, anomaly
//!   detection, display formatting, and the renderer/history seams. Pure
//!   logic, testable without any HTTP or rendering environment.
//! - `routes` – the relay service: liveness, the `/predict` pass-through to
//!   the external ML endpoint, and the declared history-lookup boundary.
//!
//! The binary in `main.rs` wires configuration, tracing, and the HTTP
//! server around these modules. Integration tests build the router directly
//! from this crate instead of assuming an externally running process.

pub mod config;
pub mod dashboard;
pub mod models;
pub mod routes;

pub use config::Config;

// Re-exported here so routes/*.rs and the dashboard modules depend only on
// their parent crate surface, not on each other's file layout.
pub use models::SensorReading;
