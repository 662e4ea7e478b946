//! Dashboard evaluation core.
//!
//! Everything in this module is synchronous, single-threaded, and free of
//! side effects: given a [`SensorReading`](crate::SensorReading), it derives
//! display text per metric and a boolean alert state, and nothing else. No
//! history is retained between calls, so the same reading always produces
//! the same outputs.
//!
//! Sibling modules follow the Explicit Module Boundary Pattern (EMBP):
//! - `thresholds` – static acceptable bands per metric
//! - `anomaly` – out-of-band detection over one reading
//! - `display` – metric-to-text formatting
//! - `render` – the `Renderer` seam and the `Dashboard` context object
//! - `history` – the declared (unimplemented) historical-lookup seam

mod anomaly;
mod display;
mod history;
mod render;
mod thresholds;

// ---

pub use anomaly::evaluate;
pub use display::{format_metric, Metric, NO_DATA};
pub use history::{HistorySource, NoHistory};
pub use render::{Dashboard, Renderer};
pub use thresholds::{Band, Thresholds};
