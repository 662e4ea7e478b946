//! Historical-lookup seam.
//!
//! The dashboard declares how historical readings will be fetched; no
//! storage backend exists yet. `None` means "no reading recorded at that
//! time" — a defined answer, not an error.

use chrono::{DateTime, Utc};

use crate::SensorReading;

// ---

/// A source of historical readings.
pub trait HistorySource {
    /// Fetch the reading recorded at `timestamp`, or `None` if nothing was
    /// recorded then.
    fn fetch_historical_reading(&self, timestamp: DateTime<Utc>) -> Option<SensorReading>;
}

/// Placeholder source until a storage backend fulfills the interface.
///
/// Always reports NotFound. TODO: replace with a store-backed source once
/// readings are persisted anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

impl HistorySource for NoHistory {
    fn fetch_historical_reading(&self, _timestamp: DateTime<Utc>) -> Option<SensorReading> {
        // ---
        None
    }
}
