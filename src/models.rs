//! Data model for the environmental dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---

/// One timestamped set of environmental readings.
///
/// Each metric is independently optional: a sensor that reported nothing for
/// a metric yields `None`, which is a distinct state from a reading of zero.
/// Absent metrics appear as `null` (or are simply missing) on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    // ---
    pub timestamp: DateTime<Utc>,
    /// Temperature in °C.
    pub temperature: Option<f64>,
    /// CO2 concentration in ppm.
    pub co2: Option<f64>,
    /// Relative humidity in %.
    pub humidity: Option<f64>,
}

impl SensorReading {
    /// A reading where every metric is absent.
    pub fn empty(timestamp: DateTime<Utc>) -> Self {
        // ---
        SensorReading {
            timestamp,
            temperature: None,
            co2: None,
            humidity: None,
        }
    }
}
