//! Metric-to-text formatting for the dashboard tiles.

/// Text shown for a metric whose value is absent.
pub const NO_DATA: &str = "No data";

/// The three dashboard metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Temperature,
    Co2,
    Humidity,
}

impl Metric {
    /// Unit suffix appended to a formatted value. The CO2 suffix carries its
    /// leading space (`"450 ppm"`); the others attach directly.
    pub fn unit(&self) -> &'static str {
        // ---
        match self {
            Metric::Temperature => "°C",
            Metric::Co2 => " ppm",
            Metric::Humidity => "%",
        }
    }
}

/// Format one optional metric value for display.
///
/// Present values render with their natural numeric representation followed
/// by the unit suffix; no rounding is applied. Absence renders as the
/// literal [`NO_DATA`]. Total over its input domain: there is no failure
/// branch.
pub fn format_metric(value: Option<f64>, unit: &str) -> String {
    // ---
    match value {
        Some(v) => format!("{v}{unit}"),
        None => NO_DATA.to_string(),
    }
}
