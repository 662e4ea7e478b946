//! The `Renderer` seam and the `Dashboard` context object.
//!
//! The presentation layer (DOM, TUI, test double) implements [`Renderer`];
//! [`Dashboard`] pushes derived state through it. Evaluation itself never
//! touches the renderer, so the logic stays testable without any rendering
//! environment.

use super::anomaly;
use super::display::{format_metric, Metric};
use super::thresholds::Thresholds;
use crate::SensorReading;

// ---

/// Capability required of a presentation layer.
///
/// Implementations own all visual concerns — element lookup, fade timing,
/// CSS classes. The contract here is only *what* to show: final text per
/// metric tile and a visible/hidden alert indicator with no intermediate
/// states.
pub trait Renderer {
    /// Replace the text of one metric tile.
    fn set_metric_text(&mut self, metric: Metric, text: &str);

    /// Show (`true`) or hide (`false`) the shared alert indicator.
    fn set_alert_visible(&mut self, visible: bool);
}

/// An explicitly constructed dashboard context.
///
/// Holds the threshold configuration and nothing else — no element
/// references, no last-seen reading. Multiple instances can coexist; there
/// is no hidden global.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    thresholds: Thresholds,
}

impl Dashboard {
    /// A dashboard with the shipped threshold bands.
    pub fn new() -> Self {
        // ---
        Dashboard::default()
    }

    pub fn with_thresholds(thresholds: Thresholds) -> Self {
        // ---
        Dashboard { thresholds }
    }

    /// The alert state for one reading, without rendering anything.
    pub fn alert_state(&self, reading: &SensorReading) -> bool {
        // ---
        anomaly::evaluate(reading, &self.thresholds)
    }

    /// Push one reading to the renderer: the three formatted metric texts,
    /// then the alert toggle.
    ///
    /// Recomputed in full on every call — the alert has no memory of prior
    /// readings, no hysteresis, no debouncing.
    pub fn update<R: Renderer>(&self, reading: &SensorReading, renderer: &mut R) {
        // ---
        renderer.set_metric_text(
            Metric::Temperature,
            &format_metric(reading.temperature, Metric::Temperature.unit()),
        );
        renderer.set_metric_text(Metric::Co2, &format_metric(reading.co2, Metric::Co2.unit()));
        renderer.set_metric_text(
            Metric::Humidity,
            &format_metric(reading.humidity, Metric::Humidity.unit()),
        );

        renderer.set_alert_visible(self.alert_state(reading));
    }
}
