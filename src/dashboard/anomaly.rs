//! Out-of-band detection over a single reading.

use super::thresholds::{Band, Thresholds};
use crate::SensorReading;

// ---

/// Decide the alert state for one reading: `true` iff any present metric
/// falls outside its band.
///
/// An absent metric contributes no violation — it is "no opinion", not
/// "violating" — so a reading with every metric absent is never anomalous.
/// The result depends only on the inputs; evaluating the same reading twice
/// yields the same answer.
pub fn evaluate(reading: &SensorReading, thresholds: &Thresholds) -> bool {
    // ---
    out_of_band(reading.temperature, &thresholds.temperature)
        || out_of_band(reading.co2, &thresholds.co2)
        || out_of_band(reading.humidity, &thresholds.humidity)
}

fn out_of_band(value: Option<f64>, band: &Band) -> bool {
    // ---
    value.is_some_and(|v| band.violates(v))
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use chrono::{TimeZone, Utc};

    fn create_test_reading(
        temp: Option<f64>,
        co2: Option<f64>,
        humidity: Option<f64>,
    ) -> SensorReading {
        // ---
        SensorReading {
            timestamp: Utc.with_ymd_and_hms(2025, 3, 26, 18, 45, 0).unwrap(),
            temperature: temp,
            co2,
            humidity,
        }
    }

    fn evaluate_default(reading: &SensorReading) -> bool {
        // ---
        evaluate(reading, &Thresholds::default())
    }

    #[test]
    fn test_all_metrics_in_band() {
        // ---
        let reading = create_test_reading(Some(22.5), Some(450.0), Some(55.0));
        assert!(!evaluate_default(&reading));
    }

    #[test]
    fn test_all_metrics_absent() {
        // ---
        let reading = create_test_reading(None, None, None);
        assert!(!evaluate_default(&reading));
    }

    #[test]
    fn test_temperature_band() {
        // ---
        // Too cold - should alert
        assert!(evaluate_default(&create_test_reading(
            Some(14.9),
            None,
            None
        )));

        // Too hot - should alert
        assert!(evaluate_default(&create_test_reading(
            Some(35.0),
            None,
            None
        )));

        // Edge cases: exactly on a bound is clean
        assert!(!evaluate_default(&create_test_reading(
            Some(15.0),
            None,
            None
        )));
        assert!(!evaluate_default(&create_test_reading(
            Some(30.0),
            None,
            None
        )));
    }

    #[test]
    fn test_co2_band() {
        // ---
        assert!(evaluate_default(&create_test_reading(
            None,
            Some(1200.0),
            None
        )));

        // No lower bound: arbitrarily low CO2 is clean
        assert!(!evaluate_default(&create_test_reading(
            None,
            Some(0.0),
            None
        )));

        // Edge case
        assert!(!evaluate_default(&create_test_reading(
            None,
            Some(1000.0),
            None
        )));
    }

    #[test]
    fn test_humidity_band() {
        // ---
        assert!(evaluate_default(&create_test_reading(
            None,
            None,
            Some(25.0)
        )));
        assert!(evaluate_default(&create_test_reading(
            None,
            None,
            Some(75.0)
        )));

        // Edge cases
        assert!(!evaluate_default(&create_test_reading(
            None,
            None,
            Some(30.0)
        )));
        assert!(!evaluate_default(&create_test_reading(
            None,
            None,
            Some(70.0)
        )));
    }

    #[test]
    fn test_one_violation_flags_the_whole_reading() {
        // ---
        // Temperature over max while the other metrics are clean
        let hot = create_test_reading(Some(35.0), Some(450.0), Some(55.0));
        assert!(evaluate_default(&hot));

        // Absent temperature, CO2 over max
        let stuffy = create_test_reading(None, Some(1200.0), Some(55.0));
        assert!(evaluate_default(&stuffy));
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        // ---
        let reading = create_test_reading(Some(35.0), Some(450.0), Some(55.0));
        let first = evaluate_default(&reading);
        let second = evaluate_default(&reading);
        assert_eq!(first, second);
    }
}
