//! Configuration loader for the `envwatch-dashboard` backend service.
//!
//! This module centralizes all runtime configuration values and their defaults,
//! loading from environment variables (with optional `.env` file support
//! provided by the caller). By consolidating configuration logic here, we
//! avoid scattering `env::var` calls throughout the codebase.
//!
//! Every variable carries a default: the relay is expected to come up with
//! zero configuration, pointing at the ML service on its conventional local
//! port.
use std::env;

use anyhow::{anyhow, Result};

/// Parse an optional port-number environment variable with a default value.
macro_rules! parse_env_u16 {
    ($var_name:expr, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.parse::<u16>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Read an optional string environment variable with a default value.
macro_rules! env_or {
    ($var_name:expr, $default:expr) => {
        env::var($var_name).unwrap_or_else(|_| $default.to_string())
    };
}

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// Upstream ML prediction endpoint forwarded to by `/predict`.
    pub ml_service_url: String,

    /// TCP port the relay listens on.
    pub bind_port: u16,
}

/// Load configuration from environment variables with defaults.
///
/// Optional:
/// - `ML_SERVICE_URL` – upstream prediction endpoint
///   (default: `http://127.0.0.1:8000/predict`)
/// - `BIND_PORT` – listen port (default: 6000)
///
/// Returns an error if `BIND_PORT` is present but not a valid port number.
pub fn load_from_env() -> Result<Config> {
    // ---
    let ml_service_url = env_or!("ML_SERVICE_URL", "http://127.0.0.1:8000/predict");
    let bind_port = parse_env_u16!("BIND_PORT", 6000);

    Ok(Config {
        ml_service_url,
        bind_port,
    })
}

impl Config {
    /// Log the loaded configuration for debugging purposes.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  ML_SERVICE_URL : {}", self.ml_service_url);
        tracing::info!("  BIND_PORT      : {}", self.bind_port);
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn defaults_apply_when_env_unset() {
        // ---
        env::remove_var("ML_SERVICE_URL");
        env::remove_var("BIND_PORT");

        let cfg = load_from_env().unwrap();
        assert_eq!(cfg.ml_service_url, "http://127.0.0.1:8000/predict");
        assert_eq!(cfg.bind_port, 6000);
    }
}
