//! # CLI Configuration
//!
//! Environment-based configuration for the `launch-miner` binary. Command-line
//! flags take precedence over these values.

use std::env;
use std::path::PathBuf;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Snapshot document read by every query
    pub snapshot_path: PathBuf,

    /// Logging level
    pub log_level: String,

    /// Logging output format
    pub log_format: LogFormat,

    /// k used when a ranking command omits `--k`
    pub default_k: usize,

    /// Orbit used when `dominant-country` or `report` omits `--orbit`
    pub default_orbit: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            snapshot_path: lookup("LAUNCH_SNAPSHOT_PATH")
                .map_or_else(|| PathBuf::from("launches.json"), PathBuf::from),

            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),

            log_format: match lookup("LOG_FORMAT").as_deref() {
                Some("json") => LogFormat::Json,
                _ => LogFormat::Text,
            },

            default_k: lookup("DEFAULT_TOP_K")
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),

            default_orbit: lookup("DEFAULT_ORBIT").unwrap_or_else(|| "LEO".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.snapshot_path, PathBuf::from("launches.json"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.default_k, 3);
        assert_eq!(config.default_orbit, "LEO");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("LAUNCH_SNAPSHOT_PATH", "/data/launches.json"),
            ("LOG_FORMAT", "json"),
            ("DEFAULT_TOP_K", "5"),
            ("DEFAULT_ORBIT", "GTO"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).map(|v| (*v).to_string()));

        assert_eq!(config.snapshot_path, PathBuf::from("/data/launches.json"));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.default_k, 5);
        assert_eq!(config.default_orbit, "GTO");
    }

    #[test]
    fn test_unparseable_k_falls_back() {
        let config = Config::from_lookup(|key| (key == "DEFAULT_TOP_K").then(|| "many".to_string()));
        assert_eq!(config.default_k, 3);
    }
}
