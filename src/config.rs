//! Monitor configuration, loaded from a JSON file with defaults for every field.

use crate::error::MonitorError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Telemetry simulation cadence and history size
    pub simulator: SimulatorConfig,
    /// Risk band thresholds
    pub risk: RiskConfig,
    /// Which machine to observe and how to present it
    pub session: SessionConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Milliseconds between ticks while a machine is observed
    pub tick_interval_ms: u64,
    /// Rolling history length (oldest reading evicted first)
    pub history_capacity: usize,
    /// Fixed RNG seed for reproducible sessions
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Probability above this is critical (0.0–0.95)
    pub critical_threshold: f64,
    /// Probability above this is a warning
    pub warning_threshold: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Re-render the detail view on every tick
    Text,
    /// One JSON tick record per line
    Ndjson,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Machine to observe after printing the overview
    pub machine_id: Option<String>,
    /// Stop after this many ticks; run until Ctrl+C when unset
    pub max_ticks: Option<u64>,
    /// Rows in the recent data log
    pub log_rows: usize,
    pub output: OutputMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 2000,
            history_capacity: 20,
            seed: None,
        }
    }
}

impl SimulatorConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            critical_threshold: 0.7,
            warning_threshold: 0.4,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            machine_id: None,
            max_ticks: None,
            log_rows: 10,
            output: OutputMode::Text,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl MonitorConfig {
    /// Load from JSON file if present and valid; otherwise return default
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        Self::try_load(path).unwrap_or_default()
    }

    pub fn try_load(path: &Path) -> Result<Self, MonitorError> {
        let data = std::fs::read_to_string(path).map_err(|source| MonitorError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| MonitorError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let c: MonitorConfig =
            serde_json::from_str(r#"{"session":{"machine_id":"M004","output":"ndjson"}}"#).unwrap();
        assert_eq!(c.session.machine_id.as_deref(), Some("M004"));
        assert_eq!(c.session.output, OutputMode::Ndjson);
        assert_eq!(c.session.log_rows, 10);
        assert_eq!(c.simulator.history_capacity, 20);
        assert_eq!(c.simulator.tick_interval(), Duration::from_secs(2));
    }

    #[test]
    fn zero_interval_is_clamped() {
        let s = SimulatorConfig {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(s.tick_interval(), Duration::from_millis(1));
    }
}
