//! Synthetic machine telemetry: reading type, simulator, rolling history.

mod history;
mod simulator;

pub use history::RollingHistory;
pub use simulator::{TelemetrySimulator, TOOL_WEAR_MAX};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// One sensor sample. Power is always derived from torque and speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub timestamp: DateTime<Utc>,
    /// Kelvin
    pub air_temp: f64,
    /// Kelvin
    pub process_temp: f64,
    /// RPM
    pub rotational_speed: f64,
    /// N·m
    pub torque: f64,
    /// Minutes of tool use
    pub tool_wear: f64,
    /// Watts
    pub power: f64,
}

impl SensorReading {
    pub fn new(
        timestamp: DateTime<Utc>,
        air_temp: f64,
        process_temp: f64,
        rotational_speed: f64,
        torque: f64,
        tool_wear: f64,
    ) -> Self {
        Self {
            timestamp,
            air_temp,
            process_temp,
            rotational_speed,
            torque,
            tool_wear,
            power: power_watts(torque, rotational_speed),
        }
    }

    pub fn temperature_gap(&self) -> f64 {
        self.process_temp - self.air_temp
    }

    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::AirTemp => self.air_temp,
            Metric::ProcessTemp => self.process_temp,
            Metric::RotationalSpeed => self.rotational_speed,
            Metric::Torque => self.torque,
            Metric::ToolWear => self.tool_wear,
            Metric::Power => self.power,
        }
    }
}

/// Mechanical power from torque (N·m) and speed (RPM).
pub fn power_watts(torque: f64, rotational_speed: f64) -> f64 {
    torque * (rotational_speed * (2.0 * PI / 60.0))
}

/// Chartable reading fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    AirTemp,
    ProcessTemp,
    RotationalSpeed,
    Torque,
    ToolWear,
    Power,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::AirTemp,
        Metric::ProcessTemp,
        Metric::RotationalSpeed,
        Metric::Torque,
        Metric::ToolWear,
        Metric::Power,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::AirTemp => "Air Temperature",
            Metric::ProcessTemp => "Process Temperature",
            Metric::RotationalSpeed => "Rotational Speed",
            Metric::Torque => "Torque",
            Metric::ToolWear => "Tool Wear",
            Metric::Power => "Power",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Metric::AirTemp | Metric::ProcessTemp => "K",
            Metric::RotationalSpeed => "RPM",
            Metric::Torque => "Nm",
            Metric::ToolWear => "min",
            Metric::Power => "W",
        }
    }

    /// Decimal places used when displaying a value
    pub fn precision(self) -> usize {
        match self {
            Metric::AirTemp | Metric::ProcessTemp | Metric::Torque => 1,
            Metric::RotationalSpeed | Metric::ToolWear | Metric::Power => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_is_derived() {
        let r = SensorReading::new(Utc::now(), 300.0, 310.0, 1500.0, 40.0, 0.0);
        let expected = 40.0 * 1500.0 * 2.0 * PI / 60.0;
        assert!((r.power - expected).abs() < 1e-9);
        assert!((r.power - 6283.185307179586).abs() < 1e-6);
        assert_eq!(r.value(Metric::Power), r.power);
        assert!((r.temperature_gap() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn metric_units() {
        assert_eq!(Metric::RotationalSpeed.unit(), "RPM");
        assert_eq!(Metric::ToolWear.precision(), 0);
        assert_eq!(Metric::ALL.len(), 6);
    }
}
