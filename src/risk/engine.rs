//! Rule-based failure probability from a single reading, plus configurable risk bands.

use crate::config::RiskConfig;
use crate::telemetry::SensorReading;
use serde::{Deserialize, Serialize};

/// Upper bound on any failure probability
pub const MAX_PROBABILITY: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Normal,
    Warning,
    Critical,
}

impl RiskLevel {
    pub fn from_probability(probability: f64, config: &RiskConfig) -> Self {
        if probability > config.critical_threshold {
            RiskLevel::Critical
        } else if probability > config.warning_threshold {
            RiskLevel::Warning
        } else {
            RiskLevel::Normal
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Normal => "normal",
            RiskLevel::Warning => "warning",
            RiskLevel::Critical => "critical",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Normal => "Normal - Operating Fine",
            RiskLevel::Warning => "Warning - Monitor Closely",
            RiskLevel::Critical => "Critical - Maintenance Required",
        }
    }
}

fn tool_wear_risk(wear: f64) -> f64 {
    if wear > 200.0 {
        0.4
    } else if wear > 150.0 {
        0.2
    } else if wear > 100.0 {
        0.1
    } else {
        0.0
    }
}

fn temperature_gap_risk(gap: f64) -> f64 {
    if gap > 12.0 {
        0.3
    } else if gap > 10.0 {
        0.15
    } else {
        0.0
    }
}

fn torque_risk(torque: f64) -> f64 {
    if torque > 45.0 {
        0.2
    } else if torque > 40.0 {
        0.1
    } else {
        0.0
    }
}

fn speed_anomaly_risk(speed: f64) -> f64 {
    if speed < 1300.0 || speed > 1700.0 {
        0.1
    } else {
        0.0
    }
}

/// Per-rule contributions for one reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskBreakdown {
    pub tool_wear: f64,
    pub temperature_gap: f64,
    pub torque: f64,
    pub speed_anomaly: f64,
}

impl RiskBreakdown {
    pub fn of(reading: &SensorReading) -> Self {
        Self {
            tool_wear: tool_wear_risk(reading.tool_wear),
            temperature_gap: temperature_gap_risk(reading.temperature_gap()),
            torque: torque_risk(reading.torque),
            speed_anomaly: speed_anomaly_risk(reading.rotational_speed),
        }
    }

    /// Sum in rule order (wear, gap, torque, speed), clamped to [`MAX_PROBABILITY`].
    pub fn probability(&self) -> f64 {
        let mut risk = 0.0;
        risk += self.tool_wear;
        risk += self.temperature_gap;
        risk += self.torque;
        risk += self.speed_anomaly;
        risk.min(MAX_PROBABILITY)
    }
}

/// Failure probability in [0, 0.95]. Pure and deterministic.
pub fn score(reading: &SensorReading) -> f64 {
    RiskBreakdown::of(reading).probability()
}

/// Scored reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub breakdown: RiskBreakdown,
    pub probability: f64,
    pub level: RiskLevel,
}

pub struct RiskEngine {
    config: RiskConfig,
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new(RiskConfig::default())
    }
}

impl RiskEngine {
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    pub fn assess(&self, reading: &SensorReading) -> RiskAssessment {
        let breakdown = RiskBreakdown::of(reading);
        let probability = breakdown.probability();
        RiskAssessment {
            breakdown,
            probability,
            level: self.level(probability),
        }
    }

    pub fn level(&self, probability: f64) -> RiskLevel {
        RiskLevel::from_probability(probability, &self.config)
    }

    pub fn config(&self) -> &RiskConfig {
        &self.config
    }
}
