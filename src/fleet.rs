//! Static machine fleet shown in the overview.

use crate::error::MonitorError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Machine size tier (high / medium / low load class)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MachineCategory {
    H,
    M,
    L,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    Warning,
    Critical,
}

impl HealthStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Warning => "warning",
            HealthStatus::Critical => "critical",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthStatus::Healthy => "✓ Working Fine",
            HealthStatus::Warning => "⚠ Needs Attention",
            HealthStatus::Critical => "⚠ Maintenance Required",
        }
    }
}

impl fmt::Display for MachineCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MachineCategory::H => "H",
            MachineCategory::M => "M",
            MachineCategory::L => "L",
        };
        f.write_str(s)
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    pub id: String,
    pub name: String,
    pub category: MachineCategory,
    /// Sample data; never derived from risk scores
    pub status: HealthStatus,
    pub last_check: DateTime<Utc>,
}

const FLEET: [(&str, &str, MachineCategory, HealthStatus); 8] = [
    ("M001", "CNC Machine A", MachineCategory::H, HealthStatus::Healthy),
    ("M002", "Press Machine B", MachineCategory::M, HealthStatus::Warning),
    ("M003", "Lathe Machine C", MachineCategory::L, HealthStatus::Healthy),
    ("M004", "Mill Machine D", MachineCategory::H, HealthStatus::Critical),
    ("M005", "Drill Press E", MachineCategory::M, HealthStatus::Healthy),
    ("M006", "Grinder F", MachineCategory::L, HealthStatus::Warning),
    ("M007", "Welder G", MachineCategory::M, HealthStatus::Healthy),
    ("M008", "Router H", MachineCategory::H, HealthStatus::Healthy),
];

/// The fixed fleet in display order, all checked "now".
pub fn list_machines() -> Vec<Machine> {
    let now = Utc::now();
    FLEET
        .iter()
        .map(|&(id, name, category, status)| Machine {
            id: id.to_string(),
            name: name.to_string(),
            category,
            status,
            last_check: now,
        })
        .collect()
}

pub fn find<'a>(machines: &'a [Machine], id: &str) -> Result<&'a Machine, MonitorError> {
    machines
        .iter()
        .find(|m| m.id == id)
        .ok_or_else(|| MonitorError::UnknownMachine(id.to_string()))
}

/// Machine counts per status for the overview header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetSummary {
    pub healthy: usize,
    pub warning: usize,
    pub critical: usize,
}

impl FleetSummary {
    pub fn from_machines(machines: &[Machine]) -> Self {
        let mut s = FleetSummary::default();
        for m in machines {
            match m.status {
                HealthStatus::Healthy => s.healthy += 1,
                HealthStatus::Warning => s.warning += 1,
                HealthStatus::Critical => s.critical += 1,
            }
        }
        s
    }
}
