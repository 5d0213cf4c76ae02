//! Overview / detail navigation and the per-session telemetry state.

use crate::config::MonitorConfig;
use crate::error::MonitorError;
use crate::fleet::{self, Machine};
use crate::risk::{RiskAssessment, RiskEngine};
use crate::telemetry::{RollingHistory, SensorReading, TelemetrySimulator};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Overview,
    Detail(Machine),
}

/// Result of one tick in the detail view
#[derive(Debug, Clone)]
pub struct TickOutcome {
    pub machine_id: String,
    pub session_id: Uuid,
    /// 1-based tick number within the session
    pub tick: u64,
    pub reading: SensorReading,
    pub assessment: RiskAssessment,
}

pub struct Dashboard {
    machines: Vec<Machine>,
    view: View,
    session_id: Option<Uuid>,
    history: RollingHistory,
    failure_probability: f64,
    simulator: TelemetrySimulator,
    risk: RiskEngine,
}

impl Dashboard {
    pub fn new(machines: Vec<Machine>, config: &MonitorConfig) -> Self {
        Self {
            machines,
            view: View::Overview,
            session_id: None,
            history: RollingHistory::new(config.simulator.history_capacity),
            failure_probability: 0.0,
            simulator: TelemetrySimulator::new(config.simulator.seed),
            risk: RiskEngine::new(config.risk.clone()),
        }
    }

    /// Dashboard over the static fleet
    pub fn with_fleet(config: &MonitorConfig) -> Self {
        Self::new(fleet::list_machines(), config)
    }

    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn selected(&self) -> Option<&Machine> {
        match &self.view {
            View::Detail(m) => Some(m),
            View::Overview => None,
        }
    }

    pub fn session_id(&self) -> Option<Uuid> {
        self.session_id
    }

    pub fn history(&self) -> &RollingHistory {
        &self.history
    }

    pub fn latest(&self) -> Option<&SensorReading> {
        self.history.latest()
    }

    pub fn failure_probability(&self) -> f64 {
        self.failure_probability
    }

    pub fn risk(&self) -> &RiskEngine {
        &self.risk
    }

    /// Enter the detail view for `machine_id`, starting a fresh session.
    /// Also valid from the detail view (switching machines).
    pub fn select_machine(&mut self, machine_id: &str) -> Result<Uuid, MonitorError> {
        let machine = fleet::find(&self.machines, machine_id)?.clone();
        self.reset_session();
        let session_id = Uuid::new_v4();
        self.session_id = Some(session_id);
        tracing::debug!(machine_id, %session_id, "machine selected");
        self.view = View::Detail(machine);
        Ok(session_id)
    }

    pub fn back_to_overview(&mut self) {
        if let Some(session_id) = self.session_id.take() {
            tracing::debug!(%session_id, ticks = self.simulator.ticks(), "session closed");
        }
        self.reset_session();
        self.view = View::Overview;
    }

    fn reset_session(&mut self) {
        self.history.clear();
        self.failure_probability = 0.0;
        self.simulator.reset();
    }

    /// Produce, record and score one reading. No-op outside the detail view.
    pub fn on_tick(&mut self) -> Option<TickOutcome> {
        let View::Detail(machine) = &self.view else {
            return None;
        };
        let session_id = self.session_id?;
        let reading = self.simulator.tick(&mut self.history);
        let assessment = self.risk.assess(&reading);
        self.failure_probability = assessment.probability;
        Some(TickOutcome {
            machine_id: machine.id.clone(),
            session_id,
            tick: self.simulator.ticks(),
            reading,
            assessment,
        })
    }
}
