//! PdM Monitor — simulated machine telemetry with heuristic failure scoring.
//!
//! Modular structure:
//! - [`fleet`] — Static machine list and status summary
//! - [`telemetry`] — Sensor reading simulator and rolling history
//! - [`risk`] — Rule-based failure probability scoring
//! - [`dashboard`] — Overview / detail view state
//! - [`monitor`] — Cancellable periodic ticker driving the detail view
//! - [`render`] — Text rendering of both views
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod dashboard;
pub mod error;
pub mod fleet;
pub mod logging;
pub mod monitor;
pub mod render;
pub mod risk;
pub mod telemetry;

pub use config::MonitorConfig;
pub use dashboard::{Dashboard, TickOutcome, View};
pub use error::MonitorError;
pub use fleet::{list_machines, Machine};
pub use logging::StructuredLogger;
pub use monitor::{Monitor, Ticker};
pub use risk::{score, RiskEngine};
pub use telemetry::{RollingHistory, SensorReading, TelemetrySimulator};
