//! JSON log lines: one JSON object per line (ndjson) for ingestion and replay.

use crate::dashboard::TickOutcome;
use crate::risk::{RiskBreakdown, RiskLevel};
use crate::telemetry::SensorReading;
use serde::Serialize;
use std::io::Write;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// One scored tick as emitted in ndjson output mode
#[derive(Serialize)]
pub struct TickRecord<'a> {
    pub machine_id: &'a str,
    pub session_id: String,
    pub tick: u64,
    pub reading: &'a SensorReading,
    pub failure_probability: f64,
    pub risk_level: RiskLevel,
    pub contributions: &'a RiskBreakdown,
}

impl<'a> From<&'a TickOutcome> for TickRecord<'a> {
    fn from(t: &'a TickOutcome) -> Self {
        Self {
            machine_id: &t.machine_id,
            session_id: t.session_id.to_string(),
            tick: t.tick,
            reading: &t.reading,
            failure_probability: t.assessment.probability,
            risk_level: t.assessment.level,
            contributions: &t.assessment.breakdown,
        }
    }
}

/// Initialize tracing (JSON or human-readable) on stderr
pub struct StructuredLogger;

impl StructuredLogger {
    /// Install global subscriber on stderr, level from RUST_LOG or `default_level`.
    /// stdout is left to the dashboard output.
    pub fn init(json: bool, default_level: &str) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
        let result = if json {
            let fmt = tracing_subscriber::fmt::layer()
                .json()
                .with_span_events(FmtSpan::NONE)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry().with(filter).with(fmt).try_init()
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init()
        };
        if let Err(e) = result {
            eprintln!("logging already initialised: {e}");
        }
    }

    /// Write one record as a JSON line, bypassing tracing
    pub fn emit_json(event: &impl Serialize, w: &mut impl Write) -> std::io::Result<()> {
        let line = serde_json::to_string(event)?;
        writeln!(w, "{}", line)
    }
}
