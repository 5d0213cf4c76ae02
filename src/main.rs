//! PdM monitor entrypoint: prints the fleet overview, then observes one machine
//! (from the first argument or `session.machine_id`) until `max_ticks` or Ctrl+C.

use pdm_monitor::{
    config::{MonitorConfig, OutputMode},
    dashboard::{Dashboard, TickOutcome},
    logging::{StructuredLogger, TickRecord},
    monitor::Monitor,
    render,
};
use std::io::Write;
use tokio_util::sync::CancellationToken;
use tracing::info;

fn emit(
    monitor: &Monitor,
    outcome: &TickOutcome,
    config: &MonitorConfig,
    out: &mut impl Write,
) -> std::io::Result<()> {
    match config.session.output {
        OutputMode::Ndjson => StructuredLogger::emit_json(&TickRecord::from(outcome), out),
        OutputMode::Text => {
            write!(out, "\n{}", render::detail(monitor.dashboard(), config.session.log_rows))?;
            out.flush()
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("PDM_CONFIG_PATH")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("config.json"));
    let config = MonitorConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);
    info!(config = ?config_path, "PdM monitor starting");

    let machine_id = std::env::args().nth(1).or_else(|| config.session.machine_id.clone());
    let mut monitor = Monitor::new(
        Dashboard::with_fleet(&config),
        config.simulator.tick_interval(),
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if config.session.output == OutputMode::Text {
        write!(out, "{}", render::overview(monitor.dashboard().machines()))?;
    }

    let Some(machine_id) = machine_id else {
        info!("no machine selected; overview only");
        return Ok(());
    };

    let shutdown = CancellationToken::new();
    let handler_token = shutdown.clone();
    let _ = ctrlc::set_handler(move || handler_token.cancel());

    monitor.select(&machine_id)?;
    if config.session.output == OutputMode::Text {
        write!(out, "\n{}", render::detail(monitor.dashboard(), config.session.log_rows))?;
        out.flush()?;
    }

    loop {
        let outcome = tokio::select! {
            _ = shutdown.cancelled() => break,
            outcome = monitor.next_tick() => outcome,
        };
        let Some(outcome) = outcome else { break };

        info!(
            machine_id = %outcome.machine_id,
            session_id = %outcome.session_id,
            tick = outcome.tick,
            probability = outcome.assessment.probability,
            level = outcome.assessment.level.as_str(),
            "tick"
        );
        if let Err(e) = emit(&monitor, &outcome, &config, &mut out) {
            tracing::warn!(tick = outcome.tick, error = %e, "failed to write tick");
        }
        if config.session.max_ticks.is_some_and(|max| outcome.tick >= max) {
            break;
        }
    }

    monitor.back();
    if config.session.output == OutputMode::Text {
        write!(out, "\n{}", render::overview(monitor.dashboard().machines()))?;
    }
    info!("PdM monitor stopping");
    Ok(())
}
