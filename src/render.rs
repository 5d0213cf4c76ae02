//! Plain-text rendering of the overview and detail views.

use crate::dashboard::Dashboard;
use crate::fleet::{FleetSummary, Machine};
use crate::risk::{score, RiskEngine};
use crate::telemetry::{Metric, RollingHistory, SensorReading};
use chrono::Local;
use std::fmt::Write;

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const GAUGE_WIDTH: usize = 40;

/// Placeholder shown before the first reading arrives
pub const NO_DATA: &str = "--";

pub fn overview(machines: &[Machine]) -> String {
    let summary = FleetSummary::from_machines(machines);
    let mut out = String::new();
    let _ = writeln!(out, "Smart IIoT Monitoring System");
    let _ = writeln!(out, "Real-time predictive maintenance monitoring");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Healthy: {}   Warning: {}   Critical: {}",
        summary.healthy, summary.warning, summary.critical
    );
    let _ = writeln!(out);
    for m in machines {
        let _ = writeln!(
            out,
            "[{:<8}] {:<16} ID: {}  Type: {}  Last check: {}  {}",
            m.status.as_str().to_uppercase(),
            m.name,
            m.id,
            m.category,
            m.last_check.with_timezone(&Local).format("%H:%M:%S"),
            m.status.label(),
        );
    }
    out
}

/// Latest value of `metric` with its unit, or [`NO_DATA`].
pub fn metric_value(latest: Option<&SensorReading>, metric: Metric) -> String {
    let value = match latest {
        Some(r) => format!("{:.*}", metric.precision(), r.value(metric)),
        None => NO_DATA.to_string(),
    };
    format!("{} {}", value, metric.unit())
}

/// One block character per value, scaled between the series min and max.
pub fn sparkline(values: &[f64]) -> String {
    if values.is_empty() {
        return String::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max - min == 0.0 { 1.0 } else { max - min };
    let top = (SPARK_LEVELS.len() - 1) as f64;
    values
        .iter()
        .map(|v| {
            let idx = (((v - min) / range) * top).round() as usize;
            SPARK_LEVELS[idx.min(SPARK_LEVELS.len() - 1)]
        })
        .collect()
}

pub fn gauge(probability: f64, width: usize) -> String {
    let filled = ((probability.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

pub fn percent(probability: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, probability * 100.0)
}

/// Newest-first table of recent readings with their individual risk.
pub fn data_log(history: &RollingHistory, rows: usize, risk: &RiskEngine) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:>10} {:>13} {:>10} {:>9} {:>10} {:>6}",
        "Time", "Air Temp", "Process Temp", "Speed", "Torque", "Tool Wear", "Risk"
    );
    for r in history.recent(rows) {
        let p = score(r);
        let _ = writeln!(
            out,
            "{:<10} {:>8.1} K {:>11.1} K {:>6.0} RPM {:>6.1} Nm {:>6.0} min {:>6} {}",
            r.timestamp.with_timezone(&Local).format("%H:%M:%S"),
            r.air_temp,
            r.process_temp,
            r.rotational_speed,
            r.torque,
            r.tool_wear,
            percent(p, 0),
            risk.level(p).as_str(),
        );
    }
    out
}

pub fn detail(dashboard: &Dashboard, log_rows: usize) -> String {
    let Some(machine) = dashboard.selected() else {
        return overview(dashboard.machines());
    };
    let mut out = String::new();
    let p = dashboard.failure_probability();
    let level = dashboard.risk().level(p);

    let _ = writeln!(out, "{}  [{}]", machine.name, machine.status.as_str().to_uppercase());
    let _ = writeln!(out, "Machine ID: {} | Type: {}", machine.id, machine.category);
    let _ = writeln!(out);
    let _ = writeln!(out, "Real-Time Failure Probability");
    let _ = writeln!(out, "{} {}  {}", gauge(p, GAUGE_WIDTH), percent(p, 1), level.label());
    let _ = writeln!(out);

    let latest = dashboard.latest();
    for metric in Metric::ALL {
        let _ = writeln!(
            out,
            "{:<20} {:>12}  {}",
            metric.label(),
            metric_value(latest, metric),
            sparkline(&dashboard.history().series(metric)),
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Recent Data Log");
    out.push_str(&data_log(dashboard.history(), log_rows, dashboard.risk()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MonitorConfig;
    use crate::fleet::list_machines;
    use chrono::Utc;

    #[test]
    fn sparkline_scales_to_range() {
        assert_eq!(sparkline(&[]), "");
        assert_eq!(sparkline(&[1.0, 2.0, 3.0]), "▁▅█");
        // flat series sits at the bottom
        assert_eq!(sparkline(&[5.0, 5.0]), "▁▁");
    }

    #[test]
    fn gauge_and_percent() {
        assert_eq!(gauge(0.5, 10), "[#####.....]");
        assert_eq!(gauge(0.0, 4), "[....]");
        assert_eq!(gauge(2.0, 4), "[####]");
        assert_eq!(percent(0.9, 1), "90.0%");
        assert_eq!(percent(0.15, 0), "15%");
    }

    #[test]
    fn missing_values_use_placeholder() {
        assert_eq!(metric_value(None, Metric::Torque), "-- Nm");
        let r = SensorReading::new(Utc::now(), 300.04, 310.0, 1499.6, 42.25, 12.0);
        assert_eq!(metric_value(Some(&r), Metric::AirTemp), "300.0 K");
        assert_eq!(metric_value(Some(&r), Metric::RotationalSpeed), "1500 RPM");
    }

    #[test]
    fn overview_lists_every_machine() {
        let machines = list_machines();
        let text = overview(&machines);
        assert!(text.contains("Healthy: 5   Warning: 2   Critical: 1"));
        for m in &machines {
            assert!(text.contains(&m.id));
        }
        assert!(text.contains("⚠ Maintenance Required"));
    }

    #[test]
    fn detail_before_first_tick() {
        let mut d = Dashboard::with_fleet(&MonitorConfig::default());
        d.select_machine("M008").unwrap();
        let text = detail(&d, 10);
        assert!(text.contains("Router H"));
        assert!(text.contains("0.0%"));
        assert!(text.contains("-- RPM"));
        assert!(text.contains("Normal - Operating Fine"));
    }

    #[test]
    fn data_log_is_limited_to_rows() {
        let mut d = Dashboard::with_fleet(&MonitorConfig::default());
        d.select_machine("M001").unwrap();
        for _ in 0..15 {
            d.on_tick();
        }
        let log = data_log(d.history(), 10, d.risk());
        // header plus ten rows
        assert_eq!(log.lines().count(), 11);
    }
}
