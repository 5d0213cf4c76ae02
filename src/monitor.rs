//! Periodic observation driver.
//!
//! While a machine is observed, a [`Ticker`] task fires on a fixed interval and
//! sends session-tagged ticks to the [`Monitor`], which owns all state. Leaving
//! or switching the observed machine cancels the ticker before returning, and
//! any tick still queued from an earlier session is dropped on receipt.

use crate::dashboard::{Dashboard, TickOutcome};
use crate::error::MonitorError;
use crate::fleet;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

const TICK_QUEUE: usize = 8;
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Repeating timer bound to one observation session. Cancelled on drop.
pub struct Ticker {
    session_id: Uuid,
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// First tick fires one `period` after spawning.
    pub fn spawn(session_id: Uuid, period: Duration, tx: mpsc::Sender<Uuid>) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    _ = interval.tick() => {
                        if tx.send(session_id).await.is_err() {
                            break;
                        }
                    }
                }
            }
            tracing::trace!(%session_id, "ticker stopped");
        });
        Self {
            session_id,
            cancel,
            handle,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
        self.handle.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Dashboard plus at most one active ticker.
pub struct Monitor {
    dashboard: Dashboard,
    period: Duration,
    ticker: Option<Ticker>,
    tx: mpsc::Sender<Uuid>,
    rx: mpsc::Receiver<Uuid>,
}

impl Monitor {
    /// `period` is raised to at least 1 ms.
    pub fn new(dashboard: Dashboard, period: Duration) -> Self {
        let (tx, rx) = mpsc::channel(TICK_QUEUE);
        Self {
            dashboard,
            period: period.max(MIN_PERIOD),
            ticker: None,
            tx,
            rx,
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn is_observing(&self) -> bool {
        self.ticker.is_some()
    }

    /// Observe `machine_id`, replacing any current session. Must be called
    /// inside a tokio runtime.
    pub fn select(&mut self, machine_id: &str) -> Result<Uuid, MonitorError> {
        fleet::find(self.dashboard.machines(), machine_id)?;
        self.stop_ticker();
        let session_id = self.dashboard.select_machine(machine_id)?;
        self.ticker = Some(Ticker::spawn(session_id, self.period, self.tx.clone()));
        tracing::info!(machine_id, %session_id, period_ms = self.period.as_millis() as u64, "observing machine");
        Ok(session_id)
    }

    pub fn back(&mut self) {
        self.stop_ticker();
        self.dashboard.back_to_overview();
    }

    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }

    /// Wait for the next tick of the current session and apply it.
    /// Returns `None` immediately when nothing is observed.
    pub async fn next_tick(&mut self) -> Option<TickOutcome> {
        loop {
            let current = self.ticker.as_ref()?.session_id();
            let session_id = self.rx.recv().await?;
            if session_id != current {
                tracing::trace!(%session_id, "dropping tick from closed session");
                continue;
            }
            return self.dashboard.on_tick();
        }
    }
}
