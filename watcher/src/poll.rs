use crate::interpret::interpret;
use crate::model::PollWindow;
use crate::notify::Notifier;
use crate::source::ReviewSource;
use chrono::Utc;
use metrics::counter;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info};
use watcher_core::{Error, Result};

/// Outcome of one poll cycle. Every non-fatal error collapses into the
/// single `Recovered` transition; the loop has no exit of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The interpreter produced a message and it was handed to the notifier.
    Notified(String),
    /// Empty feed, nothing to report. The steady-state case.
    Quiet,
    /// The endpoint answered with no usable data.
    Degraded,
    /// A cycle error was reported to the chat and swallowed.
    Recovered(String),
}

pub struct PollLoop {
    source: Arc<dyn ReviewSource>,
    notifier: Arc<dyn Notifier>,
    interval: Duration,
}

impl PollLoop {
    pub fn new(source: Arc<dyn ReviewSource>, notifier: Arc<dyn Notifier>, interval: Duration) -> Self {
        Self {
            source,
            notifier,
            interval,
        }
    }

    fn interval_chrono(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.interval.as_secs() as i64)
    }

    /// Fetch, interpret, and conditionally notify. Never fails: errors are
    /// turned into a failure message, sent best-effort, and logged.
    pub async fn run_cycle(&self, window: &PollWindow) -> CycleOutcome {
        counter!("watcher_cycles_total").increment(1);

        let feed = match self.source.fetch(window).await {
            Ok(feed) => feed,
            Err(e) => return self.recover(e).await,
        };

        let absent = feed.is_none();
        match interpret(feed.as_ref()) {
            Ok(Some(message)) => {
                self.notifier.notify(&message).await;
                CycleOutcome::Notified(message)
            }
            Ok(None) if absent => CycleOutcome::Degraded,
            Ok(None) => CycleOutcome::Quiet,
            Err(e) => self.recover(e).await,
        }
    }

    /// One cycle followed by the unconditional window advance.
    pub async fn run_once(&self, window: &mut PollWindow) -> CycleOutcome {
        let outcome = self.run_cycle(window).await;
        window.advance(Utc::now(), self.interval_chrono());
        outcome
    }

    /// Loop forever: cycle, sleep, advance the window, repeat. The window
    /// is advanced after every cycle whether it succeeded or not. Only
    /// ctrl-c breaks out.
    pub async fn run(&self, window: &mut PollWindow) -> Result<()> {
        info!(
            interval_secs = self.interval.as_secs(),
            from_date = window.from_date(),
            "Starting poll loop"
        );

        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Shutdown signal received");
                    let _ = shutdown_tx.send(()).await;
                }
                Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
            }
        });

        loop {
            let outcome = self.run_cycle(window).await;
            debug!(?outcome, from_date = window.from_date(), "Cycle complete");

            tokio::select! {
                _ = shutdown_rx.recv() => {
                    info!("Shutting down poll loop");
                    break;
                }
                _ = tokio::time::sleep(self.interval) => {}
            }

            window.advance(Utc::now(), self.interval_chrono());
        }

        Ok(())
    }

    async fn recover(&self, e: Error) -> CycleOutcome {
        counter!("watcher_cycle_failures").increment(1);

        let message = format!("Сбой в работе программы: {e}");
        error!(error = %e, "Poll cycle failed");
        self.notifier.notify(&message).await;

        CycleOutcome::Recovered(message)
    }
}
