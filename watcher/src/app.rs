use crate::model::PollWindow;
use crate::notify::TelegramNotifier;
use crate::poll::{CycleOutcome, PollLoop};
use crate::source::HomeworkApi;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};
use watcher_core::{Config, Result};

pub struct App {
    poll: PollLoop,
    window: PollWindow,
}

impl App {
    #[instrument(skip(config))]
    pub fn new(config: Config, start_from: Option<DateTime<Utc>>) -> Result<Self> {
        info!("Initializing application");

        let source = Arc::new(HomeworkApi::new(&config.api)?);
        let notifier = Arc::new(TelegramNotifier::new(&config.bot));

        let poll = PollLoop::new(
            source,
            notifier,
            Duration::from_secs(config.poll.interval_secs),
        );
        let window = PollWindow::starting_at(start_from.unwrap_or_else(Utc::now));

        Ok(Self { poll, window })
    }

    pub async fn run_continuous(&mut self) -> Result<()> {
        self.poll.run(&mut self.window).await
    }

    pub async fn run_once(&mut self) -> CycleOutcome {
        self.poll.run_once(&mut self.window).await
    }
}
