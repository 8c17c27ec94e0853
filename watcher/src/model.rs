use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use watcher_core::{Error, Result};

/// One submission as reported by the review API. The payload carries more
/// fields than these; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Homework {
    #[serde(default)]
    pub homework_name: Option<String>,
    pub status: String,
}

/// Success body of one fetch: submissions newest-first, plus server time
/// metadata that is not used downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewFeed {
    pub homeworks: Vec<Homework>,
    #[serde(default)]
    pub current_date: Option<i64>,
}

/// The closed set of review verdicts. Any other status string on the wire
/// is a data error, never a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    pub fn parse(code: &str) -> Result<Self> {
        match code {
            "approved" => Ok(ReviewStatus::Approved),
            "reviewing" => Ok(ReviewStatus::Reviewing),
            "rejected" => Ok(ReviewStatus::Rejected),
            other => Err(Error::UnknownStatus(other.to_string())),
        }
    }

    /// Fixed user-facing text for each verdict.
    pub fn verdict(&self) -> &'static str {
        match self {
            ReviewStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            ReviewStatus::Reviewing => "Работа взята на проверку ревьюером.",
            ReviewStatus::Rejected => "Работа проверена, в ней нашлись ошибки.",
        }
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewStatus::Approved => write!(f, "approved"),
            ReviewStatus::Reviewing => write!(f, "reviewing"),
            ReviewStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// The "fetch everything since this instant" cursor. Owned exclusively by
/// the poll loop and advanced exactly once per cycle, success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollWindow {
    from: DateTime<Utc>,
}

impl PollWindow {
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self { from: now }
    }

    /// Reset the cursor to `now - interval`. A failed cycle therefore never
    /// replays an unbounded backlog; the overlap trades duplicate reports
    /// for never missing a window.
    pub fn advance(&mut self, now: DateTime<Utc>, interval: Duration) {
        self.from = now - interval;
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.from
    }

    /// Unix seconds for the `from_date` query parameter.
    pub fn from_date(&self) -> i64 {
        self.from.timestamp()
    }
}
