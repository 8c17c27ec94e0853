use crate::model::{ReviewFeed, ReviewStatus};
use tracing::warn;
use watcher_core::{Error, Result};

/// Decide whether a fetch result is worth reporting.
///
/// `None` input means the endpoint answered with no usable data; the cycle
/// is degraded but not fatal. An empty feed is the steady state and stays
/// silent. Otherwise the first (most recent) submission is turned into a
/// message; a nameless record or an unknown status propagates as an error
/// rather than producing malformed text.
pub fn interpret(feed: Option<&ReviewFeed>) -> Result<Option<String>> {
    let Some(feed) = feed else {
        warn!("Review feed is absent, skipping this cycle");
        return Ok(None);
    };

    let Some(homework) = feed.homeworks.first() else {
        return Ok(None);
    };

    let name = homework
        .homework_name
        .as_deref()
        .ok_or_else(|| Error::Validation("submission record has no name".to_string()))?;

    let verdict = ReviewStatus::parse(&homework.status)?.verdict();

    Ok(Some(format!(
        "Изменился статус проверки работы \"{name}\". {verdict}"
    )))
}
