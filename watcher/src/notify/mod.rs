pub mod telegram;

use async_trait::async_trait;

/// Best-effort message delivery. The signature has no error channel on
/// purpose: a failed delivery is logged and discarded, it must never abort
/// a poll cycle.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, text: &str);
}

pub use telegram::TelegramNotifier;
