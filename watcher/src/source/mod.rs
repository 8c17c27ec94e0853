pub mod homework_api;

use crate::model::{PollWindow, ReviewFeed};
use async_trait::async_trait;
use watcher_core::Result;

#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Fetch every submission whose status changed inside the window.
    /// `Ok(None)` means the endpoint answered with no usable data, which is
    /// distinct from an empty feed.
    async fn fetch(&self, window: &PollWindow) -> Result<Option<ReviewFeed>>;
}

pub use homework_api::HomeworkApi;
