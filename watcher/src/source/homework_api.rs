use super::ReviewSource;
use crate::model::{PollWindow, ReviewFeed};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};
use watcher_core::config::ApiConfig;
use watcher_core::{Error, Result};

/// HTTP client for the homework review endpoint. Performs exactly one
/// authenticated request per call; retries happen at cycle granularity in
/// the poll loop, never here.
pub struct HomeworkApi {
    client: Client,
    endpoint: String,
    token: String,
}

impl HomeworkApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            token: config.token.clone(),
        })
    }
}

#[async_trait]
impl ReviewSource for HomeworkApi {
    #[instrument(skip(self))]
    async fn fetch(&self, window: &PollWindow) -> Result<Option<ReviewFeed>> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", window.from_date())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UnexpectedStatusCode {
                code: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        // A decode failure is handled like a transport failure: either way
        // the cycle produced no usable data.
        let feed = response.json::<Option<ReviewFeed>>().await?;

        debug!(
            submissions = feed.as_ref().map(|f| f.homeworks.len()),
            from_date = window.from_date(),
            "Fetched review feed"
        );

        Ok(feed)
    }
}
