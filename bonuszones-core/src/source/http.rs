//! Live bonus API
//!
//! Single GET with a fixed timeout. No retries: any failure is returned to
//! the caller as-is.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use super::ZoneSource;
use crate::config::SourceConfig;
use crate::error::FetchError;

pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(config: &SourceConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.effective_timeout_seconds()))
            .build()
            .map_err(|e| FetchError::Transport {
                url: config.url.clone(),
                source: Box::new(e),
            })?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl ZoneSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        let transport = |e: reqwest::Error| FetchError::Transport {
            url: self.url.clone(),
            source: Box::new(e),
        };

        let response = self.client.get(&self.url).send().await.map_err(transport)?;

        let status = response.status();
        debug!("Bonus API responded with {}", status);
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        Ok(body.to_vec())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
