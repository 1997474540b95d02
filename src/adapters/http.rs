use crate::domain::ports::ContentSource;
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use reqwest::Client;

/// Fetches JSON documents over HTTP.
#[derive(Debug, Clone, Default)]
pub struct HttpContentSource {
    client: Client,
}

impl HttpContentSource {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value> {
        tracing::debug!("Making content request to: {}", url);
        let response = self.client.get(url).send().await?;

        tracing::debug!("Content response status: {}", response.status());
        if !response.status().is_success() {
            return Err(SiteError::ContentStatusError {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}
