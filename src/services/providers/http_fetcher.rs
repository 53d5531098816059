use crate::{
    error::{AppError, AppResult},
    services::providers::ImageFetcher,
};
use reqwest::Client as HttpClient;
use std::time::Duration;

/// Downloads item photos over HTTP with a fixed per-request timeout
#[derive(Clone)]
pub struct HttpImageFetcher {
    http_client: HttpClient,
}

impl HttpImageFetcher {
    pub fn new(timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self { http_client })
    }
}

#[async_trait::async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> AppResult<Vec<u8>> {
        let response = self.http_client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "Image fetch returned status {}",
                response.status()
            )));
        }

        let bytes = response.bytes().await?;
        tracing::debug!(url = %url, bytes = bytes.len(), "Fetched item image");

        Ok(bytes.to_vec())
    }
}
