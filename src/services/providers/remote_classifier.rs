/// Category classifier backed by a model-serving HTTP endpoint
///
/// The endpoint receives the raw image bytes and answers with
/// `{"category": "<label>"}`, the same shape `/predict-category` returns.
use crate::{
    error::{AppError, AppResult},
    models::Category,
    services::providers::CategoryClassifier,
};
use reqwest::{header::CONTENT_TYPE, Client as HttpClient};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct Prediction {
    category: String,
}

#[derive(Clone)]
pub struct RemoteClassifier {
    http_client: HttpClient,
    endpoint: String,
}

impl RemoteClassifier {
    pub fn new(endpoint: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            endpoint,
        })
    }
}

#[async_trait::async_trait]
impl CategoryClassifier for RemoteClassifier {
    async fn classify(&self, image: &[u8]) -> AppResult<Category> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(image.to_vec())
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Classification(format!(
                "Classifier returned status {}: {}",
                status, body
            )));
        }

        let prediction: Prediction = response.json().await?;
        let category = Category::from_label(&prediction.category).ok_or_else(|| {
            AppError::Classification("Classifier returned an empty label".to_string())
        })?;

        tracing::debug!(
            label = %prediction.category,
            category = %category,
            bytes = image.len(),
            "Classified image"
        );

        Ok(category)
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
