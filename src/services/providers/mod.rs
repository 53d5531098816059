/// External collaborators of the outfit engine
///
/// The engine never talks to a model or the network directly: category
/// classification and image downloads sit behind these traits so they can be
/// swapped (remote model server, local model, test doubles) and shared across
/// requests through `Arc`.
use crate::{error::AppResult, models::Category};

pub mod http_fetcher;
pub mod remote_classifier;

pub use http_fetcher::HttpImageFetcher;
pub use remote_classifier::RemoteClassifier;

/// Trait for image category classifiers
///
/// Implementations are shared by every request, so `classify` may be called
/// concurrently. Wrap non-reentrant models in [`Serialized`].
#[async_trait::async_trait]
pub trait CategoryClassifier: Send + Sync {
    /// Predicts the garment category shown in an encoded image
    async fn classify(&self, image: &[u8]) -> AppResult<Category>;

    /// Classifier name for logging
    fn name(&self) -> &'static str;
}

/// Trait for downloading item photos
#[async_trait::async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Fetches the raw bytes behind an image URL
    async fn fetch(&self, url: &str) -> AppResult<Vec<u8>>;
}

/// Serialises access to a classifier that cannot run concurrently
pub struct Serialized<C> {
    inner: tokio::sync::Mutex<C>,
    name: &'static str,
}

impl<C: CategoryClassifier> Serialized<C> {
    pub fn new(classifier: C) -> Self {
        let name = classifier.name();
        Self {
            inner: tokio::sync::Mutex::new(classifier),
            name,
        }
    }
}

#[async_trait::async_trait]
impl<C: CategoryClassifier> CategoryClassifier for Serialized<C> {
    async fn classify(&self, image: &[u8]) -> AppResult<Category> {
        let classifier = self.inner.lock().await;
        classifier.classify(image).await
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
