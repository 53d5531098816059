use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        advice::TipBook,
        providers::{
            CategoryClassifier, HttpImageFetcher, ImageFetcher, RemoteClassifier, Serialized,
        },
        AutoTagger,
    },
};

/// Shared application state
///
/// Built once at startup; every field is read-only and cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Option<Arc<dyn CategoryClassifier>>,
    pub tagger: AutoTagger,
    pub tips: Arc<TipBook>,
}

impl AppState {
    pub fn new(
        classifier: Option<Arc<dyn CategoryClassifier>>,
        fetcher: Arc<dyn ImageFetcher>,
        tips: TipBook,
    ) -> Self {
        Self {
            tagger: AutoTagger::new(classifier.clone(), fetcher),
            classifier,
            tips: Arc::new(tips),
        }
    }

    /// Wires the HTTP-backed providers described by the configuration
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let fetcher = Arc::new(HttpImageFetcher::new(config.image_fetch_timeout())?);

        let classifier: Option<Arc<dyn CategoryClassifier>> = match &config.classifier_url {
            Some(url) => {
                let remote = RemoteClassifier::new(url.clone(), config.classifier_timeout())?;
                tracing::info!(
                    classifier_url = %url,
                    serialized = config.serialize_classifier,
                    "Category classifier configured"
                );
                let classifier: Arc<dyn CategoryClassifier> = if config.serialize_classifier {
                    Arc::new(Serialized::new(remote))
                } else {
                    Arc::new(remote)
                };
                Some(classifier)
            }
            None => {
                tracing::warn!("No classifier configured, untagged items default to tops");
                None
            }
        };

        let tips = TipBook::builtin()?;
        tracing::info!(tips = tips.len(), "Loaded sustainability tips");

        Ok(Self::new(classifier, fetcher, tips))
    }
}
