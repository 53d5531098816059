use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::{
    error::AppResult,
    models::{Category, Item, Wardrobe},
    services::providers::{CategoryClassifier, ImageFetcher},
};

/// Category given to untagged items when classification is not possible
const DEFAULT_CATEGORY: Category = Category::Top;

/// Resolves missing item categories before items enter the outfit engine
///
/// Never fails: items that cannot be classified are tagged `Unknown`, and items
/// that are not classified at all get the default category.
#[derive(Clone)]
pub struct AutoTagger {
    classifier: Option<Arc<dyn CategoryClassifier>>,
    fetcher: Arc<dyn ImageFetcher>,
}

impl AutoTagger {
    pub fn new(
        classifier: Option<Arc<dyn CategoryClassifier>>,
        fetcher: Arc<dyn ImageFetcher>,
    ) -> Self {
        Self {
            classifier,
            fetcher,
        }
    }

    pub fn has_classifier(&self) -> bool {
        self.classifier.is_some()
    }

    /// Tags every item that arrived without a category
    ///
    /// Classification runs in one task per untagged item; the returned wardrobe
    /// keeps the submission order.
    pub async fn tag(&self, items: Vec<Item>) -> Wardrobe {
        let mut pending: Vec<(Item, Option<JoinHandle<Category>>)> =
            Vec::with_capacity(items.len());

        for mut item in items {
            if item.category.is_some() {
                pending.push((item, None));
                continue;
            }

            match (&self.classifier, item.image_url.clone()) {
                (Some(classifier), Some(url)) => {
                    let classifier = classifier.clone();
                    let fetcher = self.fetcher.clone();
                    let task = tokio::spawn(async move {
                        classify_or_unknown(classifier.as_ref(), fetcher.as_ref(), &url).await
                    });
                    pending.push((item, Some(task)));
                }
                _ => {
                    tracing::debug!(
                        item_id = %item.id,
                        "No classifier or image, using default category"
                    );
                    item.category = Some(DEFAULT_CATEGORY);
                    pending.push((item, None));
                }
            }
        }

        let mut tagged = Vec::with_capacity(pending.len());
        for (mut item, task) in pending {
            if let Some(task) = task {
                let category = match task.await {
                    Ok(category) => category,
                    Err(e) => {
                        tracing::error!(item_id = %item.id, error = %e, "Tagging task failed");
                        Category::Unknown
                    }
                };
                item.category = Some(category);
            }
            tagged.push(item);
        }

        Wardrobe::from_tagged(tagged)
    }
}

async fn classify_or_unknown(
    classifier: &dyn CategoryClassifier,
    fetcher: &dyn ImageFetcher,
    url: &str,
) -> Category {
    match classify_url(classifier, fetcher, url).await {
        Ok(category) => {
            tracing::info!(
                url = %url,
                category = %category,
                classifier = classifier.name(),
                "Auto-tagged item"
            );
            category
        }
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "Auto-tagging failed, marking item as unknown");
            Category::Unknown
        }
    }
}

async fn classify_url(
    classifier: &dyn CategoryClassifier,
    fetcher: &dyn ImageFetcher,
    url: &str,
) -> AppResult<Category> {
    let image = fetcher.fetch(url).await?;
    classifier.classify(&image).await
}
