use serde::{Deserialize, Deserializer, Serialize};

use super::Category;
use crate::error::{AppError, AppResult};

/// Id prefix marking items that come from the virtual catalog
pub const CATALOG_ID_PREFIX: &str = "vc_";

/// Style assumed for items submitted without one
const DEFAULT_STYLE: &str = "casual";

/// A single clothing piece, either user-owned or from the virtual catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_category")]
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "nullable_string")]
    pub color: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub style: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(
        rename = "imageUrl",
        alias = "image_url",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
}

impl Item {
    /// Whether the item was supplied by the virtual catalog
    pub fn is_catalog(&self) -> bool {
        self.id.starts_with(CATALOG_ID_PREFIX)
    }

    /// Lowercased style, with an empty style read as casual
    pub fn style_key(&self) -> String {
        let style = self.style.trim().to_lowercase();
        if style.is_empty() {
            DEFAULT_STYLE.to_string()
        } else {
            style
        }
    }

    pub fn color_key(&self) -> String {
        self.color.trim().to_lowercase()
    }

    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Empty or missing category labels leave the item untagged
fn deserialize_category<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let label: Option<String> = Option::deserialize(deserializer)?;
    Ok(label.as_deref().and_then(Category::from_label))
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A wardrobe in which every item has a resolved category
///
/// Only the auto-tagger or a checked conversion can build one, so untagged items
/// never reach the occasion filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wardrobe {
    items: Vec<Item>,
}

impl Wardrobe {
    pub(crate) fn from_tagged(items: Vec<Item>) -> Self {
        debug_assert!(items.iter().all(|item| item.category.is_some()));
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items of one category, in submission order
    pub fn in_slot(&self, category: Category) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.category == Some(category))
            .collect()
    }
}

impl TryFrom<Vec<Item>> for Wardrobe {
    type Error = AppError;

    fn try_from(items: Vec<Item>) -> AppResult<Self> {
        if let Some(untagged) = items.iter().find(|item| item.category.is_none()) {
            return Err(AppError::InvalidInput(format!(
                "Item {} has no category",
                untagged.id
            )));
        }
        Ok(Self::from_tagged(items))
    }
}

/// Winning three-slot outfit, split by origin
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub user_items: Vec<Item>,
    pub suggested_items: Vec<Item>,
    pub score: f64,
}

/// Winning two-slot outfit as a list of item ids
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PairRecommendation {
    pub selected_outfit_ids: Vec<String>,
}
