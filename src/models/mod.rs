use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;

pub mod item;
pub mod preferences;

pub use item::{Item, Outcome, PairRecommendation, Wardrobe, CATALOG_ID_PREFIX};
pub use preferences::Preferences;

/// Garment slot an item fills in an outfit
///
/// Parsed once at the request boundary (or by the auto-tagger) so the engine
/// never deals with free-text categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Top,
    Bottom,
    Shoes,
    Dress,
    Outerwear,
    /// Assigned when classification was attempted and failed
    Unknown,
}

impl Category {
    /// Parses a client or classifier label
    ///
    /// Case-insensitive, accepts singular and plural forms. Returns `None` for an
    /// empty label (the item still needs tagging); any other unrecognised label
    /// becomes `Unknown`.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        if label.is_empty() {
            return None;
        }

        let category = match label.as_str() {
            "top" | "tops" | "shirt" | "shirts" | "blouse" | "t-shirt" => Category::Top,
            "bottom" | "bottoms" | "pants" | "trousers" | "skirt" | "shorts" | "jeans" => {
                Category::Bottom
            }
            "shoe" | "shoes" | "footwear" => Category::Shoes,
            "dress" | "dresses" => Category::Dress,
            "outerwear" | "jacket" | "jackets" | "coat" | "coats" => Category::Outerwear,
            _ => Category::Unknown,
        };

        Some(category)
    }

    /// Label used on the wire
    pub fn label(&self) -> &'static str {
        match self {
            Category::Top => "Tops",
            Category::Bottom => "Bottoms",
            Category::Shoes => "Shoes",
            Category::Dress => "Dresses",
            Category::Outerwear => "Outerwear",
            Category::Unknown => "Unknown",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Category::from_label(&label).unwrap_or(Category::Unknown))
    }
}

/// Occasion (a.k.a. style preference) the outfit is requested for
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Occasion {
    #[default]
    Casual,
    Work,
    Party,
    Formal,
    /// Free-text occasion outside the known set, stored lowercased
    Other(String),
}

impl Occasion {
    pub fn as_str(&self) -> &str {
        match self {
            Occasion::Casual => "casual",
            Occasion::Work => "work",
            Occasion::Party => "party",
            Occasion::Formal => "formal",
            Occasion::Other(name) => name,
        }
    }
}

impl From<String> for Occasion {
    fn from(name: String) -> Self {
        Occasion::from(name.as_str())
    }
}

impl From<&str> for Occasion {
    fn from(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "casual" => Occasion::Casual,
            "work" => Occasion::Work,
            "party" => Occasion::Party,
            "formal" => Occasion::Formal,
            other => Occasion::Other(other.to_string()),
        }
    }
}

impl From<Occasion> for String {
    fn from(occasion: Occasion) -> Self {
        occasion.as_str().to_string()
    }
}

impl Display for Occasion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Skin undertone used to bias color scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Undertone {
    Warm,
    Cool,
    #[default]
    Neutral,
}

impl From<String> for Undertone {
    fn from(name: String) -> Self {
        match name.trim().to_lowercase().as_str() {
            "warm" => Undertone::Warm,
            "cool" => Undertone::Cool,
            _ => Undertone::Neutral,
        }
    }
}

impl From<Undertone> for String {
    fn from(undertone: Undertone) -> Self {
        match undertone {
            Undertone::Warm => "warm",
            Undertone::Cool => "cool",
            Undertone::Neutral => "neutral",
        }
        .to_string()
    }
}
