use serde::{Deserialize, Serialize};

use super::{Occasion, Undertone};

/// Request-scoped user preferences for outfit generation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    /// Requested occasion, sent by clients as `style`
    #[serde(rename = "style", default)]
    pub occasion: Occasion,
    /// Height in centimetres
    #[serde(default)]
    pub height: Option<f64>,
    /// Weight in kilograms
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(rename = "body_color", default)]
    pub undertone: Undertone,
}

impl Preferences {
    pub fn new(occasion: Occasion) -> Self {
        Self {
            occasion,
            ..Self::default()
        }
    }

    /// Height and weight, only when both are present and non-zero
    pub fn body_measurements(&self) -> Option<(f64, f64)> {
        match (self.height, self.weight) {
            (Some(height), Some(weight)) if height != 0.0 && weight != 0.0 => {
                Some((height, weight))
            }
            _ => None,
        }
    }
}
