//! Scoring functions for candidate outfits
//!
//! Every function takes the items of one candidate and returns its contribution
//! to the candidate's total. Empty candidates always score zero.

use crate::models::{Item, Occasion, Undertone};
use crate::services::palette::{color_vector, distance, style_rank};

const EXACT_STYLE_POINTS: f64 = 10.0;
const NEUTRAL_STYLE_POINTS: f64 = 3.0;

const WARM_COLORS: [&str; 4] = ["red", "orange", "yellow", "gold"];
const COOL_COLORS: [&str; 4] = ["blue", "green", "purple", "silver"];
const PARTY_COLORS: [&str; 3] = ["red", "gold", "silver"];
const FORMAL_COLORS: [&str; 3] = ["black", "gray", "navy"];
const ACHROMATIC_COLORS: [&str; 3] = ["black", "white", "gray"];

fn average(total: f64, items: &[&Item]) -> f64 {
    if items.is_empty() {
        0.0
    } else {
        total / items.len() as f64
    }
}

/// Rewards items whose style matches the occasion, with partial credit for neutral pieces
pub fn style_score(items: &[&Item], occasion: &Occasion) -> f64 {
    let total: f64 = items
        .iter()
        .map(|item| {
            let style = item.style_key();
            if style == occasion.as_str() {
                EXACT_STYLE_POINTS
            } else if style.contains("neutral") {
                NEUTRAL_STYLE_POINTS
            } else {
                0.0
            }
        })
        .sum();

    average(total, items)
}

/// Strategy for scoring how well the colors of a candidate work together
pub trait ColorScoringPolicy: Send + Sync {
    fn score(&self, items: &[&Item]) -> f64;

    /// Policy name for logging
    fn name(&self) -> &'static str;
}

/// Distance-based harmony between the first two items of a candidate
///
/// Closer colors score higher. Used by the two-slot recommender.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairwiseHarmony;

/// Color harmony of two named colors: `max(0, 1.5 - distance) * 5`
pub fn calculate_color_harmony(first: &str, second: &str) -> f64 {
    let gap = distance(&color_vector(first), &color_vector(second));
    (1.5 - gap).max(0.0) * 5.0
}

impl ColorScoringPolicy for PairwiseHarmony {
    fn score(&self, items: &[&Item]) -> f64 {
        match items {
            [first, second, ..] => calculate_color_harmony(&first.color, &second.color),
            _ => 0.0,
        }
    }

    fn name(&self) -> &'static str {
        "pairwise_harmony"
    }
}

/// Per-item color buckets biased by the wearer's undertone
///
/// Each item earns the points of the first bucket it falls into. Used by the
/// three-slot generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UndertoneBuckets {
    pub undertone: Undertone,
}

impl UndertoneBuckets {
    pub fn new(undertone: Undertone) -> Self {
        Self { undertone }
    }

    fn item_points(&self, item: &Item) -> f64 {
        let color_key = item.color_key();
        let color = color_key.as_str();
        let style = item.style_key();

        if self.undertone == Undertone::Warm && WARM_COLORS.contains(&color) {
            5.0
        } else if self.undertone == Undertone::Cool && COOL_COLORS.contains(&color) {
            5.0
        } else if PARTY_COLORS.contains(&color) && style.contains("party") {
            4.0
        } else if FORMAL_COLORS.contains(&color) && style.contains("formal") {
            4.0
        } else if ACHROMATIC_COLORS.contains(&color) {
            2.0
        } else {
            0.0
        }
    }
}

impl ColorScoringPolicy for UndertoneBuckets {
    fn score(&self, items: &[&Item]) -> f64 {
        let total: f64 = items.iter().map(|item| self.item_points(item)).sum();
        average(total, items)
    }

    fn name(&self) -> &'static str {
        "undertone_buckets"
    }
}

/// Crude fit heuristic driven by keywords in item names
///
/// Needs both measurements; otherwise contributes nothing.
pub fn body_type_score(items: &[&Item], measurements: Option<(f64, f64)>) -> f64 {
    let Some((height, weight)) = measurements else {
        return 0.0;
    };
    let bmi_proxy = weight / height.powi(2);

    let total: f64 = items
        .iter()
        .map(|item| {
            let name = item.name_key();
            if height < 165.0 && name.contains("elongating") {
                4.0
            } else if bmi_proxy > 25.0 && name.contains("loose") {
                3.0
            } else if bmi_proxy < 18.5 && name.contains("fitted") {
                3.0
            } else {
                0.0
            }
        })
        .sum();

    average(total, items)
}

/// Penalises top/bottom pairs of differing formality, rewards each piece matching the occasion
pub fn style_consistency(top: &Item, bottom: &Item, occasion: &Occasion) -> f64 {
    let requested = style_rank(occasion.as_str());
    let top_rank = style_rank(&top.style_key());
    let bottom_rank = style_rank(&bottom.style_key());

    let mut score = -(f64::from(top_rank.abs_diff(bottom_rank)) * 2.0);
    if top_rank == requested {
        score += 5.0;
    }
    if bottom_rank == requested {
        score += 5.0;
    }
    score
}
