use rand::seq::SliceRandom;

use crate::models::{Category, Item, Outcome, Preferences, Wardrobe};
use crate::services::catalog::virtual_catalog;
use crate::services::occasion::filter_by_occasion;
use crate::services::scoring::{
    body_type_score, style_consistency, style_score, ColorScoringPolicy, PairwiseHarmony,
    UndertoneBuckets,
};

/// Score a two-slot candidate has to beat to be selected
const PAIR_SCORE_FLOOR: f64 = -1.0;

const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/400x400";

/// The two recommendation shapes the API offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutfitStrategy {
    /// Top and bottom from the user's own wardrobe, scored on color harmony and
    /// style consistency
    TwoSlot,
    /// Top, bottom and shoes, topped up from the virtual catalog, scored on
    /// style, undertone and fit
    ThreeSlot,
}

impl OutfitStrategy {
    /// Slots in enumeration order, outermost first
    pub fn slots(&self) -> &'static [Category] {
        match self {
            OutfitStrategy::TwoSlot => &[Category::Top, Category::Bottom],
            OutfitStrategy::ThreeSlot => &[Category::Top, Category::Bottom, Category::Shoes],
        }
    }

    /// Color policy matching the strategy's arity
    pub fn color_policy(&self, preferences: &Preferences) -> Box<dyn ColorScoringPolicy> {
        match self {
            OutfitStrategy::TwoSlot => Box::new(PairwiseHarmony),
            OutfitStrategy::ThreeSlot => Box::new(UndertoneBuckets::new(preferences.undertone)),
        }
    }
}

/// One scored combination of items, one per slot
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub items: Vec<&'a Item>,
    pub score: f64,
}

impl Candidate<'_> {
    fn ids(&self) -> Vec<String> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }
}

/// Picks outfits from a wardrobe for one set of preferences
pub struct OutfitEngine<'a> {
    preferences: &'a Preferences,
}

impl<'a> OutfitEngine<'a> {
    pub fn new(preferences: &'a Preferences) -> Self {
        Self { preferences }
    }

    /// Two-slot recommendation: ids of the best top and bottom
    ///
    /// Returns an empty list when the wardrobe has no tops or no bottoms; callers
    /// wanting catalog supplementation should use [`Self::generate_outfit`].
    pub fn recommend_pair(&self, wardrobe: &Wardrobe) -> Vec<String> {
        let strategy = OutfitStrategy::TwoSlot;
        let sources: Vec<Vec<&Item>> = strategy
            .slots()
            .iter()
            .map(|slot| wardrobe.in_slot(*slot))
            .collect();

        if sources.iter().any(|slot| slot.is_empty()) {
            tracing::debug!("Wardrobe lacks a top or a bottom, no pair to recommend");
            return Vec::new();
        }

        let policy = strategy.color_policy(self.preferences);
        let candidates: Vec<Candidate> = cross_product(&sources)
            .into_iter()
            .map(|items| {
                let score = self.score(strategy, policy.as_ref(), &items);
                Candidate { items, score }
            })
            .collect();

        tracing::debug!(
            candidates = candidates.len(),
            policy = policy.name(),
            "Scored top/bottom pairs"
        );

        match select_best(candidates, PAIR_SCORE_FLOOR) {
            Some(best) => {
                tracing::info!(score = best.score, "Selected pair");
                best.ids()
            }
            None => {
                tracing::warn!("No pair scored above the floor, picking at random");
                random_pair(&sources[0], &sources[1])
            }
        }
    }

    /// Three-slot recommendation, supplemented from the virtual catalog
    ///
    /// Each slot draws from the occasion-filtered wardrobe, or from the catalog
    /// entries for the occasion when the wardrobe has nothing suitable. Outfits
    /// made only of catalog items are skipped. If nothing is left, a placeholder
    /// outfit with score 0 is returned.
    pub fn generate_outfit(&self, wardrobe: &Wardrobe) -> Outcome {
        let strategy = OutfitStrategy::ThreeSlot;
        let occasion = &self.preferences.occasion;
        let catalog = virtual_catalog();

        let sources: Vec<Vec<&Item>> = strategy
            .slots()
            .iter()
            .map(|slot| {
                let owned = filter_by_occasion(wardrobe.in_slot(*slot), occasion);
                if owned.is_empty() {
                    catalog.for_occasion(*slot, occasion)
                } else {
                    owned
                }
            })
            .collect();

        let policy = strategy.color_policy(self.preferences);
        let candidates: Vec<Candidate> = cross_product(&sources)
            .into_iter()
            .filter(|items| !items.iter().all(|item| item.is_catalog()))
            .map(|items| {
                let score = self.score(strategy, policy.as_ref(), &items);
                Candidate { items, score }
            })
            .collect();

        tracing::debug!(
            occasion = %occasion,
            tops = sources[0].len(),
            bottoms = sources[1].len(),
            shoes = sources[2].len(),
            candidates = candidates.len(),
            policy = policy.name(),
            "Scored outfit candidates"
        );

        match select_best(candidates, f64::NEG_INFINITY) {
            Some(best) => {
                tracing::info!(score = best.score, "Selected outfit");
                partition(best)
            }
            None => {
                tracing::info!(occasion = %occasion, "No candidates, using fallback outfit");
                self.fallback_outfit()
            }
        }
    }

    fn score(
        &self,
        strategy: OutfitStrategy,
        policy: &dyn ColorScoringPolicy,
        items: &[&Item],
    ) -> f64 {
        let occasion = &self.preferences.occasion;
        let fit = body_type_score(items, self.preferences.body_measurements());

        match (strategy, items) {
            (OutfitStrategy::TwoSlot, [top, bottom]) => {
                policy.score(items) + style_consistency(top, bottom, occasion) + fit
            }
            _ => style_score(items, occasion) + policy.score(items) + fit,
        }
    }

    /// First catalog entry per slot for the occasion, or a generic placeholder
    fn fallback_outfit(&self) -> Outcome {
        let occasion = &self.preferences.occasion;
        let catalog = virtual_catalog();

        let suggested_items = OutfitStrategy::ThreeSlot
            .slots()
            .iter()
            .map(|slot| {
                catalog
                    .for_occasion(*slot, occasion)
                    .first()
                    .map(|item| (*item).clone())
                    .unwrap_or_else(|| placeholder(*slot, occasion.as_str()))
            })
            .collect();

        Outcome {
            user_items: Vec::new(),
            suggested_items,
            score: 0.0,
        }
    }
}

/// All combinations taking one item per slot, outer slot major
pub fn cross_product<'a>(sources: &[Vec<&'a Item>]) -> Vec<Vec<&'a Item>> {
    sources.iter().fold(vec![Vec::new()], |combinations, slot| {
        combinations
            .iter()
            .flat_map(|prefix| {
                slot.iter().map(move |item| {
                    let mut combination = prefix.clone();
                    combination.push(*item);
                    combination
                })
            })
            .collect()
    })
}

/// Highest-scoring candidate strictly above `floor`; earlier candidates win ties
pub fn select_best(candidates: Vec<Candidate<'_>>, floor: f64) -> Option<Candidate<'_>> {
    let mut best: Option<Candidate> = None;
    let mut best_score = floor;

    for candidate in candidates {
        if candidate.score > best_score {
            best_score = candidate.score;
            best = Some(candidate);
        }
    }

    best
}

/// Non-deterministic last resort for the two-slot recommender
fn random_pair(tops: &[&Item], bottoms: &[&Item]) -> Vec<String> {
    let mut rng = rand::thread_rng();
    [tops.choose(&mut rng), bottoms.choose(&mut rng)]
        .into_iter()
        .flatten()
        .map(|item| item.id.clone())
        .collect()
}

fn partition(best: Candidate<'_>) -> Outcome {
    let (suggested, owned): (Vec<&Item>, Vec<&Item>) =
        best.items.into_iter().partition(|item| item.is_catalog());

    Outcome {
        user_items: owned.into_iter().cloned().collect(),
        suggested_items: suggested.into_iter().cloned().collect(),
        score: best.score,
    }
}

fn placeholder(slot: Category, style: &str) -> Item {
    let (id, name, color) = match slot {
        Category::Bottom => ("fallback_bottom", "Basic Bottom", "Black"),
        Category::Shoes => ("fallback_shoes", "Basic Shoes", "Black"),
        _ => ("fallback_top", "Basic Top", "White"),
    };

    Item {
        id: id.to_string(),
        category: Some(slot),
        color: color.to_string(),
        style: style.to_string(),
        name: name.to_string(),
        image_url: Some(PLACEHOLDER_IMAGE_URL.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Occasion, Undertone};

    fn item(id: &str, category: Category, color: &str, style: &str) -> Item {
        Item {
            id: id.to_string(),
            category: Some(category),
            color: color.to_string(),
            style: style.to_string(),
            name: String::new(),
            image_url: None,
        }
    }

    fn wardrobe(items: Vec<Item>) -> Wardrobe {
        Wardrobe::try_from(items).unwrap()
    }

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_cross_product_is_top_major() {
        let t1 = item("t1", Category::Top, "", "");
        let t2 = item("t2", Category::Top, "", "");
        let b1 = item("b1", Category::Bottom, "", "");
        let b2 = item("b2", Category::Bottom, "", "");

        let combos = cross_product(&[vec![&t1, &t2], vec![&b1, &b2]]);
        let order: Vec<(String, String)> = combos
            .iter()
            .map(|c| (c[0].id.clone(), c[1].id.clone()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("t1".into(), "b1".into()),
                ("t1".into(), "b2".into()),
                ("t2".into(), "b1".into()),
                ("t2".into(), "b2".into()),
            ]
        );
    }

    #[test]
    fn test_cross_product_with_empty_slot() {
        let t1 = item("t1", Category::Top, "", "");
        assert!(cross_product(&[vec![&t1], vec![]]).is_empty());
    }

    #[test]
    fn test_select_best_prefers_first_on_ties() {
        let a = item("a", Category::Top, "", "");
        let b = item("b", Category::Top, "", "");
        let c = item("c", Category::Top, "", "");
        let candidates = vec![
            Candidate { items: vec![&a], score: 4.0 },
            Candidate { items: vec![&b], score: 7.0 },
            Candidate { items: vec![&c], score: 7.0 },
        ];

        for _ in 0..10 {
            let best = select_best(candidates.clone(), f64::NEG_INFINITY).unwrap();
            assert_eq!(best.items[0].id, "b");
        }
    }

    #[test]
    fn test_select_best_respects_floor() {
        let a = item("a", Category::Top, "", "");
        let candidates = vec![Candidate { items: vec![&a], score: -1.0 }];
        assert!(select_best(candidates, -1.0).is_none());
    }

    #[test]
    fn test_pair_single_top_and_bottom() {
        let wardrobe = wardrobe(vec![
            item("top1", Category::Top, "Blue", "Casual"),
            item("bottom1", Category::Bottom, "Gray", "Casual"),
        ]);
        let prefs = Preferences::new(Occasion::Casual);

        let ids = OutfitEngine::new(&prefs).recommend_pair(&wardrobe);
        assert_eq!(ids, vec!["top1", "bottom1"]);
    }

    #[test]
    fn test_pair_prefers_harmony_and_matching_style() {
        let wardrobe = wardrobe(vec![
            item("formal_top", Category::Top, "Black", "Formal"),
            item("casual_top", Category::Top, "Blue", "Casual"),
            item("jeans", Category::Bottom, "Blue", "Casual"),
        ]);
        let prefs = Preferences::new(Occasion::Casual);

        let ids = OutfitEngine::new(&prefs).recommend_pair(&wardrobe);
        assert_eq!(ids, vec!["casual_top", "jeans"]);
    }

    #[test]
    fn test_pair_ignores_occasion_filter() {
        // a party top is never filtered out in the two-slot path
        let wardrobe = wardrobe(vec![
            item("party_top", Category::Top, "Red", "Party"),
            item("party_skirt", Category::Bottom, "Red", "Party"),
        ]);
        let prefs = Preferences::new(Occasion::Formal);

        let ids = OutfitEngine::new(&prefs).recommend_pair(&wardrobe);
        assert_eq!(ids, vec!["party_top", "party_skirt"]);
    }

    #[test]
    fn test_pair_tie_goes_to_first_top() {
        let wardrobe = wardrobe(vec![
            item("first", Category::Top, "White", "Work"),
            item("second", Category::Top, "White", "Work"),
            item("slacks", Category::Bottom, "White", "Work"),
        ]);
        let prefs = Preferences::new(Occasion::Work);

        for _ in 0..10 {
            let ids = OutfitEngine::new(&prefs).recommend_pair(&wardrobe);
            assert_eq!(ids, vec!["first", "slacks"]);
        }
    }

    #[test]
    fn test_pair_without_bottoms_is_empty() {
        let wardrobe = wardrobe(vec![item("top1", Category::Top, "Blue", "Casual")]);
        let prefs = Preferences::default();
        assert!(OutfitEngine::new(&prefs).recommend_pair(&wardrobe).is_empty());
    }

    // Non-deterministic path: every pair scores below the floor, so the pick is
    // random. Only membership is asserted.
    #[test]
    fn test_pair_random_fallback_non_deterministic() {
        let wardrobe = wardrobe(vec![
            item("blazer", Category::Top, "Black", "Formal"),
            item("tux_jacket", Category::Top, "Black", "Formal"),
            item("shorts", Category::Bottom, "White", "Casual"),
        ]);
        let prefs = Preferences::new(Occasion::Party);

        let ids = OutfitEngine::new(&prefs).recommend_pair(&wardrobe);
        assert_eq!(ids.len(), 2);
        assert!(ids[0] == "blazer" || ids[0] == "tux_jacket");
        assert_eq!(ids[1], "shorts");
    }

    #[test]
    fn test_generate_uses_own_items_for_every_slot() {
        let wardrobe = wardrobe(vec![
            item("tee", Category::Top, "White", "Casual"),
            item("jeans", Category::Bottom, "Blue", "Casual"),
            item("sneakers", Category::Shoes, "White", "Casual"),
        ]);
        let prefs = Preferences::new(Occasion::Casual);

        let outcome = OutfitEngine::new(&prefs).generate_outfit(&wardrobe);
        assert_eq!(ids(&outcome.user_items), vec!["tee", "jeans", "sneakers"]);
        assert!(outcome.suggested_items.is_empty());
        // style 10 + color (2 + 0 + 2) / 3
        assert!((outcome.score - (10.0 + 4.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_generate_keeps_unstyled_items_for_formal() {
        let wardrobe = wardrobe(vec![
            item("shirt", Category::Top, "White", ""),
            item("trousers", Category::Bottom, "Black", ""),
            item("loafers", Category::Shoes, "Black", ""),
        ]);
        let prefs = Preferences::new(Occasion::Formal);

        let outcome = OutfitEngine::new(&prefs).generate_outfit(&wardrobe);
        assert_eq!(ids(&outcome.user_items), vec!["shirt", "trousers", "loafers"]);
        assert!(outcome.suggested_items.is_empty());
        // unstyled pieces score as casual: no style points, achromatic colors 2 each
        assert!((outcome.score - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_generate_supplements_missing_slots_from_catalog() {
        let wardrobe = wardrobe(vec![item("shirt", Category::Top, "Blue", "Work")]);
        let prefs = Preferences::new(Occasion::Work);

        let outcome = OutfitEngine::new(&prefs).generate_outfit(&wardrobe);
        assert_eq!(ids(&outcome.user_items), vec!["shirt"]);
        assert_eq!(
            ids(&outcome.suggested_items),
            vec!["vc_bottom_work_1", "vc_shoes_work_1"]
        );
    }

    #[test]
    fn test_generate_empty_wardrobe_uses_formal_catalog() {
        let prefs = Preferences::new(Occasion::Formal);

        let outcome = OutfitEngine::new(&prefs).generate_outfit(&Wardrobe::default());
        assert!(outcome.user_items.is_empty());
        assert_eq!(outcome.score, 0.0);
        assert_eq!(outcome.suggested_items.len(), 3);

        let catalog = virtual_catalog();
        for suggested in &outcome.suggested_items {
            assert_eq!(suggested.style, "Formal");
            let slot = suggested.category.unwrap();
            assert!(catalog.slot(slot).contains(suggested));
        }
    }

    #[test]
    fn test_generate_falls_back_to_placeholders() {
        let wardrobe = wardrobe(vec![
            item("tee", Category::Top, "White", "Casual"),
            item("jeans", Category::Bottom, "Blue", "Casual"),
            item("sneakers", Category::Shoes, "White", "Casual"),
        ]);
        let prefs = Preferences::new(Occasion::from("gala"));

        let outcome = OutfitEngine::new(&prefs).generate_outfit(&wardrobe);
        assert_eq!(outcome.score, 0.0);
        assert!(outcome.user_items.is_empty());
        assert_eq!(
            ids(&outcome.suggested_items),
            vec!["fallback_top", "fallback_bottom", "fallback_shoes"]
        );
        assert_eq!(outcome.suggested_items[0].color, "White");
        assert_eq!(outcome.suggested_items[2].style, "gala");
    }

    #[test]
    fn test_generate_never_returns_all_catalog_when_owned_item_exists() {
        let wardrobe = wardrobe(vec![
            item("heels", Category::Shoes, "Gold", "Party"),
            item("sweater", Category::Top, "Green", "Casual"),
        ]);
        let prefs = Preferences::new(Occasion::Party);

        let outcome = OutfitEngine::new(&prefs).generate_outfit(&wardrobe);
        assert!(!outcome.user_items.is_empty());
        assert!(outcome.score > 0.0);
    }

    #[test]
    fn test_generate_tie_goes_to_first_enumerated() {
        let wardrobe = wardrobe(vec![
            item("tee_a", Category::Top, "White", "Casual"),
            item("tee_b", Category::Top, "White", "Casual"),
            item("jeans", Category::Bottom, "Blue", "Casual"),
            item("sneakers", Category::Shoes, "White", "Casual"),
        ]);
        let prefs = Preferences::new(Occasion::Casual);

        for _ in 0..10 {
            let outcome = OutfitEngine::new(&prefs).generate_outfit(&wardrobe);
            assert_eq!(outcome.user_items[0].id, "tee_a");
        }
    }

    #[test]
    fn test_generate_undertone_changes_winner() {
        let wardrobe = wardrobe(vec![
            item("red_top", Category::Top, "Red", "Casual"),
            item("blue_top", Category::Top, "Blue", "Casual"),
            item("jeans", Category::Bottom, "Black", "Casual"),
            item("sneakers", Category::Shoes, "White", "Casual"),
        ]);

        let mut prefs = Preferences::new(Occasion::Casual);
        prefs.undertone = Undertone::Warm;
        let outcome = OutfitEngine::new(&prefs).generate_outfit(&wardrobe);
        assert_eq!(outcome.user_items[0].id, "red_top");

        prefs.undertone = Undertone::Cool;
        let outcome = OutfitEngine::new(&prefs).generate_outfit(&wardrobe);
        assert_eq!(outcome.user_items[0].id, "blue_top");
    }

    #[test]
    fn test_strategy_policies() {
        let prefs = Preferences::default();
        assert_eq!(OutfitStrategy::TwoSlot.slots().len(), 2);
        assert_eq!(OutfitStrategy::ThreeSlot.slots().len(), 3);
        assert_eq!(
            OutfitStrategy::TwoSlot.color_policy(&prefs).name(),
            "pairwise_harmony"
        );
        assert_eq!(
            OutfitStrategy::ThreeSlot.color_policy(&prefs).name(),
            "undertone_buckets"
        );
    }
}
