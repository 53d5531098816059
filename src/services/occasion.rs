use crate::models::{Item, Occasion};

const NEUTRAL_STYLE: &str = "neutral";

/// Item styles acceptable for an occasion; unknown occasions only accept neutral pieces
pub fn allowed_styles(occasion: &Occasion) -> &'static [&'static str] {
    match occasion {
        Occasion::Casual => &["casual", "neutral", "work"],
        Occasion::Work => &["work", "formal", "neutral", "casual"],
        Occasion::Party => &["party", "casual", "neutral"],
        Occasion::Formal => &["formal", "work", "neutral"],
        Occasion::Other(_) => &["neutral"],
    }
}

/// Keeps the items whose style suits the occasion, preserving order
///
/// Items without a style pass wherever neutral pieces are allowed.
pub fn filter_by_occasion<'a, I>(items: I, occasion: &Occasion) -> Vec<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    let allowed = allowed_styles(occasion);
    let accepts_unstyled = allowed.contains(&NEUTRAL_STYLE);
    items
        .into_iter()
        .filter(|item| {
            if item.style.trim().is_empty() {
                accepts_unstyled
            } else {
                allowed.contains(&item.style_key().as_str())
            }
        })
        .collect()
}
