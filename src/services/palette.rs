//! Numeric features for free-text colors and styles

/// RGB-like triple with components in `[0, 1]`
pub type ColorVector = [f64; 3];

/// Vector used for any color outside the table
pub const NEUTRAL_GRAY: ColorVector = [0.5, 0.5, 0.5];

const COLOR_TABLE: [(&str, ColorVector); 9] = [
    ("red", [1.0, 0.0, 0.0]),
    ("green", [0.0, 1.0, 0.0]),
    ("blue", [0.0, 0.0, 1.0]),
    ("black", [0.0, 0.0, 0.0]),
    ("white", [1.0, 1.0, 1.0]),
    ("yellow", [1.0, 1.0, 0.0]),
    ("purple", [0.5, 0.0, 0.5]),
    ("orange", [1.0, 0.5, 0.0]),
    ("gray", [0.5, 0.5, 0.5]),
];

const STYLE_RANKS: [(&str, u8); 4] = [("casual", 0), ("work", 1), ("party", 2), ("formal", 3)];

/// Looks up a color by name (case-insensitive), defaulting to neutral gray
pub fn color_vector(name: &str) -> ColorVector {
    let key = name.to_lowercase();
    COLOR_TABLE
        .iter()
        .find(|(color, _)| *color == key)
        .map(|(_, vector)| *vector)
        .unwrap_or(NEUTRAL_GRAY)
}

/// Ordinal formality of a style; unknown styles rank as casual
pub fn style_rank(name: &str) -> u8 {
    let key = name.to_lowercase();
    STYLE_RANKS
        .iter()
        .find(|(style, _)| *style == key)
        .map(|(_, rank)| *rank)
        .unwrap_or(0)
}

/// Euclidean distance between two color vectors
pub fn distance(a: &ColorVector, b: &ColorVector) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}
