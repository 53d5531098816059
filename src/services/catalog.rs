use std::sync::OnceLock;

use crate::models::{Category, Item, Occasion};

/// Fixed, read-only set of sample items used to fill gaps in a wardrobe
#[derive(Debug)]
pub struct VirtualCatalog {
    tops: Vec<Item>,
    bottoms: Vec<Item>,
    shoes: Vec<Item>,
}

static CATALOG: OnceLock<VirtualCatalog> = OnceLock::new();

/// Returns the shared catalog, building it on first use
pub fn virtual_catalog() -> &'static VirtualCatalog {
    CATALOG.get_or_init(VirtualCatalog::build)
}

fn entry(id: &str, name: &str, category: Category, color: &str, style: &str, image: &str) -> Item {
    Item {
        id: id.to_string(),
        category: Some(category),
        color: color.to_string(),
        style: style.to_string(),
        name: name.to_string(),
        image_url: Some(format!("https://placehold.co/400x400/{}", image)),
    }
}

impl VirtualCatalog {
    fn build() -> Self {
        use Category::*;

        Self {
            tops: vec![
                entry(
                    "vc_top_casual_1",
                    "White Cotton T-Shirt",
                    Top,
                    "White",
                    "Casual",
                    "ffffff/000000?text=White+T-Shirt",
                ),
                entry(
                    "vc_top_work_1",
                    "Blue Button-Down Shirt",
                    Top,
                    "Blue",
                    "Work",
                    "0000ff/ffffff?text=Button-Down",
                ),
                entry(
                    "vc_top_party_1",
                    "Sequined Blouse",
                    Top,
                    "Silver",
                    "Party",
                    "c0c0c0/000000?text=Sequined+Blouse",
                ),
                entry(
                    "vc_top_formal_1",
                    "Black Blazer",
                    Top,
                    "Black",
                    "Formal",
                    "000000/ffffff?text=Black+Blazer",
                ),
            ],
            bottoms: vec![
                entry(
                    "vc_bottom_casual_1",
                    "Blue Jeans",
                    Bottom,
                    "Blue",
                    "Casual",
                    "0000ff/ffffff?text=Blue+Jeans",
                ),
                entry(
                    "vc_bottom_work_1",
                    "Gray Slacks",
                    Bottom,
                    "Gray",
                    "Work",
                    "808080/ffffff?text=Gray+Slacks",
                ),
                entry(
                    "vc_bottom_party_1",
                    "Red Mini Skirt",
                    Bottom,
                    "Red",
                    "Party",
                    "ff0000/ffffff?text=Red+Skirt",
                ),
                entry(
                    "vc_bottom_formal_1",
                    "Black Tailored Pants",
                    Bottom,
                    "Black",
                    "Formal",
                    "000000/ffffff?text=Tailored+Pants",
                ),
            ],
            shoes: vec![
                entry(
                    "vc_shoes_casual_1",
                    "White Sneakers",
                    Shoes,
                    "White",
                    "Casual",
                    "ffffff/000000?text=White+Sneakers",
                ),
                entry(
                    "vc_shoes_work_1",
                    "Brown Loafers",
                    Shoes,
                    "Brown",
                    "Work",
                    "8b4513/ffffff?text=Loafers",
                ),
                entry(
                    "vc_shoes_party_1",
                    "Gold Heels",
                    Shoes,
                    "Gold",
                    "Party",
                    "ffd700/000000?text=Gold+Heels",
                ),
                entry(
                    "vc_shoes_formal_1",
                    "Black Oxfords",
                    Shoes,
                    "Black",
                    "Formal",
                    "000000/ffffff?text=Oxfords",
                ),
            ],
        }
    }

    /// All catalog entries for a slot; categories the catalog does not stock are empty
    pub fn slot(&self, category: Category) -> &[Item] {
        match category {
            Category::Top => &self.tops,
            Category::Bottom => &self.bottoms,
            Category::Shoes => &self.shoes,
            _ => &[],
        }
    }

    /// Entries for a slot whose style is exactly the requested occasion
    pub fn for_occasion(&self, category: Category, occasion: &Occasion) -> Vec<&Item> {
        self.slot(category)
            .iter()
            .filter(|item| item.style_key() == occasion.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entry_is_catalog_origin() {
        let catalog = virtual_catalog();
        for category in [Category::Top, Category::Bottom, Category::Shoes] {
            let entries = catalog.slot(category);
            assert_eq!(entries.len(), 4);
            assert!(entries.iter().all(|item| item.is_catalog()));
            assert!(entries.iter().all(|item| item.category == Some(category)));
        }
    }

    #[test]
    fn test_one_entry_per_style_and_slot() {
        let catalog = virtual_catalog();
        for occasion in [Occasion::Casual, Occasion::Work, Occasion::Party, Occasion::Formal] {
            for category in [Category::Top, Category::Bottom, Category::Shoes] {
                assert_eq!(catalog.for_occasion(category, &occasion).len(), 1);
            }
        }
    }

    #[test]
    fn test_unknown_occasion_has_no_entries() {
        let catalog = virtual_catalog();
        assert!(catalog
            .for_occasion(Category::Top, &Occasion::from("brunch"))
            .is_empty());
        assert!(catalog.slot(Category::Dress).is_empty());
    }
}
