use crate::domain::model::{MenuCatalog, MenuItem};

/// Sort order for the price dimension of a catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceSort {
    /// Keep the catalog's original (extraction) order.
    #[default]
    Featured,
    LowToHigh,
    HighToLow,
}

/// A derived, filtered view over a catalog. All filters are optional and
/// combined with AND; the catalog itself is never mutated.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub exclude_allergen: Option<String>,
    pub sort: PriceSort,
}

impl CatalogQuery {
    pub fn apply(&self, catalog: &MenuCatalog) -> Vec<MenuItem> {
        let search = self.search.as_deref().map(str::to_lowercase);

        let mut items: Vec<MenuItem> = catalog
            .items()
            .iter()
            .filter(|item| self.matches(item, search.as_deref()))
            .cloned()
            .collect();

        match self.sort {
            PriceSort::Featured => {}
            PriceSort::LowToHigh => items.sort_by(|a, b| a.price.total_cmp(&b.price)),
            PriceSort::HighToLow => items.sort_by(|a, b| b.price.total_cmp(&a.price)),
        }

        items
    }

    fn matches(&self, item: &MenuItem, search: Option<&str>) -> bool {
        if let Some(needle) = search {
            if !item.title.to_lowercase().contains(needle) {
                return false;
            }
        }

        if let Some(allergen) = &self.exclude_allergen {
            if item.allergy_tags.iter().any(|tag| tag == allergen) {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if !item.categories.iter().any(|c| c == category) {
                return false;
            }
        }

        true
    }
}
