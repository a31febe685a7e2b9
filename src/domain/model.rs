use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One dish extracted from the menu photograph.
///
/// `original_title` keeps the verbatim source-language text; `title`,
/// `description` and `ingredients` are the English renderings returned by the
/// vision model. `image_hints` is carried over from the extraction schema but
/// is unused downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub original_title: String,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub ingredients: Vec<String>,
    pub categories: Vec<String>,
    pub allergy_tags: Vec<String>,
    pub image_hints: Vec<String>,
}

/// The ordered collection of menu items extracted from one image.
///
/// Built once per successful extraction and never mutated afterwards; view
/// code derives filtered copies instead of touching the original.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.items.iter().map(|item| item.id)
    }

    pub fn get(&self, id: i64) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

/// Item id → representative photo URL. `None` is the "no image" sentinel,
/// covering both "search returned nothing" and "lookup failed".
pub type ItemImageMap = HashMap<i64, Option<String>>;

/// The handoff contract: a finished catalog and its image map, both read-only
/// for whoever consumes them.
#[derive(Debug, Clone, Serialize)]
pub struct MenuBundle {
    pub catalog: MenuCatalog,
    pub images: ItemImageMap,
}
