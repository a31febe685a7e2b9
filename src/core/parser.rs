use crate::core::schema::RawMenuResponse;
use crate::domain::model::{MenuCatalog, MenuItem};
use crate::utils::error::{MenuError, Result};
use serde_json::Value;
use std::collections::HashSet;

/// Turn the raw content string from the extraction client into a typed
/// catalog.
///
/// Two-phase on purpose: malformed JSON is a `ParseError`, a well-formed
/// body that does not satisfy the Schema Contract (missing `items`, missing
/// or wrongly-typed item fields, duplicate ids, negative prices) is a
/// `ValidationError`. There is no partial recovery; one bad item fails the
/// whole catalog, because menu facts are not optional the way photos are.
pub fn parse_catalog(raw: &str) -> Result<MenuCatalog> {
    let value: Value = serde_json::from_str(raw).map_err(|e| MenuError::ParseError {
        message: e.to_string(),
    })?;

    let response: RawMenuResponse =
        serde_json::from_value(value).map_err(|e| MenuError::ValidationError {
            message: e.to_string(),
        })?;

    let mut seen_ids = HashSet::new();
    for item in &response.items {
        if !seen_ids.insert(item.id) {
            return Err(MenuError::ValidationError {
                message: format!("duplicate item id {}", item.id),
            });
        }
        if !item.price.is_finite() || item.price < 0.0 {
            return Err(MenuError::ValidationError {
                message: format!("item {} has invalid price {}", item.id, item.price),
            });
        }
    }

    Ok(MenuCatalog::new(
        response.items.into_iter().map(MenuItem::from).collect(),
    ))
}
