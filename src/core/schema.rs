//! The Schema Contract: the shape a valid menu-extraction response must have.
//!
//! The same contract is used twice. `response_format()` is sent to the remote
//! model as a strict structured-output constraint, and `RawMenuResponse` is
//! the local serde mirror the parser re-validates against, because the remote
//! side is untrusted even when it claims conformance.

use crate::domain::model::MenuItem;
use serde::Deserialize;
use serde_json::{json, Value};

/// The `response_format` value for an OpenAI-style chat-completions request,
/// constraining the model to the menu schema.
pub fn response_format() -> Value {
    json!({
        "type": "json_schema",
        "json_schema": {
            "name": "menu",
            "strict": true,
            "schema": {
                "type": "object",
                "properties": {
                    "items": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "id": {"type": "number"},
                                "Original Title": {"type": "string"},
                                "Title": {"type": "string"},
                                "Price": {"type": "number"},
                                "Description": {"type": "string"},
                                "Ingredients": {"type": "array", "items": {"type": "string"}},
                                "Category": {"type": "array", "items": {"type": "string"}},
                                "Allergy tags": {"type": "array", "items": {"type": "string"}},
                                "Image": {"type": "array", "items": {"type": "string"}}
                            },
                            "required": [
                                "id",
                                "Original Title",
                                "Title",
                                "Price",
                                "Description",
                                "Ingredients",
                                "Category",
                                "Allergy tags",
                                "Image"
                            ]
                        },
                        "description": "Array of menu items"
                    }
                },
                "required": ["items"],
                "additionalProperties": false
            }
        }
    })
}

/// Wire shape of an extraction response. `deny_unknown_fields` enforces the
/// contract's "no additional top-level properties" rule locally.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawMenuResponse {
    pub items: Vec<RawMenuItem>,
}

#[derive(Debug, Deserialize)]
pub struct RawMenuItem {
    pub id: i64,
    #[serde(rename = "Original Title")]
    pub original_title: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Ingredients")]
    pub ingredients: Vec<String>,
    #[serde(rename = "Category")]
    pub categories: Vec<String>,
    #[serde(rename = "Allergy tags")]
    pub allergy_tags: Vec<String>,
    #[serde(rename = "Image")]
    pub image_hints: Vec<String>,
}

impl From<RawMenuItem> for MenuItem {
    fn from(raw: RawMenuItem) -> Self {
        MenuItem {
            id: raw.id,
            original_title: raw.original_title,
            title: raw.title,
            price: raw.price,
            description: raw.description,
            ingredients: raw.ingredients,
            categories: raw.categories,
            allergy_tags: raw.allergy_tags,
            image_hints: raw.image_hints,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_format_is_strict() {
        let format = response_format();
        assert_eq!(format["type"], "json_schema");
        assert_eq!(format["json_schema"]["strict"], true);
        assert_eq!(
            format["json_schema"]["schema"]["additionalProperties"],
            false
        );
        assert_eq!(
            format["json_schema"]["schema"]["required"],
            serde_json::json!(["items"])
        );
    }

    #[test]
    fn test_raw_item_field_renames() {
        let payload = serde_json::json!({
            "items": [{
                "id": 1,
                "Original Title": "Pizza Margherita",
                "Title": "Margherita Pizza",
                "Price": 10,
                "Description": "A classic pizza.",
                "Ingredients": ["tomato sauce", "mozzarella", "basil"],
                "Category": ["Main Courses"],
                "Allergy tags": ["Gluten", "Lactose"],
                "Image": []
            }]
        });

        let response: RawMenuResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(response.items.len(), 1);
        let item = &response.items[0];
        assert_eq!(item.original_title, "Pizza Margherita");
        assert_eq!(item.title, "Margherita Pizza");
        assert_eq!(item.price, 10.0);
        assert_eq!(item.allergy_tags, vec!["Gluten", "Lactose"]);
    }

    #[test]
    fn test_unknown_top_level_property_is_rejected() {
        let payload = serde_json::json!({
            "items": [],
            "extra": true
        });
        assert!(serde_json::from_value::<RawMenuResponse>(payload).is_err());
    }
}
