//! Frontend Models
//!
//! Data structures matching the planner's JSON endpoints.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One aggregated ingredient line
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShoppingItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

/// Shopping list preview (matches `/api/shopping_list_preview`)
///
/// Categories keep the order the server sent them in.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ShoppingListResponse {
    pub grouped_shopping_list: IndexMap<String, Vec<ShoppingItem>>,
    #[serde(default)]
    pub basics_check_list: Vec<String>,
    #[serde(default)]
    pub total_recipes: Option<u32>,
}

/// Recipe summary returned by the search endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecipeSummary {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub time: Option<u32>,
}

/// Generic `{status, message}` reply from write endpoints
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl StatusResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Body of the ingredient category update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateCategoryArgs {
    pub name: String,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped_list_keeps_server_order() {
        let json = r#"{
            "grouped_shopping_list": {
                "Veg": [{"name": "Kale", "quantity": 2, "unit": "bunch"}],
                "Meat": [],
                "Dairy": [{"name": "Milk", "quantity": 0.5, "unit": "l"}]
            },
            "basics_check_list": ["Salt"],
            "total_recipes": 5
        }"#;

        let list: ShoppingListResponse = serde_json::from_str(json).unwrap();
        let categories: Vec<&str> = list.grouped_shopping_list.keys().map(String::as_str).collect();
        assert_eq!(categories, vec!["Veg", "Meat", "Dairy"]);
        assert_eq!(list.total_recipes, Some(5));
        assert_eq!(list.grouped_shopping_list["Veg"][0].quantity, 2.0);
    }

    #[test]
    fn test_status_response() {
        let ok: StatusResponse = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert!(ok.is_success());

        let failed: StatusResponse =
            serde_json::from_str(r#"{"status":"error","message":"No plan in session"}"#).unwrap();
        assert!(!failed.is_success());
        assert_eq!(failed.message.as_deref(), Some("No plan in session"));
    }

    #[test]
    fn test_recipe_without_time() {
        let recipe: RecipeSummary =
            serde_json::from_str(r#"{"id": 7, "name": "Dal", "category": "Vegetarian", "time": null}"#).unwrap();
        assert_eq!(recipe.time, None);
    }
}
