//! Planner Configuration
//!
//! Endpoint paths, category lists and behaviour switches. The page may
//! override any field by defining `window.__PLANNER_CONFIG__` before the
//! WASM bundle loads; missing fields keep their defaults.

use log::LevelFilter;
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::ConfigError;

/// Name of the page global holding config overrides
const CONFIG_GLOBAL: &str = "__PLANNER_CONFIG__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub shopping_list_preview: String,
    pub search_recipes: String,
    pub update_ingredient_category: String,
    pub finalise_plan: String,
    /// Where the browser goes after a plan is finalised
    pub current_plan: String,
    /// Form action prefix, completed as `<prefix>/<slot>/<recipe id>`
    pub select_recipe: String,
    /// Form action prefix, completed as `<prefix>/<recipe id>`
    pub reclassify_recipe: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            shopping_list_preview: "/api/shopping_list_preview".to_string(),
            search_recipes: "/api/search_recipes".to_string(),
            update_ingredient_category: "/api/update_ingredient_category".to_string(),
            finalise_plan: "/api/finalise_plan".to_string(),
            current_plan: "/current-plan".to_string(),
            select_recipe: "/select_recipe".to_string(),
            reclassify_recipe: "/reclassify_recipe".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub endpoints: Endpoints,
    /// Categories offered by the ingredient picker, in display order
    pub ingredient_categories: Vec<String>,
    /// Categories offered by the recipe reclassify dialog
    pub recipe_categories: Vec<String>,
    /// Drop preview/search responses that were superseded by a newer request
    pub discard_stale_responses: bool,
    pub toast_duration_ms: u32,
    pub scroll_storage_key: String,
    pub log_level: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            ingredient_categories: to_strings(&["Meat", "Fish", "Veg", "Dairy", "Pantry", "Bread", "Other"]),
            recipe_categories: to_strings(&["Vegetarian", "Chicken", "Beef", "Pork", "Fish", "Other"]),
            discard_stale_responses: true,
            toast_duration_ms: 3000,
            scroll_storage_key: "scrollPosition".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl PlannerConfig {
    /// Load overrides from the page global, or defaults when it is absent
    pub fn from_window() -> Result<Self, ConfigError> {
        let Some(window) = web_sys::window() else {
            return Ok(Self::default());
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|e| ConfigError::Invalid(format!("{:?}", e)))?;
        if raw.is_undefined() || raw.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(raw).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Parsed log level, `info` when unrecognised
    pub fn log_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
