//! Shopping List View Model
//!
//! Turns a preview response into the rows the dialog renders.

use crate::models::ShoppingListResponse;

pub const NOTHING_NEEDED: &str = "Nothing extra needed.";
pub const LOAD_ERROR: &str = "⚠️ Error loading list.";

/// One row of the grouped list, in display order
#[derive(Debug, Clone, PartialEq)]
pub enum ListRow {
    Header(String),
    Item {
        /// Exact ingredient name, also the reclassify target
        name: String,
        /// `quantity unit`
        badge: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListView {
    pub rows: Vec<ListRow>,
    pub basics: String,
    pub total_recipes: Option<u32>,
}

impl ShoppingListView {
    pub fn from_response(response: &ShoppingListResponse) -> Self {
        let mut rows = Vec::new();
        for (category, items) in &response.grouped_shopping_list {
            if items.is_empty() {
                continue;
            }
            rows.push(ListRow::Header(category.clone()));
            rows.extend(items.iter().map(|item| ListRow::Item {
                name: item.name.clone(),
                badge: format!("{} {}", format_quantity(item.quantity), item.unit),
            }));
        }

        let basics = if response.basics_check_list.is_empty() {
            NOTHING_NEEDED.to_string()
        } else {
            response.basics_check_list.join(", ")
        };

        Self {
            rows,
            basics,
            total_recipes: response.total_recipes,
        }
    }
}

/// Preview dialog state: `Idle -> Loading -> {Rendered | Error}`
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ShoppingPreview {
    #[default]
    Idle,
    Loading,
    Rendered(ShoppingListView),
    Error,
}

impl ShoppingPreview {
    pub fn is_open(&self) -> bool {
        !matches!(self, ShoppingPreview::Idle)
    }
}

/// Shortest exact form, no trailing zeros. Zero of either sign prints as `0`.
pub fn format_quantity(quantity: f64) -> String {
    if quantity == 0.0 {
        return "0".to_string();
    }
    quantity.to_string()
}
