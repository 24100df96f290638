//! Recipe Commands
//!
//! Search plus the form actions used for slot selection and reclassification.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::ApiError;
use crate::models::RecipeSummary;
use super::get_json;

/// Same unreserved set as `encodeURIComponent`
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn search_url(base: &str, query: &str, favourites_only: bool) -> String {
    format!(
        "{}?q={}&favourites={}",
        base,
        utf8_percent_encode(query, QUERY_VALUE),
        favourites_only
    )
}

pub async fn search_recipes(base: &str, query: &str, favourites_only: bool) -> Result<Vec<RecipeSummary>, ApiError> {
    get_json(&search_url(base, query, favourites_only)).await
}

/// Form action assigning `recipe_id` to meal slot `slot`
pub fn select_recipe_action(prefix: &str, slot: u32, recipe_id: u32) -> String {
    format!("{}/{}/{}", prefix.trim_end_matches('/'), slot, recipe_id)
}

/// Form action changing the category of `recipe_id`
pub fn reclassify_recipe_action(prefix: &str, recipe_id: u32) -> String {
    format!("{}/{}", prefix.trim_end_matches('/'), recipe_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_favourites_empty_query() {
        assert_eq!(
            search_url("/api/search_recipes", "", true),
            "/api/search_recipes?q=&favourites=true"
        );
    }

    #[test]
    fn test_search_url_encodes_query() {
        assert_eq!(
            search_url("/api/search_recipes", "mac & cheese", false),
            "/api/search_recipes?q=mac%20%26%20cheese&favourites=false"
        );
        assert_eq!(
            search_url("/api/search_recipes", "shepherd's pie", false),
            "/api/search_recipes?q=shepherd's%20pie&favourites=false"
        );
    }

    #[test]
    fn test_form_actions() {
        assert_eq!(select_recipe_action("/select_recipe", 2, 31), "/select_recipe/2/31");
        assert_eq!(select_recipe_action("/select_recipe/", 0, 5), "/select_recipe/0/5");
        assert_eq!(reclassify_recipe_action("/reclassify_recipe", 9), "/reclassify_recipe/9");
    }
}
