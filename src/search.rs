//! Recipe Search View Model

use crate::commands::select_recipe_action;
use crate::models::RecipeSummary;
use crate::session::SearchSession;

pub const PROMPT: &str = "Start typing to find a meal...";
pub const NO_RESULTS: &str = "No matching recipes found.";
pub const CONNECTION_ERROR: &str = "Error connecting to server.";

/// A selectable result, rendered as its own POST form
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub recipe_id: u32,
    /// Form action assigning this recipe to the session's slot
    pub action: String,
    pub name: String,
    /// `CATEGORY • N MINS`
    pub caption: String,
}

/// What the results area shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchView {
    #[default]
    Prompt,
    Results(Vec<ResultRow>),
    NoResults,
    Error,
}

impl SearchView {
    /// Replace the previous render with rows for `results`
    pub fn from_results(session: SearchSession, select_prefix: &str, results: &[RecipeSummary]) -> Self {
        if results.is_empty() {
            return SearchView::NoResults;
        }
        SearchView::Results(
            results
                .iter()
                .map(|recipe| ResultRow {
                    recipe_id: recipe.id,
                    action: select_recipe_action(select_prefix, session.target_slot, recipe.id),
                    name: recipe.name.clone(),
                    caption: caption(recipe),
                })
                .collect(),
        )
    }
}

fn caption(recipe: &RecipeSummary) -> String {
    let category = recipe.category.to_uppercase();
    match recipe.time {
        Some(minutes) => format!("{} • {} MINS", category, minutes),
        None => category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: u32, name: &str, category: &str, time: Option<u32>) -> RecipeSummary {
        RecipeSummary {
            id,
            name: name.to_string(),
            category: category.to_string(),
            time,
        }
    }

    #[test]
    fn test_empty_response_shows_no_results() {
        let view = SearchView::from_results(SearchSession::new(0, false), "/select_recipe", &[]);
        assert_eq!(view, SearchView::NoResults);
    }

    #[test]
    fn test_rows_target_session_slot() {
        let session = SearchSession::new(4, true);
        let results = vec![
            recipe(12, "Chicken Katsu", "Chicken", Some(35)),
            recipe(40, "Dal", "Vegetarian", None),
        ];

        let SearchView::Results(rows) = SearchView::from_results(session, "/select_recipe", &results) else {
            panic!("expected results");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].action, "/select_recipe/4/12");
        assert_eq!(rows[0].caption, "CHICKEN • 35 MINS");
        assert_eq!(rows[1].action, "/select_recipe/4/40");
        assert_eq!(rows[1].caption, "VEGETARIAN");
    }
}
