//! Planner State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each dialog
//! renders from its own fields only.

use reactive_stores::Store;

use crate::search::SearchView;
use crate::session::{FinaliseState, ReclassifyTarget, RecipeReclassifyTarget, SearchSession, Toast};
use crate::shopping::ShoppingPreview;

/// Page session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PlannerState {
    /// Shopping list preview dialog
    pub shopping: ShoppingPreview,
    /// Ingredient picker (open while a target is stored)
    pub reclassify: ReclassifyTarget,
    /// Recipe reclassify dialog (open while set)
    pub recipe_reclassify: Option<RecipeReclassifyTarget>,
    pub finalise: FinaliseState,
    pub search_open: bool,
    pub search_session: SearchSession,
    pub search_query: String,
    pub search: SearchView,
    pub toast: Option<Toast>,
}

/// Type alias for the store
pub type PlannerStore = Store<PlannerState>;
