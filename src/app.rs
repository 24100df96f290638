//! Meal Planner Frontend App
//!
//! Provides the planner context, binds the page controls and renders the
//! dialogs.

use leptos::prelude::*;

use crate::components::{
    FinaliseModal, IngredientReclassifyModal, RecipeReclassifyModal, RecipeSearchModal, ShoppingListModal,
    SuccessToast,
};
use crate::config::PlannerConfig;
use crate::context::PlannerContext;
use crate::page;

#[component]
pub fn App(config: PlannerConfig) -> impl IntoView {
    let ctx = PlannerContext::new(config);
    provide_context(ctx);

    page::bind_all(ctx);

    view! {
        <div class="meal-planner-overlays">
            <ShoppingListModal />
            <IngredientReclassifyModal />
            <RecipeReclassifyModal />
            <FinaliseModal />
            <RecipeSearchModal />
            <SuccessToast />
        </div>
    }
}
