//! Reclassify Dialogs
//!
//! Ingredient picker (JSON update, stays open on failure) and the recipe
//! variant, which is a plain form POST handled by the server.

use leptos::prelude::*;

use crate::commands::reclassify_recipe_action;
use crate::components::{Modal, ModalHeader};
use crate::context::use_planner;
use crate::store::PlannerStateStoreFields;

/// Category picker for the ingredient chosen in the shopping list
#[component]
pub fn IngredientReclassifyModal() -> impl IntoView {
    let ctx = use_planner();
    let store = ctx.store;
    let categories = ctx.config().ingredient_categories;
    let open = Signal::derive(move || store.reclassify().with(|t| t.is_open()));

    view! {
        <Modal open=open on_close=move |_| ctx.close_reclassify_picker()>
            <ModalHeader
                title=Signal::derive(move || store.reclassify().with(|t| t.title()))
                on_close=move |_| ctx.close_reclassify_picker()
            />
            <div class="modal-body d-grid gap-2">
                {categories.iter().map(|category| {
                    let chosen = category.clone();
                    view! {
                        <button
                            type="button"
                            class="btn btn-outline-success btn-sm"
                            on:click=move |_| ctx.confirm_reclassify(chosen.clone())
                        >
                            {category.clone()}
                        </button>
                    }
                }).collect_view()}

                {move || store.reclassify().with(|t| t.error.clone()).map(|error| view! {
                    <p class="text-danger small mb-0">{format!("Could not update category: {}", error)}</p>
                })}
            </div>
        </Modal>
    }
}

/// Recipe category form; the server redirect refreshes the page
#[component]
pub fn RecipeReclassifyModal() -> impl IntoView {
    let ctx = use_planner();
    let store = ctx.store;
    let config = ctx.config();
    let categories = config.recipe_categories;
    let prefix = config.endpoints.reclassify_recipe;
    let open = Signal::derive(move || store.recipe_reclassify().with(|t| t.is_some()));

    let action = move || {
        store
            .recipe_reclassify()
            .with(|t| t.as_ref().map(|t| reclassify_recipe_action(&prefix, t.recipe_id)))
            .unwrap_or_default()
    };

    view! {
        <Modal open=open on_close=move |_| ctx.close_recipe_reclassify()>
            <ModalHeader
                title=Signal::derive(move || {
                    store.recipe_reclassify().with(|t| t.as_ref().map(|t| t.title()).unwrap_or_default())
                })
                on_close=move |_| ctx.close_recipe_reclassify()
            />
            <form class="modal-body d-grid gap-2" method="POST" action=action.clone()>
                {categories.iter().map(|category| view! {
                    <button
                        type="submit"
                        name="category"
                        value=category.clone()
                        class="btn btn-outline-secondary btn-sm"
                    >
                        {category.clone()}
                    </button>
                }).collect_view()}
            </form>
        </Modal>
    }
}
