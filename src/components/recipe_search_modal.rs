//! Recipe Search Modal
//!
//! Full search or favourites-only. Each result is its own POST form that
//! assigns the recipe to the session's meal slot.

use leptos::prelude::*;

use crate::components::{Modal, ModalHeader};
use crate::context::use_planner;
use crate::search::{SearchView, CONNECTION_ERROR, NO_RESULTS, PROMPT};
use crate::store::PlannerStateStoreFields;

#[component]
pub fn RecipeSearchModal() -> impl IntoView {
    let ctx = use_planner();
    let store = ctx.store;
    let session = move || store.search_session().get();
    let open = Signal::derive(move || store.search_open().get());

    view! {
        <Modal open=open on_close=move |_| ctx.close_search()>
            <ModalHeader
                title=Signal::derive(move || session().title().to_string())
                on_close=move |_| ctx.close_search()
            />
            <div class="modal-body">
                <input
                    type="text"
                    id="recipeQuery"
                    class="form-control mb-3"
                    autocomplete="off"
                    placeholder=move || session().placeholder()
                    prop:value=move || store.search_query().get()
                    on:input=move |ev| {
                        let query = event_target_value(&ev);
                        store.search_query().set(query.clone());
                        ctx.perform_search(query);
                    }
                />
                <div id="searchResults" class="list-group">
                    {move || render_results(store.search().get())}
                </div>
            </div>
        </Modal>
    }
}

fn render_results(results: SearchView) -> AnyView {
    match results {
        SearchView::Prompt => view! {
            <p class="text-center text-muted py-4 small">{PROMPT}</p>
        }
        .into_any(),
        SearchView::NoResults => view! {
            <p class="text-center text-muted py-4 small">{NO_RESULTS}</p>
        }
        .into_any(),
        SearchView::Error => view! {
            <p class="text-danger text-center py-4 small">{CONNECTION_ERROR}</p>
        }
        .into_any(),
        SearchView::Results(rows) => rows
            .into_iter()
            .map(|row| view! {
                <form action=row.action method="POST" data-recipe-id=row.recipe_id.to_string()>
                    <button
                        type="submit"
                        class="list-group-item list-group-item-action d-flex justify-content-between align-items-center py-3"
                    >
                        <div>
                            <div class="fw-bold text-dark">{row.name}</div>
                            <small class="text-muted text-uppercase" style="font-size: 0.7rem;">
                                {row.caption}
                            </small>
                        </div>
                        <i class="bi bi-plus-circle text-success fs-5"></i>
                    </button>
                </form>
            })
            .collect_view()
            .into_any(),
    }
}
