//! Shopping List Preview
//!
//! Grouped ingredient list with a category edit affordance per row.

use leptos::prelude::*;

use crate::components::{Modal, ModalHeader};
use crate::context::{use_planner, PlannerContext};
use crate::shopping::{ListRow, ShoppingListView, ShoppingPreview, LOAD_ERROR};
use crate::store::PlannerStateStoreFields;

#[component]
pub fn ShoppingListModal() -> impl IntoView {
    let ctx = use_planner();
    let store = ctx.store;
    let open = Signal::derive(move || store.shopping().with(|s| s.is_open()));

    view! {
        <Modal open=open on_close=move |_| ctx.close_shopping_list()>
            <ModalHeader
                title=Signal::derive(|| "🛒 Shopping List Preview".to_string())
                on_close=move |_| ctx.close_shopping_list()
            />
            <div class="modal-body">
                {move || match store.shopping().get() {
                    ShoppingPreview::Idle => view! { <div></div> }.into_any(),
                    ShoppingPreview::Loading => view! {
                        <div id="modalLoading" class="text-center py-4">
                            <span class="spinner-border text-success" role="status"></span>
                        </div>
                    }.into_any(),
                    ShoppingPreview::Error => view! {
                        <div id="modalLoading" class="py-4">
                            <p class="text-danger">{LOAD_ERROR}</p>
                        </div>
                    }.into_any(),
                    ShoppingPreview::Rendered(list) => render_list(ctx, list),
                }}
            </div>
        </Modal>
    }
}

fn render_list(ctx: PlannerContext, list: ShoppingListView) -> AnyView {
    let ShoppingListView { rows, basics, total_recipes } = list;

    view! {
        <div id="modalContent">
            {total_recipes.map(|count| view! {
                <p class="text-muted small mb-2">{format!("Ingredients for {} recipes", count)}</p>
            })}
            <ul id="mainList" class="list-group list-group-flush">
                {rows.into_iter().map(|row| render_row(ctx, row)).collect_view()}
            </ul>
            <div class="mt-3">
                <h6 class="small fw-bold text-uppercase">"Check your cupboards"</h6>
                <p id="basicsList" class="small text-muted mb-0">{basics}</p>
            </div>
        </div>
    }
    .into_any()
}

fn render_row(ctx: PlannerContext, row: ListRow) -> AnyView {
    match row {
        ListRow::Header(category) => view! {
            <li
                class="list-group-item bg-light fw-bold text-uppercase small py-1 mt-2"
                style="color: #2e7d32;"
            >
                {category}
            </li>
        }
        .into_any(),
        ListRow::Item { name, badge } => {
            let label = name.clone();
            let target = name.clone();
            view! {
                <li class="list-group-item d-flex justify-content-between align-items-center border-0 ps-3 py-1">
                    <span class="small">
                        {label}
                        <i
                            class="bi bi-pencil-square text-primary ms-1"
                            style="cursor: pointer; opacity: 0.6;"
                            role="button"
                            title="Change category"
                            data-ingredient=name
                            on:click=move |_| ctx.open_reclassify_picker(target.clone())
                        ></i>
                    </span>
                    <span class="badge bg-white text-dark border fw-normal">{badge}</span>
                </li>
            }
            .into_any()
        }
    }
}
