//! Success Toast

use leptos::prelude::*;

use crate::context::use_planner;
use crate::store::PlannerStateStoreFields;

#[component]
pub fn SuccessToast() -> impl IntoView {
    let ctx = use_planner();
    let store = ctx.store;

    view! {
        <div class="toast-container position-fixed bottom-0 end-0 p-3">
            {move || store.toast().get().map(|toast| view! {
                <div class="toast show align-items-center text-bg-success border-0" role="status">
                    <div class="d-flex">
                        <div class="toast-body">{toast.message}</div>
                        <button
                            type="button"
                            class="btn-close btn-close-white me-2 m-auto"
                            aria-label="Close"
                            on:click=move |_| ctx.dismiss_toast()
                        ></button>
                    </div>
                </div>
            })}
        </div>
    }
}
