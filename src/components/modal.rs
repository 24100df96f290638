//! Modal Component
//!
//! Dialog shell shared by every planner dialog. Visibility is driven by
//! state; clicking the backdrop asks the owner to close.

use leptos::prelude::*;

/// Modal dialog
///
/// # Arguments
/// * `open` - Whether the dialog is shown
/// * `on_close` - Called when the backdrop is clicked
#[component]
pub fn Modal(
    open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="planner-modal-backdrop" on:click=move |_| on_close.run(())></div>
            <div class="planner-modal" role="dialog" aria-modal="true">
                <div class="modal-content">
                    {children()}
                </div>
            </div>
        </Show>
    }
}

/// Standard dialog header with a close button
#[component]
pub fn ModalHeader(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-header">
            <h5 class="modal-title">{move || title.get()}</h5>
            <button
                type="button"
                class="btn-close"
                aria-label="Close"
                on:click=move |_| on_close.run(())
            ></button>
        </div>
    }
}
