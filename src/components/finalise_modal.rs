//! Finalise Confirmation Dialog

use leptos::prelude::*;

use crate::components::{Modal, ModalHeader};
use crate::context::use_planner;
use crate::store::PlannerStateStoreFields;

/// Confirm step in front of the irreversible finalise request.
/// The execute button stays disabled while the request is in flight.
#[component]
pub fn FinaliseModal() -> impl IntoView {
    let ctx = use_planner();
    let store = ctx.store;
    let open = Signal::derive(move || store.finalise().get().dialog_open());
    let submitting = move || store.finalise().get().is_submitting();

    view! {
        <Modal open=open on_close=move |_| ctx.cancel_finalise()>
            <ModalHeader
                title=Signal::derive(|| "Confirm Weekly Plan?".to_string())
                on_close=move |_| ctx.cancel_finalise()
            />
            <div class="modal-body">
                <p class="mb-0">
                    "This locks in this week's meals as your current plan. It can't be undone."
                </p>
            </div>
            <div class="modal-footer">
                <button
                    type="button"
                    class="btn btn-light"
                    disabled=submitting
                    on:click=move |_| ctx.cancel_finalise()
                >
                    "Cancel"
                </button>
                <button
                    type="button"
                    id="executeFinaliseBtn"
                    class="btn btn-success"
                    disabled=submitting
                    on:click=move |_| ctx.execute_finalise()
                >
                    {move || if submitting() {
                        view! {
                            <span>
                                <span class="spinner-border spinner-border-sm me-2"></span>
                                "Finalising..."
                            </span>
                        }.into_any()
                    } else {
                        view! { <span>"Confirm Weekly Plan"</span> }.into_any()
                    }}
                </button>
            </div>
        </Modal>
    }
}
