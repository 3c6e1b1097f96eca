use leptos::prelude::*;

use crate::features::planner::hooks::{close_dialog, PlannerSignals};

#[component]
pub fn PushSuccessModal(signals: PlannerSignals) -> impl IntoView {
    let dialog_ref = signals.success_dialog;
    let dismiss = move |_| {
        close_dialog(dialog_ref);
        signals.push_success.set(None);
    };

    view! {
        <dialog node_ref=dialog_ref class="modal success-modal" on:click=dismiss>
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <button class="modal-close close-modal" on:click=dismiss>"×"</button>
                <h2><span class="success-icon">"✔"</span>" Success!"</h2>
                <p>"Your code has been successfully pushed to GitHub!"</p>
                {move || signals.push_success.get().map(|url| {
                    let href = url.clone();
                    view! {
                        <p>"Repository URL: "<a href=href target="_blank" rel="noopener">{url}</a></p>
                    }
                })}
            </div>
        </dialog>
    }
}
