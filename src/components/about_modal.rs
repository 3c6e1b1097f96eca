use leptos::html::Dialog;
use leptos::prelude::*;

use crate::features::planner::hooks::close_dialog;

#[component]
pub fn AboutModal(dialog_ref: NodeRef<Dialog>) -> impl IntoView {
    let close_modal = move |_| close_dialog(dialog_ref);

    view! {
        <dialog node_ref=dialog_ref class="modal about-modal" on:click=close_modal>
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>"About DevPlan"</h2>
                    <button class="modal-close close-modal" on:click=close_modal>"×"</button>
                </div>
                <p>"Describe the software you want. DevPlan breaks it into development tasks, generates a starter codebase and can push it to a new GitHub repository."</p>
                <ol>
                    <li>"Enter a requirement and generate a plan."</li>
                    <li>"Download the tasks or generate the codebase."</li>
                    <li>"Add a GitHub token in Settings to push the project."</li>
                </ol>
            </div>
        </dialog>
    }
}
