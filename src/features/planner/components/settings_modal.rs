use leptos::prelude::*;

use crate::features::planner::hooks::{close_dialog, PlannerSignals};
use crate::features::planner::services::Action;

#[component]
pub fn SettingsModal(
    signals: PlannerSignals,
    #[prop(into)] on_save: Callback<()>,
) -> impl IntoView {
    let dialog_ref = signals.settings_dialog;
    let saving = signals.busy(Action::SaveSettings);
    let close_modal = move |_| close_dialog(dialog_ref);

    view! {
        <dialog node_ref=dialog_ref class="modal settings-modal" on:click=close_modal>
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>"Settings"</h2>
                    <button class="modal-close close-modal" on:click=close_modal>"×"</button>
                </div>
                <div class="modal-section">
                    <h3>"GitHub"</h3>
                    <div class="form-group">
                        <label>"Personal Access Token"</label>
                        <input
                            type="password"
                            placeholder="ghp_..."
                            prop:value=move || signals.token_input.get()
                            on:input=move |ev| signals.token_input.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="modal-actions">
                    <button class="btn-secondary" on:click=close_modal>"Cancel"</button>
                    <button
                        class="btn-primary"
                        disabled=move || saving.get()
                        on:click=move |_| on_save.run(())
                    >
                        {move || Action::SaveSettings.label(saving.get())}
                    </button>
                </div>
            </div>
        </dialog>
    }
}
