use leptos::prelude::*;

use crate::features::planner::hooks::PlannerSignals;
use crate::features::planner::services::Action;

#[component]
pub fn RequirementForm(
    signals: PlannerSignals,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let busy = signals.busy(Action::Submit);

    view! {
        <section class="input-section">
            <textarea
                class="requirement-input"
                rows="6"
                placeholder="Describe the software you want to build..."
                prop:value=move || signals.requirement.get()
                on:input=move |ev| signals.requirement.set(event_target_value(&ev))
            ></textarea>
            <button
                class="btn-primary submit-btn"
                disabled=move || busy.get()
                on:click=move |_| on_submit.run(())
            >
                {move || Action::Submit.label(busy.get())}
            </button>
        </section>
    }
}
