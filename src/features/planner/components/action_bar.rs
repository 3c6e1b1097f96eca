use leptos::prelude::*;

use crate::features::planner::hooks::PlannerSignals;
use crate::features::planner::services::Action;

#[component]
pub fn ActionBar(
    signals: PlannerSignals,
    #[prop(into)] on_download: Callback<()>,
    #[prop(into)] on_generate: Callback<()>,
    #[prop(into)] on_push: Callback<()>,
) -> impl IntoView {
    let generating = signals.busy(Action::GenerateCode);
    let pushing = signals.busy(Action::PushGithub);

    view! {
        <div class="output-actions">
            <button class="btn-secondary download-md" on:click=move |_| on_download.run(())>
                "Download Tasks"
            </button>
            <button
                class="btn-primary generate-code"
                disabled=move || generating.get()
                on:click=move |_| on_generate.run(())
            >
                {move || Action::GenerateCode.label(generating.get())}
            </button>
            <button
                class="btn-primary push-github"
                class:hidden=move || !signals.push_visible.get()
                disabled=move || pushing.get()
                on:click=move |_| on_push.run(())
            >
                {move || Action::PushGithub.label(pushing.get())}
            </button>
        </div>
    }
}
