use leptos::prelude::*;

use crate::features::planner::hooks::{open_dialog, PlannerSignals};

#[component]
pub fn PlannerHeader(
    signals: PlannerSignals,
    #[prop(into)] on_open_github: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="planner-header">
            <h1>"DevPlan"</h1>
            <div class="header-actions">
                <button class="action-btn github-btn" title="Your GitHub repositories" on:click=move |_| on_open_github.run(())>"GitHub"</button>
                <button class="action-btn settings-btn" title="Settings" on:click=move |_| open_dialog(signals.settings_dialog)>"⚙"</button>
                <button class="action-btn about-btn" title="About" on:click=move |_| open_dialog(signals.about_dialog)>"?"</button>
            </div>
        </header>
    }
}
