use leptos::prelude::*;

use crate::components::AboutModal;
use crate::config::AppConfig;
use crate::features::planner::components::{
    ActionBar, AnalysisView, HistorySidebar, PlannerHeader, PushSuccessModal, RequirementForm, SettingsModal,
};
use crate::features::planner::hooks::use_planner;

#[component]
pub fn Planner(config: AppConfig) -> impl IntoView {
    let planner = use_planner(&config);
    let signals = planner.signals;

    view! {
        <div class="planner-page" class:sidebar-collapsed=move || signals.sidebar_collapsed.get()>
            <HistorySidebar
                signals=signals
                on_toggle=planner.toggle_sidebar
                on_replay=planner.replay
                on_clear=planner.clear_history
            />
            <div class="main-content">
                <PlannerHeader signals=signals on_open_github=planner.open_github />
                <RequirementForm signals=signals on_submit=planner.submit />
                <section class="output-section" class:hidden=move || !signals.output_visible.get()>
                    <AnalysisView signals=signals />
                    <ActionBar
                        signals=signals
                        on_download=planner.download
                        on_generate=planner.generate
                        on_push=planner.push
                    />
                </section>
            </div>
            <SettingsModal signals=signals on_save=planner.save_settings />
            <AboutModal dialog_ref=signals.about_dialog />
            <PushSuccessModal signals=signals />
        </div>
    }
}
