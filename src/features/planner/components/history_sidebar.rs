use leptos::prelude::*;

use crate::core::models::HistoryEntry;
use crate::features::planner::hooks::{BackendStatus, PlannerSignals};

#[component]
fn BackendStatusPills(signals: PlannerSignals) -> impl IntoView {
    view! {
        <div class="backend-status">
            {move || match signals.backend_status.get() {
                BackendStatus::Checking => view! { <span class="status-pill pending">"Checking backend..."</span> }.into_any(),
                BackendStatus::Offline => view! { <span class="status-pill down">"Backend offline"</span> }.into_any(),
                BackendStatus::Online(health) => health
                    .services()
                    .into_iter()
                    .map(|(name, up)| {
                        view! {
                            <span class="status-pill" class:up=up class:down={!up} title={if up { "available" } else { "unavailable" }}>
                                {name}
                            </span>
                        }
                    })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

#[component]
pub fn HistorySidebar(
    signals: PlannerSignals,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(into)] on_replay: Callback<HistoryEntry>,
    #[prop(into)] on_clear: Callback<()>,
) -> impl IntoView {
    let collapsed = signals.sidebar_collapsed;

    view! {
        <aside class="sidebar" class:collapsed=move || collapsed.get()>
            <button class="sidebar-toggle" on:click=move |_| on_toggle.run(())>
                {move || if collapsed.get() { "›" } else { "‹" }}
            </button>
            <div class="sidebar-header">
                <h2>"History"</h2>
                <button class="btn-secondary clear-history" on:click=move |_| on_clear.run(())>"Clear"</button>
            </div>
            <div class="history-list">
                <For
                    each=move || signals.history.get()
                    key=|entry| entry.id.clone()
                    children=move |entry: HistoryEntry| {
                        let title = entry.created_at.format("%Y-%m-%d %H:%M").to_string();
                        let preview = entry.preview.clone();
                        view! {
                            <div class="history-item" title=title on:click=move |_| on_replay.run(entry.clone())>
                                {preview}
                            </div>
                        }
                    }
                />
            </div>
            <BackendStatusPills signals=signals />
        </aside>
    }
}
