use leptos::prelude::*;

use crate::core::models::{reveal_delay, RequirementAnalysis, TaskBreakdown};
use crate::features::planner::hooks::PlannerSignals;

fn task_rows(tasks: Vec<String>, numbered: bool) -> impl IntoView {
    tasks
        .into_iter()
        .enumerate()
        .map(|(index, task)| {
            let text = if numbered { format!("{}. {}", index + 1, task) } else { task };
            view! {
                <div class="task" style=format!("animation-delay: {}", reveal_delay(index))>
                    {text}
                </div>
            }
        })
        .collect_view()
}

fn analysis_sections(analysis: RequirementAnalysis) -> impl IntoView {
    let tech_stack = analysis.tech_stack.map(|stack| {
        let language = stack.language.clone().unwrap_or_default();
        let frameworks = stack.frameworks_label();
        view! {
            <div class="analysis-section">
                <h3>"Tech Stack"</h3>
                <div class="tech-info">
                    <p><strong>"Language: "</strong>{language}</p>
                    <p><strong>"Frameworks: "</strong>{frameworks}</p>
                </div>
            </div>
        }
    });

    let structure = analysis.project_structure.map(|tree| {
        view! {
            <div class="analysis-section">
                <h3>"Project Structure"</h3>
                <pre class="project-tree">{tree}</pre>
            </div>
        }
    });

    view! {
        {tech_stack}
        {structure}
        <div class="analysis-section">
            <h3>"Development Tasks"</h3>
            {task_rows(analysis.tasks, false)}
        </div>
    }
}

#[component]
pub fn AnalysisView(signals: PlannerSignals) -> impl IntoView {
    view! {
        <div class="loading-indicator" class:hidden=move || !signals.loading.get()>
            <div class="spinner"></div>
            <span>"Analyzing requirement..."</span>
        </div>
        <div class="development-goals">
            {move || match signals.breakdown.get() {
                Some(TaskBreakdown::Analysis(analysis)) => analysis_sections(analysis).into_any(),
                Some(TaskBreakdown::Numbered(tasks)) => task_rows(tasks, true).into_any(),
                None => view! {}.into_any(),
            }}
        </div>
    }
}
