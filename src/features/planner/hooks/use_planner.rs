use std::rc::Rc;

use leptos::html::Dialog;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::AppConfig;
use crate::core::models::{BackendHealth, HistoryEntry, TaskBreakdown};
use crate::core::services::{browser, console, ApiClient, LocalTokenStore};
use crate::features::planner::services::{Action, PlannerController, PlannerSurface};

#[derive(Debug, Clone, PartialEq)]
pub enum BackendStatus {
    Checking,
    Online(BackendHealth),
    Offline,
}

/// Reactive state of the planner page. Every field is a signal or node ref, so
/// the struct is `Copy` and can be moved into any view closure.
#[derive(Clone, Copy)]
pub struct PlannerSignals {
    pub requirement: RwSignal<String>,
    pub output_visible: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    pub breakdown: RwSignal<Option<TaskBreakdown>>,
    pub history: RwSignal<Vec<HistoryEntry>>,
    pub push_visible: RwSignal<bool>,
    pub push_success: RwSignal<Option<String>>,
    pub sidebar_collapsed: RwSignal<bool>,
    pub token_input: RwSignal<String>,
    pub backend_status: RwSignal<BackendStatus>,
    pub submit_busy: RwSignal<bool>,
    pub generate_busy: RwSignal<bool>,
    pub push_busy: RwSignal<bool>,
    pub save_busy: RwSignal<bool>,
    pub settings_dialog: NodeRef<Dialog>,
    pub about_dialog: NodeRef<Dialog>,
    pub success_dialog: NodeRef<Dialog>,
}

impl PlannerSignals {
    pub fn new() -> Self {
        Self {
            requirement: RwSignal::new(String::new()),
            output_visible: RwSignal::new(false),
            loading: RwSignal::new(false),
            breakdown: RwSignal::new(None),
            history: RwSignal::new(Vec::new()),
            push_visible: RwSignal::new(false),
            push_success: RwSignal::new(None),
            sidebar_collapsed: RwSignal::new(false),
            token_input: RwSignal::new(String::new()),
            backend_status: RwSignal::new(BackendStatus::Checking),
            submit_busy: RwSignal::new(false),
            generate_busy: RwSignal::new(false),
            push_busy: RwSignal::new(false),
            save_busy: RwSignal::new(false),
            settings_dialog: NodeRef::new(),
            about_dialog: NodeRef::new(),
            success_dialog: NodeRef::new(),
        }
    }

    /// In-flight flag of the control behind `action`.
    pub fn busy(&self, action: Action) -> RwSignal<bool> {
        match action {
            Action::Submit => self.submit_busy,
            Action::GenerateCode => self.generate_busy,
            Action::PushGithub => self.push_busy,
            Action::SaveSettings => self.save_busy,
        }
    }
}

impl Default for PlannerSignals {
    fn default() -> Self {
        Self::new()
    }
}

pub fn open_dialog(dialog_ref: NodeRef<Dialog>) {
    if let Some(dialog) = dialog_ref.get() {
        let _ = dialog.show_modal();
    }
}

pub fn close_dialog(dialog_ref: NodeRef<Dialog>) {
    if let Some(dialog) = dialog_ref.get() {
        dialog.close();
    }
}

impl PlannerSurface for PlannerSignals {
    fn set_busy(&self, action: Action, busy: bool) {
        self.busy(action).set(busy);
    }

    fn show_output(&self) {
        self.output_visible.set(true);
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    fn clear_breakdown(&self) {
        self.breakdown.set(None);
    }

    fn render(&self, breakdown: TaskBreakdown) {
        self.breakdown.set(Some(breakdown));
        self.output_visible.set(true);
    }

    fn set_requirement(&self, text: &str) {
        self.requirement.set(text.to_string());
    }

    fn push_history(&self, entry: HistoryEntry) {
        self.history.update(|entries| entries.insert(0, entry));
    }

    fn clear_history(&self) {
        self.history.set(Vec::new());
    }

    fn reveal_push(&self) {
        self.push_visible.set(true);
    }

    fn show_push_success(&self, repo_url: &str) {
        self.push_success.set(Some(repo_url.to_string()));
        open_dialog(self.success_dialog);
    }

    fn set_sidebar_collapsed(&self, collapsed: bool) {
        self.sidebar_collapsed.set(collapsed);
    }

    fn set_token_input(&self, token: &str) {
        self.token_input.set(token.to_string());
    }

    fn open_settings(&self) {
        open_dialog(self.settings_dialog);
    }

    fn close_settings(&self) {
        close_dialog(self.settings_dialog);
    }

    fn set_backend_health(&self, health: Option<BackendHealth>) {
        self.backend_status.set(match health {
            Some(health) => BackendStatus::Online(health),
            None => BackendStatus::Offline,
        });
    }

    fn alert(&self, message: &str) {
        browser::alert(message);
    }

    fn prompt(&self, message: &str) -> Option<String> {
        browser::prompt(message)
    }

    fn save_file(&self, filename: &str, mime: &str, bytes: &[u8]) {
        if let Err(e) = browser::download_bytes(filename, mime, bytes) {
            console::error(&format!("Failed to save {}: {}", filename, e));
        }
    }

    fn open_url(&self, url: &str) {
        if let Err(e) = browser::open_in_new_tab(url) {
            console::error(&e);
        }
    }
}

pub type BrowserController = PlannerController<PlannerSignals, LocalTokenStore>;

pub struct PlannerHook {
    pub signals: PlannerSignals,
    pub submit: Callback<()>,
    pub download: Callback<()>,
    pub generate: Callback<()>,
    pub push: Callback<()>,
    pub save_settings: Callback<()>,
    pub open_github: Callback<()>,
    pub replay: Callback<HistoryEntry>,
    pub clear_history: Callback<()>,
    pub toggle_sidebar: Callback<()>,
}

pub fn use_planner(config: &AppConfig) -> PlannerHook {
    let signals = PlannerSignals::new();
    let controller: BrowserController = PlannerController::new(
        ApiClient::new(config.api_base_url.clone()),
        LocalTokenStore::new(config.token_storage_key.clone()),
        signals,
        config.history_preview_chars,
    );
    // The controller is not Send; keep it in a local store and hand out clones
    // of the Rc inside event handlers.
    let controller = StoredValue::new_local(Rc::new(controller));

    // Probe the backend on mount
    {
        let ctrl = controller.get_value();
        spawn_local(async move {
            ctrl.refresh_backend_health().await;
        });
    }

    let submit = Callback::new(move |_: ()| {
        let ctrl = controller.get_value();
        let requirement = signals.requirement.get_untracked();
        spawn_local(async move {
            ctrl.submit_requirement(&requirement).await;
        });
    });

    let download = Callback::new(move |_: ()| {
        controller.get_value().download_tasks();
    });

    let generate = Callback::new(move |_: ()| {
        let ctrl = controller.get_value();
        spawn_local(async move {
            ctrl.generate_code().await;
        });
    });

    let push = Callback::new(move |_: ()| {
        let ctrl = controller.get_value();
        spawn_local(async move {
            ctrl.push_to_github().await;
        });
    });

    let save_settings = Callback::new(move |_: ()| {
        let ctrl = controller.get_value();
        let token = signals.token_input.get_untracked();
        spawn_local(async move {
            ctrl.save_settings(&token).await;
        });
    });

    let open_github = Callback::new(move |_: ()| {
        let ctrl = controller.get_value();
        spawn_local(async move {
            ctrl.open_github().await;
        });
    });

    let replay = Callback::new(move |entry: HistoryEntry| {
        controller.get_value().replay_history(&entry);
    });

    let clear_history = Callback::new(move |_: ()| {
        controller.get_value().clear_history();
    });

    let toggle_sidebar = Callback::new(move |_: ()| {
        controller.get_value().toggle_sidebar();
    });

    PlannerHook {
        signals,
        submit,
        download,
        generate,
        push,
        save_settings,
        open_github,
        replay,
        clear_history,
        toggle_sidebar,
    }
}
