use std::cell::RefCell;

use super::surface::{Action, PlannerSurface};
use crate::config::{
    ARCHIVE_FILENAME, ARCHIVE_MIME, DEFAULT_LANGUAGE, GITHUB_REPOSITORIES_URL, TASKS_FILENAME, TASKS_MIME,
};
use crate::core::models::{tasks_markdown, HistoryEntry, SessionState, TaskBreakdown};
use crate::core::services::{console, ApiClient, TokenStore};

// Clears the in-flight state of an action when dropped, whether the handler
// finished, failed or was abandoned mid-request.
struct BusyGuard<'a, S: PlannerSurface> {
    surface: &'a S,
    action: Action,
}

impl<S: PlannerSurface> Drop for BusyGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.set_busy(self.action, false);
    }
}

/// Session state plus the handlers behind every planner control.
///
/// Handlers take `&self` and never hold the session borrow across an await,
/// so one controller can be shared by all event callbacks of a page.
pub struct PlannerController<S: PlannerSurface, T: TokenStore> {
    api: ApiClient,
    store: T,
    surface: S,
    session: RefCell<SessionState>,
    preview_chars: usize,
}

impl<S: PlannerSurface, T: TokenStore> PlannerController<S, T> {
    pub fn new(api: ApiClient, store: T, surface: S, preview_chars: usize) -> Self {
        let github_token = store.load().unwrap_or_default();
        if !github_token.is_empty() {
            surface.set_token_input(&github_token);
        }

        Self {
            api,
            store,
            surface,
            session: RefCell::new(SessionState { github_token, ..SessionState::default() }),
            preview_chars,
        }
    }

    pub fn session(&self) -> SessionState {
        self.session.borrow().clone()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn busy(&self, action: Action) -> BusyGuard<'_, S> {
        self.surface.set_busy(action, true);
        BusyGuard { surface: &self.surface, action }
    }

    pub async fn submit_requirement(&self, requirement: &str) {
        let requirement = requirement.trim();
        if requirement.is_empty() {
            return;
        }

        let _busy = self.busy(Action::Submit);
        self.surface.show_output();
        self.surface.set_loading(true);
        self.surface.clear_breakdown();

        match self.api.process_requirement(requirement).await {
            Ok(analysis) => {
                {
                    let mut session = self.session.borrow_mut();
                    session.tasks = analysis.tasks.clone();
                    session.language = analysis.language().unwrap_or(DEFAULT_LANGUAGE).to_string();
                }
                console::log(&format!("Received {} tasks", analysis.tasks.len()));

                let entry = HistoryEntry::new(requirement, analysis.tasks.clone(), self.preview_chars);
                self.surface.set_loading(false);
                self.surface.render(TaskBreakdown::Analysis(analysis));
                self.surface.push_history(entry);
            }
            Err(e) => {
                console::error(&format!("Error processing requirement: {:?}", e));
                self.surface.alert(&format!("Error processing requirement: {}", e));
                self.surface.set_loading(false);
            }
        }
    }

    pub fn download_tasks(&self) {
        let content = {
            let session = self.session.borrow();
            if session.tasks.is_empty() {
                return;
            }
            tasks_markdown(&session.tasks)
        };
        self.surface.save_file(TASKS_FILENAME, TASKS_MIME, content.as_bytes());
    }

    pub async fn generate_code(&self) {
        let (tasks, language) = {
            let session = self.session.borrow();
            (session.tasks.clone(), session.language.clone())
        };
        if tasks.is_empty() {
            return;
        }

        let _busy = self.busy(Action::GenerateCode);
        match self.api.generate_code(&tasks, &language).await {
            Ok(archive) => {
                self.surface.save_file(ARCHIVE_FILENAME, ARCHIVE_MIME, &archive);
                self.surface.reveal_push();
            }
            Err(e) => {
                self.surface.alert(&format!("Error generating code: {}", e));
                console::error(&format!("Error generating code: {:?}", e));
            }
        }
    }

    pub async fn push_to_github(&self) {
        let repo_name = match self.surface.prompt("Enter repository name:") {
            Some(name) if !name.is_empty() => name,
            _ => return,
        };
        let tasks = self.session.borrow().tasks.clone();

        let _busy = self.busy(Action::PushGithub);
        match self.api.push_to_github(&repo_name, &tasks).await {
            Ok(repo_url) => {
                console::log(&format!("Pushed to {}", repo_url));
                self.surface.show_push_success(&repo_url);
            }
            Err(e) => {
                console::error(&format!("Error pushing to GitHub: {:?}", e));
                self.surface.alert(&format!("Error pushing to GitHub: {}", e));
            }
        }
    }

    pub async fn save_settings(&self, token: &str) {
        let token = token.trim().to_string();

        let _busy = self.busy(Action::SaveSettings);
        let result = match self.api.update_github_token(&token).await {
            Ok(()) => self.store.save(&token),
            Err(e) => Err(e.to_string()),
        };

        match result {
            Ok(()) => {
                self.session.borrow_mut().github_token = token;
                self.surface.alert("Settings saved successfully!");
                self.surface.close_settings();
            }
            Err(e) => {
                console::error(&format!("Error saving settings: {}", e));
                self.surface.alert(&format!("Error saving settings: {}", e));
            }
        }
    }

    /// Re-validate the stored token, then send the user to their repositories.
    pub async fn open_github(&self) {
        let Some(token) = self.store.load() else {
            self.surface.alert("Please set your GitHub Access Token in Settings first");
            self.surface.open_settings();
            return;
        };

        match self.api.update_github_token(&token).await {
            Ok(()) => self.surface.open_url(GITHUB_REPOSITORIES_URL),
            Err(e) if e.is_rejection() => {
                self.surface
                    .alert("Your GitHub token appears to be invalid. Please update it in Settings.");
                self.surface.open_settings();
            }
            Err(e) => {
                console::error(&format!("Error verifying GitHub token: {:?}", e));
                self.surface
                    .alert("Error connecting to GitHub. Please check your token in Settings.");
                self.surface.open_settings();
            }
        }
    }

    pub fn replay_history(&self, entry: &HistoryEntry) {
        self.surface.set_requirement(&entry.requirement);
        self.session.borrow_mut().tasks = entry.tasks.clone();
        self.surface.render(TaskBreakdown::Numbered(entry.tasks.clone()));
        self.surface.show_output();
    }

    pub fn clear_history(&self) {
        self.surface.clear_history();
    }

    pub fn toggle_sidebar(&self) -> bool {
        let collapsed = {
            let mut session = self.session.borrow_mut();
            session.sidebar_collapsed = !session.sidebar_collapsed;
            session.sidebar_collapsed
        };
        self.surface.set_sidebar_collapsed(collapsed);
        collapsed
    }

    pub async fn refresh_backend_health(&self) {
        match self.api.health().await {
            Ok(health) => self.surface.set_backend_health(Some(health)),
            Err(e) => {
                console::error(&format!("Backend health check failed: {}", e));
                self.surface.set_backend_health(None);
            }
        }
    }
}
