use serde::{Deserialize, Serialize};

use crate::core::services::console;

pub const CONFIG_STORAGE_KEY: &str = "devplan.config";
pub const FALLBACK_API_BASE: &str = "http://127.0.0.1:8000";

pub const TASKS_FILENAME: &str = "development-goals.md";
pub const TASKS_MIME: &str = "text/markdown";
pub const ARCHIVE_FILENAME: &str = "generated_project.zip";
pub const ARCHIVE_MIME: &str = "application/zip";
pub const GITHUB_REPOSITORIES_URL: &str = "https://github.com?tab=repositories";
pub const DEFAULT_LANGUAGE: &str = "generic";

/// Runtime settings for the frontend.
///
/// Defaults are overridden field by field from a JSON object stored under
/// [`CONFIG_STORAGE_KEY`] in local storage, so a deployment can point the UI at
/// a backend on another origin without rebuilding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL the `/api/*` paths are joined to. Empty means the page origin.
    pub api_base_url: String,
    pub token_storage_key: String,
    pub history_preview_chars: usize,
    pub intro_duration_ms: u32,
    pub intro_fade_ms: u32,
    pub warp_star_count: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            token_storage_key: "githubToken".to_string(),
            history_preview_chars: 50,
            intro_duration_ms: 3000,
            intro_fade_ms: 500,
            warp_star_count: 100,
        }
    }
}

impl AppConfig {
    /// Apply a JSON override on top of `self`. Unknown keys are ignored, missing
    /// keys keep their current value.
    pub fn merged_with(&self, overrides: &str) -> Result<Self, String> {
        let patch: serde_json::Value = serde_json::from_str(overrides)
            .map_err(|e| format!("Invalid config override: {}", e))?;
        let serde_json::Value::Object(patch) = patch else {
            return Err("Config override must be a JSON object".to_string());
        };

        let mut base = serde_json::to_value(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        if let Some(fields) = base.as_object_mut() {
            for (key, value) in patch {
                if fields.contains_key(&key) {
                    fields.insert(key, value);
                }
            }
        }

        serde_json::from_value(base).map_err(|e| format!("Invalid config override: {}", e))
    }

    /// Resolve the API base, falling back to the page origin and then to the
    /// local development server.
    pub fn resolved_api_base(&self, origin: Option<String>) -> String {
        let base = if !self.api_base_url.trim().is_empty() {
            self.api_base_url.trim().to_string()
        } else {
            origin
                .filter(|o| o.starts_with("http"))
                .unwrap_or_else(|| FALLBACK_API_BASE.to_string())
        };
        base.trim_end_matches('/').to_string()
    }

    /// Load the configuration for the current page.
    pub fn from_browser() -> Self {
        let defaults = Self::default();
        let overrides = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(CONFIG_STORAGE_KEY).ok().flatten());

        let mut config = match overrides {
            Some(raw) => defaults.merged_with(&raw).unwrap_or_else(|e| {
                console::error(&e);
                Self::default()
            }),
            None => defaults,
        };

        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        config.api_base_url = config.resolved_api_base(origin);
        console::log(&format!("Using backend at {}", config.api_base_url));
        config
    }
}
