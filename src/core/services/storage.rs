use web_sys::Storage;

use super::console;

/// Durable home of the GitHub token.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), String>;
}

// Browser local storage, so the token survives reloads.
#[derive(Debug, Clone)]
pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<Storage, String> {
        web_sys::window()
            .ok_or_else(|| "No window available".to_string())?
            .local_storage()
            .map_err(|e| format!("Local storage unavailable: {:?}", e))?
            .ok_or_else(|| "Local storage unavailable".to_string())
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        match Self::storage() {
            Ok(storage) => storage
                .get_item(&self.key)
                .ok()
                .flatten()
                .filter(|t| !t.is_empty()),
            Err(e) => {
                console::error(&format!("Failed to read {}: {}", self.key, e));
                None
            }
        }
    }

    fn save(&self, token: &str) -> Result<(), String> {
        Self::storage()?
            .set_item(&self.key, token)
            .map_err(|e| format!("Failed to write {}: {:?}", self.key, e))?;
        console::log(&format!("Saved {} to local storage", self.key));
        Ok(())
    }
}
