pub mod api;
pub mod browser;
pub mod console;
pub mod storage;

pub use api::{ApiClient, ApiError};
pub use storage::{LocalTokenStore, TokenStore};
