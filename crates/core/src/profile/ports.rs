//! Port interfaces for the signed-in user's profile and language

use async_trait::async_trait;
use eventpass_domain::{CurrentLanguage, Language, Result, UserProfile};
use serde_json::Value;

#[async_trait]
pub trait ProfilePort: Send + Sync {
    async fn fetch_profile(&self) -> Result<UserProfile>;

    /// Send changed personal fields, nested by field path
    async fn update_profile(&self, changes: &Value) -> Result<()>;

    /// Send changed organization fields of an organizer account
    async fn update_organization(&self, changes: &Value) -> Result<()>;
}

#[async_trait]
pub trait LanguagePort: Send + Sync {
    async fn current_language(&self) -> Result<CurrentLanguage>;

    async fn available_languages(&self) -> Result<Vec<Language>>;

    async fn set_language(&self, language_code: &str) -> Result<()>;
}
