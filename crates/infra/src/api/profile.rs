//! Profile and language endpoints

use std::sync::Arc;

use async_trait::async_trait;
use eventpass_core::profile::{LanguagePort, ProfilePort};
use eventpass_domain::constants::{
    LANGUAGES_PATH, LANGUAGE_PATH, PROFILE_PATH, UPDATE_EVENTMAKER_PROFILE_PATH,
    UPDATE_PROFILE_PATH,
};
use eventpass_domain::{CurrentLanguage, Language, LanguageSelection, Result, UserProfile};
use serde_json::Value;
use tracing::instrument;

use super::client::{ApiClient, ApiRequest};

pub struct ProfileApi {
    client: Arc<ApiClient>,
}

impl ProfileApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// PUT whose response body is ignored.
    async fn put(&self, path: &str, body: &Value) -> Result<()> {
        self.client.send(&ApiRequest::put(path).json(body)?).await?.error_for_status()?;
        Ok(())
    }
}

#[async_trait]
impl ProfilePort for ProfileApi {
    #[instrument(skip(self))]
    async fn fetch_profile(&self) -> Result<UserProfile> {
        self.client.get_json(PROFILE_PATH).await
    }

    #[instrument(skip_all)]
    async fn update_profile(&self, changes: &Value) -> Result<()> {
        self.put(UPDATE_PROFILE_PATH, changes).await
    }

    #[instrument(skip_all)]
    async fn update_organization(&self, changes: &Value) -> Result<()> {
        self.put(UPDATE_EVENTMAKER_PROFILE_PATH, changes).await
    }
}

#[async_trait]
impl LanguagePort for ProfileApi {
    async fn current_language(&self) -> Result<CurrentLanguage> {
        self.client.get_json(LANGUAGE_PATH).await
    }

    async fn available_languages(&self) -> Result<Vec<Language>> {
        self.client.get_json(LANGUAGES_PATH).await
    }

    async fn set_language(&self, language_code: &str) -> Result<()> {
        let body = LanguageSelection { language_code: language_code.to_string() };
        self.client.send(&ApiRequest::put(LANGUAGE_PATH).json(&body)?).await?.error_for_status()?;
        Ok(())
    }
}
