//! Profile service - loads the profile and saves field edits

use std::sync::Arc;

use eventpass_common::validation::ValidationError;
use eventpass_domain::{Language, Result, UserProfile};
use tracing::{debug, info};

use super::fields::{ProfileEdit, ProfileField, ProfileSection};
use super::ports::{LanguagePort, ProfilePort};
use crate::errors::FlowResult;

/// What a save actually sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SaveOutcome {
    pub personal_updated: bool,
    pub organization_updated: bool,
}

impl SaveOutcome {
    /// Nothing had changed, so no request was made.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        !self.personal_updated && !self.organization_updated
    }
}

pub struct ProfileService {
    profiles: Arc<dyn ProfilePort>,
    languages: Arc<dyn LanguagePort>,
}

impl ProfileService {
    pub fn new(profiles: Arc<dyn ProfilePort>, languages: Arc<dyn LanguagePort>) -> Self {
        Self { profiles, languages }
    }

    pub async fn profile(&self) -> Result<UserProfile> {
        self.profiles.fetch_profile().await
    }

    /// Load the profile and start an edit of `fields`.
    pub async fn begin_edit(&self, fields: &[ProfileField]) -> Result<ProfileEdit> {
        let profile = self.profiles.fetch_profile().await?;
        Ok(ProfileEdit::new(&profile, fields))
    }

    /// Send only what changed. Personal fields are sent before organization
    /// fields; an edit without changes sends nothing.
    pub async fn save(&self, edit: &ProfileEdit) -> Result<SaveOutcome> {
        let mut outcome = SaveOutcome::default();

        if let Some(changes) = edit.changes(ProfileSection::Personal) {
            self.profiles.update_profile(&changes).await?;
            outcome.personal_updated = true;
        }
        if let Some(changes) = edit.changes(ProfileSection::Organization) {
            self.profiles.update_organization(&changes).await?;
            outcome.organization_updated = true;
        }

        if outcome.is_noop() {
            debug!("profile edit has no changes, nothing sent");
        } else {
            info!(
                personal = outcome.personal_updated,
                organization = outcome.organization_updated,
                "profile updated"
            );
        }
        Ok(outcome)
    }

    pub async fn current_language(&self) -> Result<Option<String>> {
        Ok(self.languages.current_language().await?.language)
    }

    pub async fn available_languages(&self) -> Result<Vec<Language>> {
        self.languages.available_languages().await
    }

    pub async fn set_language(&self, language_code: &str) -> FlowResult<()> {
        if language_code.trim().is_empty() {
            return Err(ValidationError::field("language_code", "Language is required").into());
        }
        self.languages.set_language(language_code).await?;
        Ok(())
    }
}
