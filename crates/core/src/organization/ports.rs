//! Port interface for the organizer's public presence

use async_trait::async_trait;
use eventpass_domain::{EventmakerProfile, OrganizationPage, OrganizationUpdate, Result};

#[async_trait]
pub trait OrganizationPort: Send + Sync {
    /// Organization of the signed-in organizer, with image fields already
    /// resolved to fetchable URLs
    async fn organization_page(&self) -> Result<OrganizationPage>;

    async fn update_organization(&self, user_id: &str, update: &OrganizationUpdate)
        -> Result<()>;

    /// `None` when the organizer has not created a profile yet
    async fn check_eventmaker_profile(&self) -> Result<Option<EventmakerProfile>>;

    /// Returns the profile as stored by the server
    async fn update_eventmaker_profile(
        &self,
        user_id: &str,
        profile: &EventmakerProfile,
    ) -> Result<EventmakerProfile>;
}
