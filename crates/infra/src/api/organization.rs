//! Organization page and eventmaker profile endpoints
//!
//! The organization page answers with stored image paths; they are resolved
//! through [`MediaUrls::image_url`] before the page leaves this module.
//! Eventmaker profiles keep their paths as stored because the same value is
//! sent back on update.

use std::sync::Arc;

use async_trait::async_trait;
use eventpass_core::organization::OrganizationPort;
use eventpass_domain::constants::{
    EVENTMAKER_PROFILE_CHECK_PATH, EVENTMAKER_PROFILE_PATH, ORGANIZATION_PATH,
    ORGANIZATION_USER_PATH,
};
use eventpass_domain::{EventmakerProfile, OrganizationPage, OrganizationUpdate, Result};
use tracing::{debug, instrument};

use super::client::{ApiClient, ApiRequest};
use super::media::MediaUrls;

pub struct OrganizationApi {
    client: Arc<ApiClient>,
    media: MediaUrls,
}

impl OrganizationApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        let media = MediaUrls::new(client.base_url());
        Self { client, media }
    }

    fn resolve_images(&self, mut page: OrganizationPage) -> OrganizationPage {
        page.avatar = page.avatar.filter(|p| !p.is_empty()).map(|p| self.media.image_url(&p));
        page.background_image =
            page.background_image.filter(|p| !p.is_empty()).map(|p| self.media.image_url(&p));
        for event in &mut page.upcoming_events {
            event.image_url =
                event.image_url.take().filter(|p| !p.is_empty()).map(|p| self.media.image_url(&p));
        }
        page
    }
}

#[async_trait]
impl OrganizationPort for OrganizationApi {
    #[instrument(skip(self))]
    async fn organization_page(&self) -> Result<OrganizationPage> {
        let page: OrganizationPage = self.client.get_json(ORGANIZATION_USER_PATH).await?;
        debug!(events = page.upcoming_events.len(), "organization page loaded");
        Ok(self.resolve_images(page))
    }

    #[instrument(skip(self, update))]
    async fn update_organization(&self, user_id: &str, update: &OrganizationUpdate) -> Result<()> {
        let path = format!("{ORGANIZATION_PATH}/{}", urlencoding::encode(user_id));
        self.client.send(&ApiRequest::put(path).json(update)?).await?.error_for_status()?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn check_eventmaker_profile(&self) -> Result<Option<EventmakerProfile>> {
        self.client.get_json(EVENTMAKER_PROFILE_CHECK_PATH).await
    }

    #[instrument(skip(self, profile))]
    async fn update_eventmaker_profile(
        &self,
        user_id: &str,
        profile: &EventmakerProfile,
    ) -> Result<EventmakerProfile> {
        let path = format!("{EVENTMAKER_PROFILE_PATH}/{}", urlencoding::encode(user_id));
        self.client.put_json(&path, profile).await
    }
}
