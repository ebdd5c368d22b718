//! Organization service - page loading, link checks and profile ownership

use std::sync::Arc;

use eventpass_common::validation::Validator;
use eventpass_domain::{
    EventmakerProfile, Organization, OrganizationPage, OrganizationUpdate, Result, SocialLinks,
};
use tracing::{debug, info};

use super::ports::OrganizationPort;
use crate::errors::FlowResult;

const LINK_INVALID: &str = "Link must start with http:// or https://";
const USER_ID_REQUIRED: &str = "Organizer id is required";

/// Eventmaker profile plus whether the viewer may edit it
#[derive(Debug, Clone, PartialEq)]
pub struct EventmakerProfileView {
    pub profile: EventmakerProfile,
    pub is_owner: bool,
}

pub struct OrganizationService {
    port: Arc<dyn OrganizationPort>,
}

impl OrganizationService {
    pub fn new(port: Arc<dyn OrganizationPort>) -> Self {
        Self { port }
    }

    pub async fn page(&self) -> Result<OrganizationPage> {
        self.port.organization_page().await
    }

    /// Send the edited description and links, then merge them into
    /// `organization` the way the page shows them.
    pub async fn update(
        &self,
        organization: &mut Organization,
        update: OrganizationUpdate,
    ) -> FlowResult<()> {
        let mut v = Validator::new();
        v.require("userId", &organization.user_id, USER_ID_REQUIRED);
        check_links(&mut v, &update.social_links);
        v.finish()?;

        self.port.update_organization(&organization.user_id, &update).await?;
        apply_update(organization, update);
        info!(user_id = %organization.user_id, "organization updated");
        Ok(())
    }

    /// Load the eventmaker profile of `eventmaker_id` as seen by `viewer_id`.
    ///
    /// An organizer without a stored profile gets an empty one carrying the
    /// viewer's id.
    pub async fn eventmaker_profile(
        &self,
        viewer_id: &str,
        eventmaker_id: Option<&str>,
    ) -> Result<EventmakerProfileView> {
        let profile = match self.port.check_eventmaker_profile().await? {
            Some(profile) => profile,
            None => {
                debug!("no eventmaker profile stored yet");
                EventmakerProfile::placeholder(viewer_id)
            }
        };
        let is_owner = !viewer_id.is_empty() && eventmaker_id == Some(viewer_id);
        Ok(EventmakerProfileView { profile, is_owner })
    }

    pub async fn save_eventmaker_profile(
        &self,
        profile: &EventmakerProfile,
    ) -> FlowResult<EventmakerProfile> {
        let mut v = Validator::new();
        v.require("userId", &profile.user_id, USER_ID_REQUIRED);
        check_links(&mut v, &profile.social_links);
        v.finish()?;

        let saved = self.port.update_eventmaker_profile(&profile.user_id, profile).await?;
        info!(user_id = %profile.user_id, "eventmaker profile updated");
        Ok(saved)
    }
}

fn check_links(v: &mut Validator, links: &SocialLinks) {
    for (network, url) in links.present() {
        let url = url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            v.add_error(format!("socialLinks.{network}"), LINK_INVALID);
        }
    }
}

/// Merge an update into the displayed organization.
///
/// A blank description keeps the previous one; links that are set replace
/// their previous value and the rest are kept.
pub fn apply_update(organization: &mut Organization, update: OrganizationUpdate) {
    if let Some(description) = update.description.filter(|d| !d.trim().is_empty()) {
        organization.description = description;
    }
    let links = &mut organization.social_links;
    let new = update.social_links;
    for (slot, value) in [
        (&mut links.facebook, new.facebook),
        (&mut links.instagram, new.instagram),
        (&mut links.twitter, new.twitter),
        (&mut links.linkedin, new.linkedin),
        (&mut links.youtube, new.youtube),
    ] {
        if value.is_some() {
            *slot = value;
        }
    }
}
