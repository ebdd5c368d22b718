//! Organization page and public organizer profile types
//!
//! Both come from the organizer's public presence: the organization page
//! (`GET /api/organization/user`) and the eventmaker profile
//! (`GET /api/eventmaker/profile/check`). Image fields hold server paths on
//! the wire; the API layer replaces them with fetchable URLs.

use serde::{Deserialize, Serialize};

use super::event::Event;

/// Links shown under the organization description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

impl SocialLinks {
    /// Links that are set and not blank, as `(network, url)` pairs.
    pub fn present(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("facebook", &self.facebook),
            ("instagram", &self.instagram),
            ("twitter", &self.twitter),
            ("linkedin", &self.linkedin),
            ("youtube", &self.youtube),
        ]
        .into_iter()
        .filter_map(|(name, link)| {
            link.as_deref().filter(|url| !url.trim().is_empty()).map(|url| (name, url))
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Organization {
    pub user_id: String,
    pub organization_name: String,
    pub description: String,
    pub social_links: SocialLinks,
}

/// Response of `GET /api/organization/user`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationPage {
    pub organization: Organization,
    pub upcoming_events: Vec<Event>,
    pub avatar: Option<String>,
    pub background_image: Option<String>,
}

/// Body of `PUT /api/organization/{userId}`
///
/// Only the description and the social links are editable from the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub social_links: SocialLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileComment {
    pub comment: String,
}

/// Public organizer profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventmakerProfile {
    pub user_id: String,
    pub organization_name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    pub social_links: SocialLinks,
    pub upcoming_events: Vec<Event>,
    pub comments: Vec<ProfileComment>,
}

impl EventmakerProfile {
    /// Empty profile of an organizer who has not filled one in yet.
    pub fn placeholder(user_id: impl Into<String>) -> Self {
        Self { user_id: user_id.into(), ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organization_page_reads_backend_shape() {
        let page: OrganizationPage = serde_json::from_str(
            r#"{
                "organization": {
                    "userId": "u-7",
                    "organizationName": "Tusa Events",
                    "socialLinks": {"instagram": "https://instagram.com/tusa"}
                },
                "upcomingEvents": [{"_id": 3, "name": "Open Air"}],
                "avatar": "uploads/avatar.png"
            }"#,
        )
        .unwrap();

        assert_eq!(page.organization.user_id, "u-7");
        assert_eq!(page.upcoming_events[0].id, 3);
        assert_eq!(page.avatar.as_deref(), Some("uploads/avatar.png"));
        assert!(page.background_image.is_none());
    }

    #[test]
    fn blank_social_links_are_not_present() {
        let links = SocialLinks {
            facebook: Some(" ".into()),
            youtube: Some("https://youtube.com/@tusa".into()),
            ..SocialLinks::default()
        };
        assert_eq!(
            links.present().collect::<Vec<_>>(),
            vec![("youtube", "https://youtube.com/@tusa")]
        );
    }

    #[test]
    fn update_omits_unset_links() {
        let update = OrganizationUpdate {
            description: None,
            social_links: SocialLinks {
                twitter: Some("https://x.com/tusa".into()),
                ..SocialLinks::default()
            },
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({ "socialLinks": { "twitter": "https://x.com/tusa" } })
        );
    }
}
