//! User profile types
//!
//! Profile as returned by `GET /api/user/profile`. Organizer accounts carry
//! the organization block; attendee accounts leave it empty.

use serde::{Deserialize, Serialize};

/// User profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub citizenship: String,
    pub phone: Option<String>,
    pub language: Option<String>,
    pub address: Address,
    pub organization: Option<OrganizationDetails>,
}

/// Postal address nested in the profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub country: String,
    pub city: String,
    pub zip_code: String,
    pub street_name: String,
}

/// Organizer details collected by the last registration phase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationDetails {
    pub organization_name: String,
    pub tax_number: String,
    pub address: String,
    pub phone: String,
    pub website: String,
}

/// Entry of `GET /api/user/languages`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
}

/// Body of `PUT /api/user/language`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSelection {
    pub language_code: String,
}

/// Response of `GET /api/user/language`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentLanguage {
    #[serde(default)]
    pub language: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_tolerates_missing_sections() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"email":"a@b.com","firstName":"Ada","address":{"country":"Germany"}}"#,
        )
        .unwrap();

        assert_eq!(profile.first_name, "Ada");
        assert_eq!(profile.address.country, "Germany");
        assert!(profile.address.city.is_empty());
        assert!(profile.organization.is_none());
    }
}
