//! Typed profile field paths and the changed-fields diff
//!
//! An edit snapshots the values of the fields being edited, then builds a
//! request body holding only the fields whose value changed, nested along
//! each field's path:
//!
//! ```text
//! ProfileField::Address(AddressField::Country)  ->  { "address": { "country": "..." } }
//! ```

use eventpass_domain::UserProfile;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    Country,
    City,
    ZipCode,
    StreetName,
}

impl AddressField {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::City => "city",
            Self::ZipCode => "zipCode",
            Self::StreetName => "streetName",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrganizationField {
    OrganizationName,
    TaxNumber,
    Address,
    Phone,
    Website,
}

impl OrganizationField {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::OrganizationName => "organizationName",
            Self::TaxNumber => "taxNumber",
            Self::Address => "address",
            Self::Phone => "phone",
            Self::Website => "website",
        }
    }
}

/// Editable profile field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    FirstName,
    LastName,
    Citizenship,
    Email,
    Phone,
    Language,
    Address(AddressField),
    Organization(OrganizationField),
}

/// Endpoint a field is saved through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSection {
    /// `PUT /api/user/update-profile`
    Personal,
    /// `PUT /api/eventmakerProfile/update`
    Organization,
}

impl ProfileField {
    #[must_use]
    pub const fn section(self) -> ProfileSection {
        match self {
            Self::Organization(_) => ProfileSection::Organization,
            _ => ProfileSection::Personal,
        }
    }

    /// Keys from the root of the request body down to the value.
    ///
    /// Organization fields are flat in their own endpoint's body.
    #[must_use]
    pub const fn path(self) -> &'static [&'static str] {
        match self {
            Self::FirstName => &["firstName"],
            Self::LastName => &["lastName"],
            Self::Citizenship => &["citizenship"],
            Self::Email => &["email"],
            Self::Phone => &["phone"],
            Self::Language => &["language"],
            Self::Address(AddressField::Country) => &["address", "country"],
            Self::Address(AddressField::City) => &["address", "city"],
            Self::Address(AddressField::ZipCode) => &["address", "zipCode"],
            Self::Address(AddressField::StreetName) => &["address", "streetName"],
            Self::Organization(field) => match field {
                OrganizationField::OrganizationName => &["organizationName"],
                OrganizationField::TaxNumber => &["taxNumber"],
                OrganizationField::Address => &["address"],
                OrganizationField::Phone => &["phone"],
                OrganizationField::Website => &["website"],
            },
        }
    }

    /// Current value in a loaded profile; missing values read as empty.
    #[must_use]
    pub fn read(self, profile: &UserProfile) -> String {
        let org = profile.organization.as_ref();
        let value = match self {
            Self::FirstName => Some(&profile.first_name),
            Self::LastName => Some(&profile.last_name),
            Self::Citizenship => Some(&profile.citizenship),
            Self::Email => Some(&profile.email),
            Self::Phone => profile.phone.as_ref(),
            Self::Language => profile.language.as_ref(),
            Self::Address(field) => Some(match field {
                AddressField::Country => &profile.address.country,
                AddressField::City => &profile.address.city,
                AddressField::ZipCode => &profile.address.zip_code,
                AddressField::StreetName => &profile.address.street_name,
            }),
            Self::Organization(field) => org.map(|o| match field {
                OrganizationField::OrganizationName => &o.organization_name,
                OrganizationField::TaxNumber => &o.tax_number,
                OrganizationField::Address => &o.address,
                OrganizationField::Phone => &o.phone,
                OrganizationField::Website => &o.website,
            }),
        };
        value.cloned().unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
struct EditedValue {
    field: ProfileField,
    initial: String,
    current: String,
}

/// An in-progress edit of some profile fields
#[derive(Debug, Clone)]
pub struct ProfileEdit {
    values: Vec<EditedValue>,
}

impl ProfileEdit {
    /// Start editing `fields`, snapshotting their values from `profile`.
    #[must_use]
    pub fn new(profile: &UserProfile, fields: &[ProfileField]) -> Self {
        let mut values: Vec<EditedValue> = Vec::with_capacity(fields.len());
        for field in fields {
            if values.iter().any(|v| v.field == *field) {
                continue;
            }
            let initial = field.read(profile);
            values.push(EditedValue { field: *field, current: initial.clone(), initial });
        }
        Self { values }
    }

    /// Update an edited field. Returns false if the field is not part of
    /// this edit.
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) -> bool {
        match self.values.iter_mut().find(|v| v.field == field) {
            Some(entry) => {
                entry.current = value.into();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn value(&self, field: ProfileField) -> Option<&str> {
        self.values.iter().find(|v| v.field == field).map(|v| v.current.as_str())
    }

    /// Fields whose value differs from the snapshot.
    pub fn changed_fields(&self) -> impl Iterator<Item = ProfileField> + '_ {
        self.values.iter().filter(|v| v.current != v.initial).map(|v| v.field)
    }

    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.changed_fields().next().is_some()
    }

    /// Nested body of the changed fields of one section, or `None` when
    /// nothing in that section changed.
    #[must_use]
    pub fn changes(&self, section: ProfileSection) -> Option<Value> {
        let mut root = Map::new();
        for entry in &self.values {
            if entry.current == entry.initial || entry.field.section() != section {
                continue;
            }
            insert_path(&mut root, entry.field.path(), Value::String(entry.current.clone()));
        }
        if root.is_empty() {
            None
        } else {
            Some(Value::Object(root))
        }
    }
}

fn insert_path(root: &mut Map<String, Value>, path: &[&str], value: Value) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };
    let mut node = root;
    for key in parents {
        let child = node.entry((*key).to_string()).or_insert_with(|| Value::Object(Map::new()));
        if !child.is_object() {
            *child = Value::Object(Map::new());
        }
        node = match child {
            Value::Object(map) => map,
            _ => return,
        };
    }
    node.insert((*last).to_string(), value);
}

#[cfg(test)]
mod tests {
    use eventpass_domain::{Address, OrganizationDetails};
    use serde_json::json;

    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            email: "ada@example.com".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            citizenship: "UK".into(),
            address: Address {
                country: "Germany".into(),
                city: "Cologne".into(),
                ..Address::default()
            },
            organization: Some(OrganizationDetails {
                organization_name: "Tusa".into(),
                ..OrganizationDetails::default()
            }),
            ..UserProfile::default()
        }
    }

    #[test]
    fn unchanged_edit_produces_no_body() {
        let mut edit = ProfileEdit::new(&profile(), &[ProfileField::FirstName]);
        edit.set(ProfileField::FirstName, "Ada");

        assert!(!edit.has_changes());
        assert_eq!(edit.changes(ProfileSection::Personal), None);
    }

    #[test]
    fn nested_change_is_nested_in_body() {
        let country = ProfileField::Address(AddressField::Country);
        let city = ProfileField::Address(AddressField::City);
        let mut edit = ProfileEdit::new(&profile(), &[country, city, ProfileField::LastName]);
        edit.set(country, "France");
        edit.set(city, "Paris");

        assert_eq!(
            edit.changes(ProfileSection::Personal),
            Some(json!({ "address": { "country": "France", "city": "Paris" } }))
        );
    }

    #[test]
    fn organization_changes_are_kept_apart() {
        let name = ProfileField::Organization(OrganizationField::OrganizationName);
        let mut edit = ProfileEdit::new(&profile(), &[name, ProfileField::Phone]);
        edit.set(name, "Tusa GmbH");
        edit.set(ProfileField::Phone, "+49 221 000");

        assert_eq!(
            edit.changes(ProfileSection::Organization),
            Some(json!({ "organizationName": "Tusa GmbH" }))
        );
        assert_eq!(edit.changes(ProfileSection::Personal), Some(json!({ "phone": "+49 221 000" })));
    }

    #[test]
    fn set_ignores_fields_outside_the_edit() {
        let mut edit = ProfileEdit::new(&profile(), &[ProfileField::FirstName]);
        assert!(!edit.set(ProfileField::Email, "other@example.com"));
        assert_eq!(edit.value(ProfileField::FirstName), Some("Ada"));
    }

    #[test]
    fn missing_organization_reads_empty() {
        let field = ProfileField::Organization(OrganizationField::Website);
        assert_eq!(field.read(&UserProfile::default()), "");
    }
}
