//! Registration draft: the values entered across all phases

use eventpass_domain::EventmakerRegistration;

use super::phase::RegistrationPhase;

/// Text inputs of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationField {
    Email,
    Password,
    ConfirmPassword,
    FirstName,
    LastName,
    Citizenship,
    Country,
    City,
    ZipCode,
    StreetName,
    OrganizationName,
    TaxNumber,
    Address,
    Phone,
    Website,
}

/// Error key of the terms checkbox, which is not a text field.
pub const AGREED_TO_TERMS: &str = "agreedToTerms";

impl RegistrationField {
    pub const ALL: [Self; 15] = [
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
        Self::FirstName,
        Self::LastName,
        Self::Citizenship,
        Self::Country,
        Self::City,
        Self::ZipCode,
        Self::StreetName,
        Self::OrganizationName,
        Self::TaxNumber,
        Self::Address,
        Self::Phone,
        Self::Website,
    ];

    /// Key used in error sets and request payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Citizenship => "citizenship",
            Self::Country => "country",
            Self::City => "city",
            Self::ZipCode => "zipCode",
            Self::StreetName => "streetName",
            Self::OrganizationName => "organizationName",
            Self::TaxNumber => "taxNumber",
            Self::Address => "address",
            Self::Phone => "phone",
            Self::Website => "website",
        }
    }

    #[must_use]
    pub const fn phase(self) -> RegistrationPhase {
        match self {
            Self::Email | Self::Password | Self::ConfirmPassword => RegistrationPhase::Credentials,
            Self::FirstName | Self::LastName | Self::Citizenship => RegistrationPhase::Identity,
            Self::Country | Self::City | Self::ZipCode | Self::StreetName => {
                RegistrationPhase::Address
            }
            Self::OrganizationName
            | Self::TaxNumber
            | Self::Address
            | Self::Phone
            | Self::Website => RegistrationPhase::Organization,
        }
    }
}

impl std::fmt::Display for RegistrationField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values entered so far; every field starts empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    email: String,
    password: String,
    confirm_password: String,
    first_name: String,
    last_name: String,
    citizenship: String,
    country: String,
    city: String,
    zip_code: String,
    street_name: String,
    organization_name: String,
    tax_number: String,
    address: String,
    phone: String,
    website: String,
    agreed_to_terms: bool,
}

impl RegistrationDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a text field.
    #[must_use]
    pub fn get(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::Email => &self.email,
            RegistrationField::Password => &self.password,
            RegistrationField::ConfirmPassword => &self.confirm_password,
            RegistrationField::FirstName => &self.first_name,
            RegistrationField::LastName => &self.last_name,
            RegistrationField::Citizenship => &self.citizenship,
            RegistrationField::Country => &self.country,
            RegistrationField::City => &self.city,
            RegistrationField::ZipCode => &self.zip_code,
            RegistrationField::StreetName => &self.street_name,
            RegistrationField::OrganizationName => &self.organization_name,
            RegistrationField::TaxNumber => &self.tax_number,
            RegistrationField::Address => &self.address,
            RegistrationField::Phone => &self.phone,
            RegistrationField::Website => &self.website,
        }
    }

    /// Replace the value of a text field.
    pub fn set(&mut self, field: RegistrationField, value: impl Into<String>) {
        let slot = match field {
            RegistrationField::Email => &mut self.email,
            RegistrationField::Password => &mut self.password,
            RegistrationField::ConfirmPassword => &mut self.confirm_password,
            RegistrationField::FirstName => &mut self.first_name,
            RegistrationField::LastName => &mut self.last_name,
            RegistrationField::Citizenship => &mut self.citizenship,
            RegistrationField::Country => &mut self.country,
            RegistrationField::City => &mut self.city,
            RegistrationField::ZipCode => &mut self.zip_code,
            RegistrationField::StreetName => &mut self.street_name,
            RegistrationField::OrganizationName => &mut self.organization_name,
            RegistrationField::TaxNumber => &mut self.tax_number,
            RegistrationField::Address => &mut self.address,
            RegistrationField::Phone => &mut self.phone,
            RegistrationField::Website => &mut self.website,
        };
        *slot = value.into();
    }

    #[must_use]
    pub const fn agreed_to_terms(&self) -> bool {
        self.agreed_to_terms
    }

    pub fn set_agreed_to_terms(&mut self, agreed: bool) {
        self.agreed_to_terms = agreed;
    }

    /// Aggregate request body built from all four phases.
    ///
    /// Values are sent as entered; the confirmation field is dropped.
    #[must_use]
    pub fn to_payload(&self) -> EventmakerRegistration {
        EventmakerRegistration {
            email: self.email.clone(),
            password: self.password.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            citizenship: self.citizenship.clone(),
            country: self.country.clone(),
            city: self.city.clone(),
            zip_code: self.zip_code.clone(),
            street_name: self.street_name.clone(),
            organization_name: self.organization_name.clone(),
            tax_number: self.tax_number.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            website: self.website.clone(),
            agreed_to_terms: self.agreed_to_terms,
        }
    }
}
