//! Per-phase validation rules
//!
//! Each function checks one phase and reports every violation in that
//! phase at once. A required field holding only whitespace counts as empty.

use eventpass_common::validation::{EmailValidator, StringValidator, ValidationError, Validator};
use eventpass_domain::constants::MIN_PASSWORD_LENGTH;

use super::draft::{RegistrationDraft, RegistrationField, AGREED_TO_TERMS};
use super::phase::RegistrationPhase;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const CONFIRM_PASSWORD_REQUIRED: &str = "Please confirm your password";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
pub const TERMS_REQUIRED: &str = "You must agree to the terms and conditions";

/// Validate the credentials triple.
///
/// Shared with the simple sign-up and password reset screens, which apply
/// the same email and password rules.
pub fn validate_credentials(email: &str, password: &str, confirm: &str) -> ValidationError {
    let mut v = Validator::new();
    check_email(&mut v, RegistrationField::Email.as_str(), email);
    check_new_password(
        &mut v,
        RegistrationField::Password.as_str(),
        RegistrationField::ConfirmPassword.as_str(),
        password,
        confirm,
    );
    v.into_errors()
}

pub(crate) fn check_email(v: &mut Validator, field: &str, email: &str) {
    if v.require(field, email, EMAIL_REQUIRED) {
        v.validate_field(field, email, &EmailValidator::new().message(EMAIL_INVALID));
    }
}

/// Password plus its confirmation.
///
/// The mismatch message overrides the required message; the comparison is
/// on the raw strings.
pub(crate) fn check_new_password(
    v: &mut Validator,
    password_field: &str,
    confirm_field: &str,
    password: &str,
    confirm: &str,
) {
    if v.require(password_field, password, PASSWORD_REQUIRED) {
        let min = StringValidator::new()
            .trim(false)
            .min_length(MIN_PASSWORD_LENGTH)
            .message(PASSWORD_TOO_SHORT);
        v.validate_field(password_field, password, &min);
    }
    v.require(confirm_field, confirm, CONFIRM_PASSWORD_REQUIRED);
    if password != confirm {
        v.add_error(confirm_field, PASSWORDS_DO_NOT_MATCH);
    }
}

fn require_fields(v: &mut Validator, draft: &RegistrationDraft, fields: &[RegistrationField]) {
    for field in fields {
        v.require(field.as_str(), draft.get(*field), required_message(*field));
    }
}

/// "First name is required", "Zip code is required", ...
#[must_use]
pub fn required_message(field: RegistrationField) -> String {
    let label = match field {
        RegistrationField::Email => "Email",
        RegistrationField::Password => "Password",
        RegistrationField::ConfirmPassword => return CONFIRM_PASSWORD_REQUIRED.to_string(),
        RegistrationField::FirstName => "First name",
        RegistrationField::LastName => "Last name",
        RegistrationField::Citizenship => "Citizenship",
        RegistrationField::Country => "Country",
        RegistrationField::City => "City",
        RegistrationField::ZipCode => "Zip code",
        RegistrationField::StreetName => "Street name",
        RegistrationField::OrganizationName => "Organization name",
        RegistrationField::TaxNumber => "Tax number",
        RegistrationField::Address => "Address",
        RegistrationField::Phone => "Phone",
        RegistrationField::Website => "Website",
    };
    format!("{label} is required")
}

pub fn validate_identity(draft: &RegistrationDraft) -> ValidationError {
    let mut v = Validator::new();
    require_fields(&mut v, draft, RegistrationPhase::Identity.fields());
    v.into_errors()
}

pub fn validate_address(draft: &RegistrationDraft) -> ValidationError {
    let mut v = Validator::new();
    require_fields(&mut v, draft, RegistrationPhase::Address.fields());
    v.into_errors()
}

/// Submit gate: every organization field plus the terms checkbox.
pub fn validate_organization(draft: &RegistrationDraft) -> ValidationError {
    let mut v = Validator::new();
    require_fields(&mut v, draft, RegistrationPhase::Organization.fields());
    v.require_true(AGREED_TO_TERMS, draft.agreed_to_terms(), TERMS_REQUIRED);
    v.into_errors()
}

/// Run the rules of one phase against the draft.
#[must_use]
pub fn validate_phase(phase: RegistrationPhase, draft: &RegistrationDraft) -> ValidationError {
    match phase {
        RegistrationPhase::Credentials => validate_credentials(
            draft.get(RegistrationField::Email),
            draft.get(RegistrationField::Password),
            draft.get(RegistrationField::ConfirmPassword),
        ),
        RegistrationPhase::Identity => validate_identity(draft),
        RegistrationPhase::Address => validate_address(draft),
        RegistrationPhase::Organization => validate_organization(draft),
    }
}
