//! Authentication and account-recovery payloads

use serde::{Deserialize, Serialize};

/// Body of `POST /api/auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/refresh-token`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenRequest {
    pub token: String,
}

/// Body of `POST /api/auth/register` (attendee accounts)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRegistration {
    pub email: String,
    pub password: String,
}

/// Aggregate body of `POST /api/auth/register/eventmaker`
///
/// Built once from all four phases of the organizer registration wizard.
/// The password confirmation is checked client-side and never sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventmakerRegistration {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub citizenship: String,
    pub country: String,
    pub city: String,
    pub zip_code: String,
    pub street_name: String,
    pub organization_name: String,
    pub tax_number: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub agreed_to_terms: bool,
}

/// Body carrying only an email (reset request, verification resend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRequest {
    pub email: String,
}

/// Body of `POST /api/auth/verify-reset-code`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResetCodeRequest {
    pub email: String,
    pub code: String,
}

/// Body of `POST /api/auth/reset-password`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

/// Free-form acknowledgement some endpoints return
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
