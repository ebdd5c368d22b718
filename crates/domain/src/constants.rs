//! Application constants
//!
//! Endpoint paths of the EventPass backend and local validation limits.

// Auth endpoints
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const REGISTER_EVENTMAKER_PATH: &str = "/api/auth/register/eventmaker";
pub const REFRESH_TOKEN_PATH: &str = "/api/auth/refresh-token";
pub const RESEND_VERIFICATION_PATH: &str = "/api/auth/resend-verification";
pub const RESET_PASSWORD_REQUEST_PATH: &str = "/api/auth/reset-password-request";
pub const VERIFY_RESET_CODE_PATH: &str = "/api/auth/verify-reset-code";
pub const RESET_PASSWORD_PATH: &str = "/api/auth/reset-password";

// Profile endpoints
pub const PROFILE_PATH: &str = "/api/user/profile";
pub const UPDATE_PROFILE_PATH: &str = "/api/user/update-profile";
pub const LANGUAGE_PATH: &str = "/api/user/language";
pub const LANGUAGES_PATH: &str = "/api/user/languages";
pub const UPDATE_EVENTMAKER_PROFILE_PATH: &str = "/api/eventmakerProfile/update";

// Organization page and public organizer profile
pub const ORGANIZATION_USER_PATH: &str = "/api/organization/user";
pub const ORGANIZATION_PATH: &str = "/api/organization";
pub const EVENTMAKER_PROFILE_CHECK_PATH: &str = "/api/eventmaker/profile/check";
pub const EVENTMAKER_PROFILE_PATH: &str = "/api/eventmaker/profile";

// Event endpoints
pub const USER_EVENTS_PATH: &str = "/api/events/user-events";
pub const CREATE_EVENT_PATH: &str = "/api/events/create";
pub const EVENTS_PATH: &str = "/api/events";
pub const UPDATE_EVENT_PATH: &str = "/api/events/update";

// Tickets and media
pub const CHECK_QR_PATH: &str = "/api/tickets/check_qr";
pub const IMAGE_PATH: &str = "/api/image";
pub const LANDING_PATH: &str = "/landing";

/// Server message that marks a 401 login response as "verify your email".
pub const EMAIL_NOT_VERIFIED_MESSAGE: &str = "Please verify your email first.";

// Validation limits
pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const RESET_CODE_LENGTH: usize = 4;
