//! Port interfaces for account access and recovery
//!
//! Implemented by the HTTP auth service in infra. Login and logout also
//! update the stored session; the core never sees token values.

use async_trait::async_trait;
use eventpass_domain::{
    EmailRequest, LoginRequest, ResetPasswordRequest, Result, UserRegistration,
    VerifyResetCodeRequest,
};

#[async_trait]
pub trait AccountPort: Send + Sync {
    /// Exchange credentials for a session and persist it.
    ///
    /// Fails with `EmailNotVerified` when the account is not verified yet.
    async fn login(&self, request: &LoginRequest) -> Result<()>;

    /// Create a plain (non-organizer) account
    async fn register_user(&self, request: &UserRegistration) -> Result<()>;

    async fn resend_verification(&self, request: &EmailRequest) -> Result<()>;

    /// Ask the backend to email a reset code
    async fn request_password_reset(&self, request: &EmailRequest) -> Result<()>;

    async fn verify_reset_code(&self, request: &VerifyResetCodeRequest) -> Result<()>;

    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<()>;

    /// Drop the stored session
    async fn logout(&self) -> Result<()>;
}
