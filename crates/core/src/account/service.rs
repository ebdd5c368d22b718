//! Account service - validates locally, then calls the account port

use std::sync::Arc;

use eventpass_domain::{
    EmailRequest, LoginRequest, ResetPasswordRequest, UserRegistration, VerifyResetCodeRequest,
};
use tracing::{debug, info};

use super::ports::AccountPort;
use super::rules::{validate_email, validate_login, validate_new_password, validate_reset_code};
use crate::errors::FlowResult;
use crate::registration::rules::validate_credentials;

/// Sign-in, sign-up and password recovery
///
/// Every operation runs its local rules first and returns
/// `FlowError::Validation` without touching the port when they fail.
pub struct AccountService {
    port: Arc<dyn AccountPort>,
}

impl AccountService {
    pub fn new(port: Arc<dyn AccountPort>) -> Self {
        Self { port }
    }

    pub async fn login(&self, email: &str, password: &str) -> FlowResult<()> {
        validate_login(email, password).into_result()?;
        let request = LoginRequest { email: email.to_string(), password: password.to_string() };
        self.port.login(&request).await?;
        info!("signed in");
        Ok(())
    }

    /// Simple user sign-up, using the same rules as the first registration
    /// phase.
    pub async fn register_user(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> FlowResult<()> {
        validate_credentials(email, password, confirm_password).into_result()?;
        let request =
            UserRegistration { email: email.to_string(), password: password.to_string() };
        self.port.register_user(&request).await?;
        Ok(())
    }

    pub async fn resend_verification(&self, email: &str) -> FlowResult<()> {
        validate_email(email).into_result()?;
        self.port.resend_verification(&EmailRequest { email: email.to_string() }).await?;
        Ok(())
    }

    pub async fn request_password_reset(&self, email: &str) -> FlowResult<()> {
        validate_email(email).into_result()?;
        self.port.request_password_reset(&EmailRequest { email: email.to_string() }).await?;
        debug!("password reset code requested");
        Ok(())
    }

    pub async fn verify_reset_code(&self, email: &str, code: &str) -> FlowResult<()> {
        validate_reset_code(code).into_result()?;
        let request =
            VerifyResetCodeRequest { email: email.to_string(), code: code.to_string() };
        self.port.verify_reset_code(&request).await?;
        Ok(())
    }

    /// Set a new password with a previously verified code.
    pub async fn reset_password(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> FlowResult<()> {
        let mut errors = validate_reset_code(code);
        errors.merge(validate_new_password(new_password, confirm_password));
        errors.into_result()?;

        let request = ResetPasswordRequest {
            email: email.to_string(),
            code: code.to_string(),
            new_password: new_password.to_string(),
        };
        self.port.reset_password(&request).await?;
        info!("password reset completed");
        Ok(())
    }

    pub async fn logout(&self) -> FlowResult<()> {
        self.port.logout().await?;
        Ok(())
    }
}
