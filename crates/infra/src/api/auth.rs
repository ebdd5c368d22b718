//! Authentication endpoints
//!
//! [`HttpTokenRefresher`] backs the session manager's refresh cycle.
//! [`AuthService`] implements the account and registration ports; login
//! stores the returned credentials, logout clears them.

use std::sync::Arc;

use async_trait::async_trait;
use eventpass_common::auth::{SessionCredentials, SessionError, SessionManager, TokenRefresher};
use eventpass_core::account::AccountPort;
use eventpass_core::registration::RegistrationPort;
use eventpass_domain::constants::{
    EMAIL_NOT_VERIFIED_MESSAGE, LOGIN_PATH, REFRESH_TOKEN_PATH, REGISTER_EVENTMAKER_PATH,
    REGISTER_PATH, RESEND_VERIFICATION_PATH, RESET_PASSWORD_PATH, RESET_PASSWORD_REQUEST_PATH,
    VERIFY_RESET_CODE_PATH,
};
use eventpass_domain::{
    EmailRequest, EventPassError, EventmakerRegistration, LoginRequest, RefreshTokenRequest,
    ResetPasswordRequest, Result, UserRegistration, VerifyResetCodeRequest,
};
use reqwest::Method;
use tracing::{debug, info, instrument, warn};

use super::client::{ApiClient, ApiRequest};
use crate::http::HttpClient;

/// Calls `POST /api/auth/refresh-token` with `{ token }`.
///
/// Uses a bare [`HttpClient`] so a refresh never goes through the
/// authenticated client's own refresh cycle.
pub struct HttpTokenRefresher {
    http_client: HttpClient,
    url: String,
}

impl HttpTokenRefresher {
    pub fn new(http_client: HttpClient, base_url: &str) -> Self {
        let url = format!("{}{}", base_url.trim_end_matches('/'), REFRESH_TOKEN_PATH);
        Self { http_client, url }
    }
}

#[async_trait]
impl TokenRefresher for HttpTokenRefresher {
    async fn refresh(
        &self,
        refresh_token: &str,
    ) -> std::result::Result<SessionCredentials, SessionError> {
        let body = RefreshTokenRequest { token: refresh_token.to_string() };
        let request = self.http_client.request(Method::POST, &self.url).json(&body);

        let response = self
            .http_client
            .send(request)
            .await
            .map_err(|e| SessionError::RefreshFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, "refresh endpoint rejected token");
            return Err(SessionError::RefreshFailed(format!(
                "refresh rejected with status {status}"
            )));
        }

        response
            .json::<SessionCredentials>()
            .await
            .map_err(|e| SessionError::RefreshFailed(format!("invalid refresh response: {e}")))
    }
}

/// Account and registration endpoints
pub struct AuthService {
    client: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    fn session(&self) -> &Arc<SessionManager> {
        self.client.session()
    }

    async fn post_public<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: serde::Serialize + Sync + ?Sized,
    {
        let request = ApiRequest::post(path).json(body)?;
        self.client.send_public(&request).await?.error_for_status()?;
        Ok(())
    }
}

#[async_trait]
impl AccountPort for AuthService {
    #[instrument(skip(self, request))]
    async fn login(&self, request: &LoginRequest) -> Result<()> {
        let request = ApiRequest::post(LOGIN_PATH).json(request)?;
        let response = self.client.send_public(&request).await?;

        if response.status() == 401 {
            let message = response.server_message();
            if message == EMAIL_NOT_VERIFIED_MESSAGE {
                info!("login refused, email not verified");
                return Err(EventPassError::EmailNotVerified(message));
            }
        }

        let credentials: SessionCredentials = response.error_for_status()?.json()?;
        self.session()
            .store(&credentials)
            .await
            .map_err(|e| EventPassError::Storage(e.to_string()))?;
        info!("session stored after login");
        Ok(())
    }

    async fn register_user(&self, request: &UserRegistration) -> Result<()> {
        self.post_public(REGISTER_PATH, request).await
    }

    async fn resend_verification(&self, request: &EmailRequest) -> Result<()> {
        self.post_public(RESEND_VERIFICATION_PATH, request).await
    }

    async fn request_password_reset(&self, request: &EmailRequest) -> Result<()> {
        self.post_public(RESET_PASSWORD_REQUEST_PATH, request).await
    }

    async fn verify_reset_code(&self, request: &VerifyResetCodeRequest) -> Result<()> {
        self.post_public(VERIFY_RESET_CODE_PATH, request).await
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<()> {
        self.post_public(RESET_PASSWORD_PATH, request).await
    }

    async fn logout(&self) -> Result<()> {
        if let Err(err) = self.session().clear().await {
            warn!(error = %err, "failed to clear credentials on logout");
            return Err(EventPassError::Storage(err.to_string()));
        }
        info!("signed out");
        Ok(())
    }
}

#[async_trait]
impl RegistrationPort for AuthService {
    #[instrument(skip(self, registration))]
    async fn register_eventmaker(&self, registration: &EventmakerRegistration) -> Result<()> {
        self.post_public(REGISTER_EVENTMAKER_PATH, registration).await
    }
}
