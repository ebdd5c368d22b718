//! Authenticated API client
//!
//! Attaches the stored bearer token to every request and, when the server
//! answers with the configured unauthorized status, refreshes the session
//! once and resubmits the request once.
//!
//! ```text
//! send ──► dispatch(token) ──► status != unauthorized ──► ApiResponse
//!                 │
//!                 └── unauthorized ──► session.refresh_after(token)
//!                                            │
//!                                            ├── Err ──► Unauthorized (credentials cleared)
//!                                            └── Ok(new) ──► dispatch(new) ──► unauthorized again ──► Unauthorized
//!                                                                   └──────► ApiResponse
//! ```

use std::sync::Arc;
use std::time::Duration;

use eventpass_common::auth::SessionManager;
use eventpass_domain::{ApiConfig, EventPassError, Result};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::errors::InfraError;
use crate::http::HttpClient;

/// Configuration for API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL every path is appended to (e.g., "https://api.eventpass.app")
    pub base_url: String,
    /// Timeout for API requests
    pub timeout: Duration,
    /// Status that triggers the refresh-and-retry cycle
    pub unauthorized_status: u16,
    /// Transport attempts per dispatch
    pub max_attempts: usize,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self::from(&ApiConfig::default())
    }
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.normalized_base_url().to_string(),
            timeout: Duration::from_secs(config.timeout_seconds),
            unauthorized_status: config.unauthorized_status,
            max_attempts: config.max_attempts,
        }
    }
}

/// An outbound call, independent of any token
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    body: Option<Value>,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), body: None, query: Vec::new(), headers: Vec::new() }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body. The body is serialized once so the request can be
    /// resubmitted after a refresh.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let value =
            serde_json::to_value(body).map_err(|e| EventPassError::from(InfraError::from(e)))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Extra header. A caller-supplied `Authorization` is replaced whenever a
    /// stored token is attached.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// A received response; any status, including non-2xx
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    status: u16,
    body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> &str {
        &self.body
    }

    /// Deserialize the body. An empty body or a 204/205 reads as JSON `null`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        let no_content = self.status == StatusCode::NO_CONTENT.as_u16()
            || self.status == StatusCode::RESET_CONTENT.as_u16();
        if no_content || self.body.trim().is_empty() {
            return serde_json::from_value(Value::Null).map_err(|_| {
                EventPassError::Serialization(format!(
                    "response ({}) has no body but a value was expected",
                    self.status
                ))
            });
        }
        serde_json::from_str(&self.body).map_err(|e| EventPassError::from(InfraError::from(e)))
    }

    /// Message to show for a failed call: the server's `message` field,
    /// else the raw body, else the status reason.
    pub fn server_message(&self) -> String {
        if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(&self.body) {
            for key in ["message", "error"] {
                if let Some(Value::String(message)) = map.get(key) {
                    return message.clone();
                }
            }
        }
        let raw = self.body.trim();
        if !raw.is_empty() {
            return raw.to_string();
        }
        StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("unknown status")
            .to_string()
    }

    /// `Ok(self)` for 2xx, otherwise `Http { status, message }`.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(EventPassError::http(self.status, self.server_message()))
        }
    }
}

/// API client with session-aware retry
pub struct ApiClient {
    http_client: HttpClient,
    session: Arc<SessionManager>,
    config: ApiClientConfig,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be created
    pub fn new(config: ApiClientConfig, session: Arc<SessionManager>) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(config.timeout)
            .max_attempts(config.max_attempts)
            .build()
            .map_err(|e| EventPassError::Config(format!("Failed to build HttpClient: {e}")))?;

        Ok(Self { http_client, session, config })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    /// Send with the stored bearer token; refresh and resubmit once on the
    /// unauthorized status.
    ///
    /// # Errors
    ///
    /// - `Transport` when no response was received
    /// - `Unauthorized` when the refresh fails, no refresh token is stored,
    ///   or the retried request is still unauthorized
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let token = self.session.access_token().await.map_err(session_error)?;
        let response = self.dispatch(request, token.as_deref()).await?;
        if response.status() != self.config.unauthorized_status {
            return Ok(response);
        }

        debug!(status = response.status(), "request unauthorized, refreshing session");
        let fresh = match self.session.refresh_after(token.as_deref()).await {
            Ok(fresh) => fresh,
            Err(err) => {
                warn!(error = %err, "session refresh failed");
                return Err(session_error(err));
            }
        };

        let retried = self.dispatch(request, Some(&fresh)).await?;
        if retried.status() == self.config.unauthorized_status {
            warn!(status = retried.status(), "request still unauthorized after refresh");
            return Err(EventPassError::Unauthorized(retried.server_message()));
        }
        Ok(retried)
    }

    /// Send without a token and without the refresh cycle.
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn send_public(&self, request: &ApiRequest) -> Result<ApiResponse> {
        self.dispatch(request, None).await
    }

    /// [`send`](Self::send) that gives up with `Cancelled` once `cancel`
    /// fires. A token refresh already started keeps running on its own task
    /// and the rotated pair is still stored.
    pub async fn send_cancellable(
        &self,
        request: &ApiRequest,
        cancel: &CancellationToken,
    ) -> Result<ApiResponse> {
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                debug!(path = %request.path, "request cancelled");
                Err(EventPassError::Cancelled)
            }
            result = self.send(request) => result,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(&ApiRequest::get(path)).await?.error_for_status()?.json()
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(&ApiRequest::post(path).json(body)?).await?.error_for_status()?.json()
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(&ApiRequest::put(path).json(body)?).await?.error_for_status()?.json()
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send(&ApiRequest::delete(path)).await?.error_for_status()?;
        Ok(())
    }

    /// Unauthenticated POST for the sign-in, sign-up and recovery endpoints.
    pub async fn post_public<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_public(&ApiRequest::post(path).json(body)?).await?.error_for_status()?.json()
    }

    fn url(&self, path: &str) -> Result<Url> {
        Url::parse(&format!("{}{}", self.config.base_url, path))
            .map_err(|e| EventPassError::from(InfraError::from(e)))
    }

    async fn dispatch(&self, request: &ApiRequest, token: Option<&str>) -> Result<ApiResponse> {
        let url = self.url(&request.path)?;
        let mut builder = self.http_client.request(request.method.clone(), url);

        for (name, value) in &request.headers {
            if token.is_some() && name.eq_ignore_ascii_case("authorization") {
                continue;
            }
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = self.http_client.send(builder).await?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| EventPassError::from(InfraError::from(e)))?;
        debug!(status, "response received");
        Ok(ApiResponse { status, body })
    }
}

fn session_error(err: eventpass_common::auth::SessionError) -> EventPassError {
    InfraError::from(err).into()
}

#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    session: Option<Arc<SessionManager>>,
}

impl ApiClientBuilder {
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn session(mut self, session: Arc<SessionManager>) -> Self {
        self.session = Some(session);
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        let config = self.config.unwrap_or_default();
        let session = self
            .session
            .ok_or_else(|| EventPassError::Config("Session manager not set".to_string()))?;

        ApiClient::new(config, session)
    }
}
