use std::time::Duration;

use eventpass_domain::EventPassError;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::debug;

use crate::errors::InfraError;

const USER_AGENT: &str = concat!("eventpass/", env!("CARGO_PKG_VERSION"));

/// HTTP client with built-in retry and timeout support.
///
/// Only transport failures and 5xx responses are retried, and only when
/// more than one attempt is configured. Every other response is handed back
/// untouched.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    max_attempts: usize,
    base_backoff: Duration,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, EventPassError> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Send `builder`, retrying transient failures up to the configured
    /// attempt count.
    ///
    /// Any response, whatever its status, is returned as `Ok` once no
    /// attempts remain.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, EventPassError> {
        let mut attempt = 1;
        loop {
            let request = builder
                .try_clone()
                .ok_or_else(|| EventPassError::Internal("request body is not replayable".into()))?
                .build()
                .map_err(|err| EventPassError::from(InfraError::from(err)))?;
            let method = request.method().clone();
            let path = request.url().path().to_string();
            let retries_left = attempt < self.max_attempts;

            match self.client.execute(request).await {
                Ok(response) if retries_left && response.status().is_server_error() => {
                    debug!(attempt, %method, %path, status = %response.status(), "server error, retrying");
                }
                Ok(response) => {
                    debug!(attempt, %method, %path, status = %response.status(), "HTTP response");
                    return Ok(response);
                }
                Err(err) if retries_left && is_transient(&err) => {
                    debug!(attempt, %method, %path, error = %err, "transient failure, retrying");
                }
                Err(err) => {
                    debug!(attempt, %method, %path, error = %err, "HTTP request failed");
                    return Err(EventPassError::from(InfraError::from(err)));
                }
            }

            self.sleep_with_backoff(attempt).await;
            attempt += 1;
        }
    }

    fn backoff_delay(&self, retry_number: usize) -> Duration {
        let shift = retry_number.saturating_sub(1).min(8) as u32;
        let multiplier = 1u32 << shift;
        self.base_backoff.saturating_mul(multiplier)
    }

    async fn sleep_with_backoff(&self, retry_number: usize) {
        let delay = self.backoff_delay(retry_number);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug, Clone)]
pub struct HttpClientBuilder {
    timeout: Duration,
    max_attempts: usize,
    base_backoff: Duration,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_attempts: 1,
            base_backoff: Duration::from_millis(200),
        }
    }
}

impl HttpClientBuilder {
    /// Per-request timeout covering connect, send and body read.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Total attempts per request; values below 1 are treated as 1.
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub fn base_backoff(mut self, backoff: Duration) -> Self {
        self.base_backoff = backoff;
        self
    }

    pub fn build(self) -> Result<HttpClient, EventPassError> {
        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .no_proxy()
            .build()
            .map_err(|err| EventPassError::from(InfraError::from(err)))?;

        Ok(HttpClient { client, max_attempts: self.max_attempts, base_backoff: self.base_backoff })
    }
}

/// Transport failures worth another attempt. Decode and builder errors are
/// not.
fn is_transient(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect() || err.is_request()
}
