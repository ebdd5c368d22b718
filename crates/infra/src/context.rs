//! Application wiring
//!
//! Builds the token store, session manager, API client and every service
//! from a loaded [`Config`]. The presentation layer keeps one
//! [`AppContext`] for the lifetime of the app.

use std::sync::Arc;
use std::time::Duration;

use eventpass_common::auth::{MemoryTokenStore, SessionManager, TokenStore};
use eventpass_common::security::KeychainProvider;
use eventpass_core::account::AccountService;
use eventpass_core::events::EventService;
use eventpass_core::organization::OrganizationService;
use eventpass_core::profile::ProfileService;
use eventpass_core::ticket_ports::TicketPort;
use eventpass_domain::{Config, EventPassError, Result, StorageBackend};
use tracing::info;

use crate::api::{
    ApiClient, ApiClientConfig, AuthService, EventApi, HttpTokenRefresher, MediaUrls,
    OrganizationApi, ProfileApi, TicketApi,
};
use crate::http::HttpClient;

pub struct AppContext {
    pub session: Arc<SessionManager>,
    pub api: Arc<ApiClient>,
    /// Also the registration port for the organizer wizard.
    pub auth: Arc<AuthService>,
    pub accounts: AccountService,
    pub profiles: ProfileService,
    pub events: EventService,
    pub organizations: OrganizationService,
    pub tickets: Arc<dyn TicketPort>,
    pub media: MediaUrls,
}

impl AppContext {
    /// Wire everything with the token store selected by
    /// `config.storage.backend`.
    ///
    /// # Errors
    /// Returns `EventPassError::Config` if an HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        let store: Arc<dyn TokenStore> = match config.storage.backend {
            StorageBackend::Memory => Arc::new(MemoryTokenStore::new()),
            StorageBackend::Keychain => {
                Arc::new(KeychainProvider::new(config.storage.service_name.clone()))
            }
        };
        Self::with_store(config, store)
    }

    /// Wire everything on top of an existing token store.
    ///
    /// # Errors
    /// Returns `EventPassError::Config` if an HTTP client cannot be built.
    pub fn with_store(config: &Config, store: Arc<dyn TokenStore>) -> Result<Self> {
        let api_config = ApiClientConfig::from(&config.api);

        let refresh_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.api.timeout_seconds))
            .build()
            .map_err(|e| EventPassError::Config(format!("Failed to build refresh client: {e}")))?;
        let refresher = Arc::new(HttpTokenRefresher::new(refresh_client, &api_config.base_url));

        let session = Arc::new(SessionManager::new(store, refresher));
        let api = Arc::new(ApiClient::new(api_config, Arc::clone(&session))?);

        let auth = Arc::new(AuthService::new(Arc::clone(&api)));
        let profile_api = Arc::new(ProfileApi::new(Arc::clone(&api)));
        let organization_api = Arc::new(OrganizationApi::new(Arc::clone(&api)));

        let context = Self {
            accounts: AccountService::new(auth.clone()),
            profiles: ProfileService::new(profile_api.clone(), profile_api),
            events: EventService::new(Arc::new(EventApi::new(Arc::clone(&api)))),
            organizations: OrganizationService::new(organization_api),
            tickets: Arc::new(TicketApi::new(Arc::clone(&api))),
            media: MediaUrls::new(api.base_url()),
            session,
            api,
            auth,
        };

        info!(
            base_url = %context.api.base_url(),
            storage = %config.storage.backend,
            "application context ready"
        );
        Ok(context)
    }
}
