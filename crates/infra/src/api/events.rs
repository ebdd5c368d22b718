//! Event endpoints

use std::sync::Arc;

use async_trait::async_trait;
use eventpass_core::events::EventPort;
use eventpass_domain::constants::{
    CREATE_EVENT_PATH, EVENTS_PATH, UPDATE_EVENT_PATH, USER_EVENTS_PATH,
};
use eventpass_domain::{Event, EventDraft, Result};
use tracing::instrument;

use super::client::{ApiClient, ApiRequest};

pub struct EventApi {
    client: Arc<ApiClient>,
}

impl EventApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EventPort for EventApi {
    async fn user_events(&self) -> Result<Vec<Event>> {
        self.client.get_json(USER_EVENTS_PATH).await
    }

    #[instrument(skip(self))]
    async fn event(&self, id: i64) -> Result<Event> {
        self.client.get_json(&format!("{EVENTS_PATH}/{id}")).await
    }

    #[instrument(skip_all)]
    async fn create_event(&self, draft: &EventDraft) -> Result<()> {
        let request = ApiRequest::post(CREATE_EVENT_PATH).json(draft)?;
        self.client.send(&request).await?.error_for_status()?;
        Ok(())
    }

    #[instrument(skip(self, draft))]
    async fn update_event(&self, id: i64, draft: &EventDraft) -> Result<()> {
        let request = ApiRequest::put(format!("{UPDATE_EVENT_PATH}/{id}")).json(draft)?;
        self.client.send(&request).await?.error_for_status()?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_event(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("{EVENTS_PATH}/{id}")).await
    }
}
