//! Event service - draft validation and organizer statistics

use std::sync::Arc;

use eventpass_domain::{Event, EventDraft, EventsOverview, Result};
use tracing::info;

use super::ports::EventPort;
use super::validation::{normalize, validate_event_draft};
use crate::errors::FlowResult;

pub struct EventService {
    port: Arc<dyn EventPort>,
}

impl EventService {
    pub fn new(port: Arc<dyn EventPort>) -> Self {
        Self { port }
    }

    pub async fn list(&self) -> Result<Vec<Event>> {
        self.port.user_events().await
    }

    pub async fn get(&self, id: i64) -> Result<Event> {
        self.port.event(id).await
    }

    /// Draft prefilled from an existing event, for the edit screen.
    pub async fn edit_draft(&self, id: i64) -> Result<EventDraft> {
        let event = self.port.event(id).await?;
        Ok(EventDraft::from(&event))
    }

    pub async fn create(&self, draft: EventDraft) -> FlowResult<()> {
        validate_event_draft(&draft).into_result()?;
        self.port.create_event(&normalize(draft)).await?;
        info!("event created");
        Ok(())
    }

    pub async fn update(&self, id: i64, draft: EventDraft) -> FlowResult<()> {
        validate_event_draft(&draft).into_result()?;
        self.port.update_event(id, &normalize(draft)).await?;
        info!(event_id = id, "event updated");
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.port.delete_event(id).await?;
        info!(event_id = id, "event deleted");
        Ok(())
    }

    /// Totals for the statistics screen.
    pub async fn overview(&self) -> Result<EventsOverview> {
        let events = self.port.user_events().await?;
        Ok(EventsOverview::from_events(&events))
    }
}
