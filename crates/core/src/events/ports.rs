//! Port interfaces for organizer events

use async_trait::async_trait;
use eventpass_domain::{Event, EventDraft, Result};

#[async_trait]
pub trait EventPort: Send + Sync {
    /// Events owned by the signed-in organizer
    async fn user_events(&self) -> Result<Vec<Event>>;

    async fn event(&self, id: i64) -> Result<Event>;

    /// Create an event; the backend answers with a status only
    async fn create_event(&self, draft: &EventDraft) -> Result<()>;

    async fn update_event(&self, id: i64, draft: &EventDraft) -> Result<()>;

    async fn delete_event(&self, id: i64) -> Result<()>;
}
