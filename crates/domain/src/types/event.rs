//! Event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event as listed by `GET /api/events/user-events`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(alias = "_id")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub zipcode: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub ticket_count_limited: bool,
    /// Only meaningful when `ticket_count_limited` is set.
    #[serde(default)]
    pub ticket_count: Option<u32>,
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Sales figures; only present on the organizer's own events.
    #[serde(flatten)]
    pub statistics: Option<EventStatistics>,
}

impl Event {
    /// Tickets still available, if the event caps its ticket count.
    #[must_use]
    pub fn remaining_tickets(&self) -> Option<u32> {
        if !self.ticket_count_limited {
            return None;
        }
        let sold = self.statistics.as_ref().map_or(0, |s| s.tickets_sold);
        self.ticket_count.map(|cap| cap.saturating_sub(sold))
    }
}

/// Per-event sales and door statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStatistics {
    pub tickets_sold: u32,
    #[serde(default)]
    pub tickets_scanned: u32,
    #[serde(default)]
    pub revenue: f64,
}

/// Create/update payload for an event
///
/// Sent as-is to `POST /api/events/create` and `PUT /api/events/update/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub name: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub zipcode: String,
    /// Kept as entered; validated as a non-negative decimal.
    pub price: String,
    pub ticket_count_limited: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_count: Option<u32>,
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<&Event> for EventDraft {
    fn from(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            description: event.description.clone(),
            address: event.address.clone(),
            city: event.city.clone(),
            country: event.country.clone(),
            zipcode: event.zipcode.clone(),
            price: event.price.to_string(),
            ticket_count_limited: event.ticket_count_limited,
            ticket_count: event.ticket_count,
            date: event.date,
            image_url: event.image_url.clone(),
        }
    }
}
