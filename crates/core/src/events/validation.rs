//! Event draft rules

use eventpass_common::validation::{ValidationError, Validator};
use eventpass_domain::EventDraft;

pub const PRICE_INVALID: &str = "Price must be a non-negative number";
pub const TICKET_COUNT_REQUIRED: &str = "Ticket count is required when tickets are limited";

/// Check a draft before create or update.
///
/// Every descriptive field and the price are required. A ticket count is
/// required, and must be positive, only for limited events.
pub fn validate_event_draft(draft: &EventDraft) -> ValidationError {
    let mut v = Validator::new();
    v.require("name", &draft.name, "Name is required");
    v.require("description", &draft.description, "Description is required");
    v.require("address", &draft.address, "Address is required");
    v.require("city", &draft.city, "City is required");
    v.require("country", &draft.country, "Country is required");
    v.require("zipcode", &draft.zipcode, "Zip code is required");

    if v.require("price", &draft.price, "Price is required") && parse_price(&draft.price).is_none()
    {
        v.add_error("price", PRICE_INVALID);
    }

    if draft.ticket_count_limited && !matches!(draft.ticket_count, Some(count) if count > 0) {
        v.add_error("ticketCount", TICKET_COUNT_REQUIRED);
    }
    v.into_errors()
}

/// Parse an entered price. Accepts a decimal comma.
#[must_use]
pub fn parse_price(raw: &str) -> Option<f64> {
    let price: f64 = raw.trim().replace(',', ".").parse().ok()?;
    (price.is_finite() && price >= 0.0).then_some(price)
}

/// Drop the ticket count of an unlimited event so it is not sent.
#[must_use]
pub fn normalize(mut draft: EventDraft) -> EventDraft {
    if !draft.ticket_count_limited {
        draft.ticket_count = None;
    }
    draft
}
