//! Organizer events: CRUD with local draft validation, and statistics

pub mod ports;
pub mod service;
pub mod validation;

pub use ports::EventPort;
pub use service::EventService;
pub use validation::{parse_price, validate_event_draft};
