//! Organization page and the public eventmaker profile

pub mod ports;
pub mod service;

pub use ports::OrganizationPort;
pub use service::{apply_update, EventmakerProfileView, OrganizationService};
