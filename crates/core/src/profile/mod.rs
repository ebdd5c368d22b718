//! Signed-in user profile, organizer details and language preference

pub mod fields;
pub mod ports;
pub mod service;

pub use fields::{AddressField, OrganizationField, ProfileEdit, ProfileField, ProfileSection};
pub use ports::{LanguagePort, ProfilePort};
pub use service::{ProfileService, SaveOutcome};
