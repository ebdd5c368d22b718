//! # EventPass Core
//!
//! Client-side business logic - no HTTP or platform code.
//!
//! This crate contains:
//! - The four-phase organizer registration wizard and its field rules
//! - Sign-in, sign-up and password recovery flows
//! - Typed profile field paths and the changed-fields diff
//! - Event draft validation and organizer statistics
//! - The organization page and the public eventmaker profile
//! - Port interfaces (traits) implemented by `eventpass-infra`
//!
//! ## Architecture Principles
//! - Only depends on `eventpass-common` and `eventpass-domain`
//! - All backend access goes through `*Port` traits
//! - Local validation runs before any port call

pub mod account;
pub mod errors;
pub mod events;
pub mod organization;
pub mod profile;
pub mod registration;

// Infrastructure ports
pub mod ticket_ports;

// Re-export specific items to avoid ambiguity
pub use account::{AccountPort, AccountService};
pub use errors::{FlowError, FlowResult};
pub use events::{EventPort, EventService};
pub use organization::{EventmakerProfileView, OrganizationPort, OrganizationService};
pub use profile::{
    AddressField, LanguagePort, OrganizationField, ProfileEdit, ProfileField, ProfilePort,
    ProfileSection, ProfileService, SaveOutcome,
};
pub use registration::{
    RegistrationDraft, RegistrationField, RegistrationPhase, RegistrationPort, RegistrationWizard,
    Submitted, WizardError,
};
pub use ticket_ports::{verify_ticket, TicketPort};
