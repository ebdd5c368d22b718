//! Multi-phase organizer registration
//!
//! ```text
//! Credentials(1) ──advance──► Identity(2) ──advance──► Address(3) ──advance──► Organization(4)
//!        ◄───────back────────        ◄───────back────────       ◄───────back────────     │
//!                                                                                       submit
//! ```
//!
//! `advance` validates only the phase being left. `submit` validates the
//! final phase and sends one aggregate payload through [`RegistrationPort`].

pub mod draft;
pub mod phase;
pub mod ports;
pub mod rules;
pub mod wizard;

pub use draft::{RegistrationDraft, RegistrationField, AGREED_TO_TERMS};
pub use phase::RegistrationPhase;
pub use ports::RegistrationPort;
pub use rules::validate_phase;
pub use wizard::{RegistrationWizard, Submitted, WizardError};
