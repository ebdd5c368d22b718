//! Organizer registration state machine

use eventpass_common::validation::ValidationError;
use eventpass_domain::EventPassError;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::draft::{RegistrationDraft, RegistrationField};
use super::phase::RegistrationPhase;
use super::ports::RegistrationPort;
use super::rules::validate_phase;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum WizardError {
    /// The current phase has invalid fields; see [`RegistrationWizard::errors`].
    #[error("{0}")]
    Validation(ValidationError),

    #[error("already at the final phase, submit instead")]
    AtFinalPhase,

    #[error("registration can only be submitted from the final phase")]
    NotAtFinalPhase,

    #[error("registration was already submitted")]
    AlreadySubmitted,

    /// The backend refused the registration. The draft is unchanged.
    #[error("registration failed: {0}")]
    Submission(EventPassError),
}

/// Outcome of a successful submit
///
/// Email verification happens outside this flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted {
    pub email: String,
}

/// Four-phase registration wizard
///
/// Holds the draft, the current phase and the error set of the last
/// validation. Only [`advance`](Self::advance) and [`submit`](Self::submit)
/// validate; going back never does.
#[derive(Debug, Clone, Default)]
pub struct RegistrationWizard {
    phase: RegistrationPhase,
    draft: RegistrationDraft,
    errors: ValidationError,
    submitted: bool,
}

impl RegistrationWizard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn phase(&self) -> RegistrationPhase {
        self.phase
    }

    #[must_use]
    pub const fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    /// Errors from the most recent validation pass.
    #[must_use]
    pub const fn errors(&self) -> &ValidationError {
        &self.errors
    }

    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn set_field(&mut self, field: RegistrationField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn set_agreed_to_terms(&mut self, agreed: bool) {
        self.draft.set_agreed_to_terms(agreed);
    }

    /// Validate the current phase and move forward one phase.
    ///
    /// On failure the error set is replaced and the phase stays put.
    pub fn advance(&mut self) -> Result<RegistrationPhase, WizardError> {
        let Some(next) = self.phase.next() else {
            return Err(WizardError::AtFinalPhase);
        };

        self.validate_current()?;
        debug!(from = %self.phase, to = %next, "registration phase advanced");
        self.phase = next;
        Ok(next)
    }

    /// Step back one phase without validating. No-op on the first phase.
    pub fn back(&mut self) -> RegistrationPhase {
        if let Some(previous) = self.phase.previous() {
            self.phase = previous;
        }
        self.phase
    }

    /// Validate the final phase and post the aggregate payload.
    pub async fn submit(&mut self, port: &dyn RegistrationPort) -> Result<Submitted, WizardError> {
        if self.submitted {
            return Err(WizardError::AlreadySubmitted);
        }
        if !self.phase.is_last() {
            return Err(WizardError::NotAtFinalPhase);
        }
        self.validate_current()?;

        let payload = self.draft.to_payload();
        match port.register_eventmaker(&payload).await {
            Ok(()) => {
                info!("organizer registration submitted");
                self.submitted = true;
                Ok(Submitted { email: payload.email })
            }
            Err(err) => {
                warn!(error = %err, "organizer registration rejected");
                Err(WizardError::Submission(err))
            }
        }
    }

    fn validate_current(&mut self) -> Result<(), WizardError> {
        self.errors = validate_phase(self.phase, &self.draft);
        if self.errors.is_empty() {
            Ok(())
        } else {
            debug!(phase = %self.phase, count = self.errors.error_count(), "phase validation failed");
            Err(WizardError::Validation(self.errors.clone()))
        }
    }
}
