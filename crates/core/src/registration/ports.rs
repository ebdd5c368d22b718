//! Port interface for submitting a completed registration

use async_trait::async_trait;
use eventpass_domain::{EventmakerRegistration, Result};

/// Backend endpoint that accepts an organizer registration
#[async_trait]
pub trait RegistrationPort: Send + Sync {
    /// Submit the aggregate payload built from all four phases
    async fn register_eventmaker(&self, registration: &EventmakerRegistration) -> Result<()>;
}
