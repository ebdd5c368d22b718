//! Port interface for ticket validation at the door
//!
//! The camera layer decodes the QR code; only the decoded payload string
//! crosses this boundary.

use async_trait::async_trait;
use eventpass_common::validation::ValidationError;
use eventpass_domain::{Result, TicketCheckRequest, TicketCheckResponse, TicketVerdict};
use tracing::debug;

use crate::errors::FlowResult;

#[async_trait]
pub trait TicketPort: Send + Sync {
    async fn check_ticket(&self, request: &TicketCheckRequest) -> Result<TicketCheckResponse>;
}

/// Check a scanned QR payload and turn the answer into a verdict.
pub async fn verify_ticket(port: &dyn TicketPort, qr_hash: &str) -> FlowResult<TicketVerdict> {
    let qr_hash = qr_hash.trim();
    if qr_hash.is_empty() {
        return Err(ValidationError::field("qr_hash", "QR code is empty").into());
    }

    let response = port.check_ticket(&TicketCheckRequest { qr_hash: qr_hash.to_string() }).await?;
    let verdict = TicketVerdict::from(response);
    debug!(accepted = verdict.is_accepted(), "ticket checked");
    Ok(verdict)
}
