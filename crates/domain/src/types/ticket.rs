//! Ticket QR validation types

use serde::{Deserialize, Serialize};

/// Body of `POST /api/tickets/check_qr`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketCheckRequest {
    pub qr_hash: String,
}

/// Raw server answer for a scanned ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketCheckResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
    /// 1 while the ticket is still valid for entry, 0 once used or revoked.
    #[serde(default)]
    pub active: i64,
}

/// Door decision derived from a [`TicketCheckResponse`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", content = "message", rename_all = "lowercase")]
pub enum TicketVerdict {
    Accepted(String),
    Rejected(String),
}

impl TicketVerdict {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Accepted(m) | Self::Rejected(m) => m,
        }
    }
}

impl From<TicketCheckResponse> for TicketVerdict {
    fn from(response: TicketCheckResponse) -> Self {
        if response.status == "fail" || response.active == 0 {
            Self::Rejected(response.message)
        } else {
            Self::Accepted(response.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: &str, active: i64) -> TicketCheckResponse {
        TicketCheckResponse { status: status.into(), message: "msg".into(), active }
    }

    #[test]
    fn fail_status_is_rejected() {
        assert!(!TicketVerdict::from(response("fail", 1)).is_accepted());
    }

    #[test]
    fn inactive_ticket_is_rejected_even_when_ok() {
        let verdict = TicketVerdict::from(response("ok", 0));
        assert_eq!(verdict, TicketVerdict::Rejected("msg".into()));
    }

    #[test]
    fn active_ok_ticket_is_accepted() {
        let verdict = TicketVerdict::from(response("ok", 1));
        assert!(verdict.is_accepted());
        assert_eq!(verdict.message(), "msg");
    }
}
