//! Ticket validation endpoint

use std::sync::Arc;

use async_trait::async_trait;
use eventpass_core::ticket_ports::TicketPort;
use eventpass_domain::constants::CHECK_QR_PATH;
use eventpass_domain::{Result, TicketCheckRequest, TicketCheckResponse};

use super::client::ApiClient;

pub struct TicketApi {
    client: Arc<ApiClient>,
}

impl TicketApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TicketPort for TicketApi {
    async fn check_ticket(&self, request: &TicketCheckRequest) -> Result<TicketCheckResponse> {
        self.client.post_json(CHECK_QR_PATH, request).await
    }
}
