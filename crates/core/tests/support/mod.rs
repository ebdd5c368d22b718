//! Shared test helpers for `eventpass-core` integration tests.
//!
//! `MockBackend` implements every core port in memory and records each call,
//! so tests can assert both on outcomes and on what would have been sent.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use eventpass_core::account::AccountPort;
use eventpass_core::events::EventPort;
use eventpass_core::organization::OrganizationPort;
use eventpass_core::profile::{LanguagePort, ProfilePort};
use eventpass_core::registration::RegistrationPort;
use eventpass_core::ticket_ports::TicketPort;
use eventpass_domain::{
    CurrentLanguage, EmailRequest, Event, EventDraft, EventPassError, EventmakerProfile,
    EventmakerRegistration, Language, LoginRequest, OrganizationPage, OrganizationUpdate,
    ResetPasswordRequest, Result as DomainResult, TicketCheckRequest, TicketCheckResponse,
    UserProfile, UserRegistration, VerifyResetCodeRequest,
};
use serde_json::Value;

/// One recorded port call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Login(LoginRequest),
    RegisterUser(UserRegistration),
    RegisterEventmaker(EventmakerRegistration),
    ResendVerification(String),
    RequestPasswordReset(String),
    VerifyResetCode(VerifyResetCodeRequest),
    ResetPassword(ResetPasswordRequest),
    Logout,
    FetchProfile,
    UpdateProfile(Value),
    UpdateOrganization(Value),
    CurrentLanguage,
    AvailableLanguages,
    SetLanguage(String),
    UserEvents,
    Event(i64),
    CreateEvent(EventDraft),
    UpdateEvent(i64, EventDraft),
    DeleteEvent(i64),
    CheckTicket(String),
    OrganizationPage,
    UpdateOrganizationPage(String, OrganizationUpdate),
    CheckEventmakerProfile,
    UpdateEventmakerProfile(String, EventmakerProfile),
}

#[derive(Default)]
struct State {
    calls: Vec<Call>,
    failure: Option<EventPassError>,
    profile: UserProfile,
    events: Vec<Event>,
    ticket: Option<TicketCheckResponse>,
    organization_page: OrganizationPage,
    eventmaker_profile: Option<EventmakerProfile>,
}

/// In-memory backend implementing every core port.
#[derive(Default, Clone)]
pub struct MockBackend {
    state: Arc<Mutex<State>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every subsequent call fails with `error`.
    pub fn failing_with(self, error: EventPassError) -> Self {
        self.state.lock().unwrap().failure = Some(error);
        self
    }

    pub fn succeed(&self) {
        self.state.lock().unwrap().failure = None;
    }

    pub fn with_profile(self, profile: UserProfile) -> Self {
        self.state.lock().unwrap().profile = profile;
        self
    }

    pub fn with_events(self, events: Vec<Event>) -> Self {
        self.state.lock().unwrap().events = events;
        self
    }

    pub fn with_ticket_response(self, response: TicketCheckResponse) -> Self {
        self.state.lock().unwrap().ticket = Some(response);
        self
    }

    pub fn with_organization_page(self, page: OrganizationPage) -> Self {
        self.state.lock().unwrap().organization_page = page;
        self
    }

    pub fn with_eventmaker_profile(self, profile: EventmakerProfile) -> Self {
        self.state.lock().unwrap().eventmaker_profile = Some(profile);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    fn record(&self, call: Call) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        match &state.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AccountPort for MockBackend {
    async fn login(&self, request: &LoginRequest) -> DomainResult<()> {
        self.record(Call::Login(request.clone()))
    }

    async fn register_user(&self, request: &UserRegistration) -> DomainResult<()> {
        self.record(Call::RegisterUser(request.clone()))
    }

    async fn resend_verification(&self, request: &EmailRequest) -> DomainResult<()> {
        self.record(Call::ResendVerification(request.email.clone()))
    }

    async fn request_password_reset(&self, request: &EmailRequest) -> DomainResult<()> {
        self.record(Call::RequestPasswordReset(request.email.clone()))
    }

    async fn verify_reset_code(&self, request: &VerifyResetCodeRequest) -> DomainResult<()> {
        self.record(Call::VerifyResetCode(request.clone()))
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> DomainResult<()> {
        self.record(Call::ResetPassword(request.clone()))
    }

    async fn logout(&self) -> DomainResult<()> {
        self.record(Call::Logout)
    }
}

#[async_trait]
impl RegistrationPort for MockBackend {
    async fn register_eventmaker(&self, registration: &EventmakerRegistration) -> DomainResult<()> {
        self.record(Call::RegisterEventmaker(registration.clone()))
    }
}

#[async_trait]
impl ProfilePort for MockBackend {
    async fn fetch_profile(&self) -> DomainResult<UserProfile> {
        self.record(Call::FetchProfile)?;
        Ok(self.state.lock().unwrap().profile.clone())
    }

    async fn update_profile(&self, changes: &Value) -> DomainResult<()> {
        self.record(Call::UpdateProfile(changes.clone()))
    }

    async fn update_organization(&self, changes: &Value) -> DomainResult<()> {
        self.record(Call::UpdateOrganization(changes.clone()))
    }
}

#[async_trait]
impl LanguagePort for MockBackend {
    async fn current_language(&self) -> DomainResult<CurrentLanguage> {
        self.record(Call::CurrentLanguage)?;
        Ok(CurrentLanguage { language: self.state.lock().unwrap().profile.language.clone() })
    }

    async fn available_languages(&self) -> DomainResult<Vec<Language>> {
        self.record(Call::AvailableLanguages)?;
        Ok(vec![
            Language { code: "en".into(), name: "English".into() },
            Language { code: "de".into(), name: "Deutsch".into() },
        ])
    }

    async fn set_language(&self, language_code: &str) -> DomainResult<()> {
        self.record(Call::SetLanguage(language_code.to_string()))
    }
}

#[async_trait]
impl EventPort for MockBackend {
    async fn user_events(&self) -> DomainResult<Vec<Event>> {
        self.record(Call::UserEvents)?;
        Ok(self.state.lock().unwrap().events.clone())
    }

    async fn event(&self, id: i64) -> DomainResult<Event> {
        self.record(Call::Event(id))?;
        self.state
            .lock()
            .unwrap()
            .events
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| EventPassError::http(404, "Event not found"))
    }

    async fn create_event(&self, draft: &EventDraft) -> DomainResult<()> {
        self.record(Call::CreateEvent(draft.clone()))
    }

    async fn update_event(&self, id: i64, draft: &EventDraft) -> DomainResult<()> {
        self.record(Call::UpdateEvent(id, draft.clone()))
    }

    async fn delete_event(&self, id: i64) -> DomainResult<()> {
        self.record(Call::DeleteEvent(id))
    }
}

#[async_trait]
impl TicketPort for MockBackend {
    async fn check_ticket(&self, request: &TicketCheckRequest) -> DomainResult<TicketCheckResponse> {
        self.record(Call::CheckTicket(request.qr_hash.clone()))?;
        self.state
            .lock()
            .unwrap()
            .ticket
            .clone()
            .ok_or_else(|| EventPassError::http(404, "Ticket not found"))
    }
}

#[async_trait]
impl OrganizationPort for MockBackend {
    async fn organization_page(&self) -> DomainResult<OrganizationPage> {
        self.record(Call::OrganizationPage)?;
        Ok(self.state.lock().unwrap().organization_page.clone())
    }

    async fn update_organization(
        &self,
        user_id: &str,
        update: &OrganizationUpdate,
    ) -> DomainResult<()> {
        self.record(Call::UpdateOrganizationPage(user_id.to_string(), update.clone()))
    }

    async fn check_eventmaker_profile(&self) -> DomainResult<Option<EventmakerProfile>> {
        self.record(Call::CheckEventmakerProfile)?;
        Ok(self.state.lock().unwrap().eventmaker_profile.clone())
    }

    async fn update_eventmaker_profile(
        &self,
        user_id: &str,
        profile: &EventmakerProfile,
    ) -> DomainResult<EventmakerProfile> {
        self.record(Call::UpdateEventmakerProfile(user_id.to_string(), profile.clone()))?;
        Ok(profile.clone())
    }
}

/// Event fixture with optional statistics.
pub fn event(id: i64, sold: Option<(u32, u32, f64)>) -> Event {
    let json = serde_json::json!({
        "id": id,
        "name": format!("Event {id}"),
        "price": 10.0,
        "ticketCountLimited": false,
    });
    let mut event: Event = serde_json::from_value(json).unwrap();
    event.statistics = sold.map(|(tickets_sold, tickets_scanned, revenue)| {
        eventpass_domain::EventStatistics { tickets_sold, tickets_scanned, revenue }
    });
    event
}
