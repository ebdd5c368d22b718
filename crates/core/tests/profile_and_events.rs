//! Profile edits, language choice, events and ticket checks.

mod support;

use std::sync::Arc;

use eventpass_core::events::EventService;
use eventpass_core::profile::{AddressField, OrganizationField, ProfileField, ProfileService};
use eventpass_core::ticket_ports::verify_ticket;
use eventpass_domain::{Address, EventDraft, OrganizationDetails, TicketCheckResponse, UserProfile};
use serde_json::json;
use support::{event, Call, MockBackend};

fn organizer() -> UserProfile {
    UserProfile {
        email: "org@tusa.example".into(),
        first_name: "Ada".into(),
        language: Some("en".into()),
        address: Address { country: "Germany".into(), ..Address::default() },
        organization: Some(OrganizationDetails {
            organization_name: "Tusa".into(),
            website: "https://tusa.example".into(),
            ..OrganizationDetails::default()
        }),
        ..UserProfile::default()
    }
}

fn profiles(backend: &MockBackend) -> ProfileService {
    let port = Arc::new(backend.clone());
    ProfileService::new(port.clone(), port)
}

#[tokio::test]
async fn unchanged_edit_sends_nothing() {
    let backend = MockBackend::new().with_profile(organizer());
    let service = profiles(&backend);

    let edit = service.begin_edit(&[ProfileField::FirstName]).await.unwrap();
    let outcome = service.save(&edit).await.unwrap();

    assert!(outcome.is_noop());
    assert_eq!(backend.calls(), vec![Call::FetchProfile]);
}

#[tokio::test]
async fn nested_and_organization_changes_go_to_their_endpoints() {
    let backend = MockBackend::new().with_profile(organizer());
    let service = profiles(&backend);
    let country = ProfileField::Address(AddressField::Country);
    let website = ProfileField::Organization(OrganizationField::Website);

    let mut edit = service.begin_edit(&[country, website]).await.unwrap();
    assert_eq!(edit.value(country), Some("Germany"));
    edit.set(country, "France");
    edit.set(website, "https://tusa.example/fr");
    let outcome = service.save(&edit).await.unwrap();

    assert!(outcome.personal_updated && outcome.organization_updated);
    assert_eq!(
        backend.calls()[1..],
        [
            Call::UpdateProfile(json!({ "address": { "country": "France" } })),
            Call::UpdateOrganization(json!({ "website": "https://tusa.example/fr" })),
        ]
    );
}

#[tokio::test]
async fn language_selection() {
    let backend = MockBackend::new().with_profile(organizer());
    let service = profiles(&backend);

    assert_eq!(service.current_language().await.unwrap().as_deref(), Some("en"));
    assert_eq!(service.available_languages().await.unwrap().len(), 2);
    assert!(service.set_language(" ").await.is_err());
    service.set_language("de").await.unwrap();

    assert_eq!(backend.calls().last(), Some(&Call::SetLanguage("de".into())));
}

#[tokio::test]
async fn invalid_event_draft_is_not_sent() {
    let backend = MockBackend::new();
    let service = EventService::new(Arc::new(backend.clone()));

    let err = service.create(EventDraft::default()).await.unwrap_err();
    assert!(err.validation().unwrap().has_field("name"));
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn edit_draft_round_trips_through_update() {
    let backend = MockBackend::new().with_events(vec![event(7, None)]);
    let service = EventService::new(Arc::new(backend.clone()));

    let mut draft = service.edit_draft(7).await.unwrap();
    draft.description = "Summer concert".into();
    draft.address = "Rheinpark".into();
    draft.city = "Cologne".into();
    draft.country = "Germany".into();
    draft.zipcode = "50679".into();
    draft.ticket_count = Some(99);
    service.update(7, draft).await.unwrap();

    let Some(Call::UpdateEvent(id, sent)) = backend.calls().last().cloned() else {
        panic!("expected an update call");
    };
    assert_eq!(id, 7);
    assert_eq!(sent.name, "Event 7");
    assert_eq!(sent.ticket_count, None);
}

#[tokio::test]
async fn overview_sums_event_statistics() {
    let backend = MockBackend::new().with_events(vec![
        event(1, Some((40, 10, 400.0))),
        event(2, Some((60, 50, 600.0))),
        event(3, None),
    ]);
    let service = EventService::new(Arc::new(backend));

    let overview = service.overview().await.unwrap();
    assert_eq!(overview.total_events, 3);
    assert_eq!(overview.tickets_sold, 100);
    assert_eq!(overview.tickets_scanned, 60);
    assert!((overview.revenue - 1000.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn inactive_ticket_is_rejected_even_when_status_is_ok() {
    let backend = MockBackend::new().with_ticket_response(TicketCheckResponse {
        status: "success".into(),
        message: "Ticket already used".into(),
        active: 0,
    });

    let verdict = verify_ticket(&backend, "abc123").await.unwrap();
    assert!(!verdict.is_accepted());
    assert_eq!(verdict.message(), "Ticket already used");
    assert_eq!(backend.calls(), vec![Call::CheckTicket("abc123".into())]);
}

#[tokio::test]
async fn empty_qr_payload_is_rejected_locally() {
    let backend = MockBackend::new();
    assert!(verify_ticket(&backend, "  ").await.is_err());
    assert_eq!(backend.call_count(), 0);
}
