//! Sign-in, sign-up, recovery and organizer registration over HTTP.

mod support;

use eventpass_core::{FlowError, RegistrationField, RegistrationPhase, RegistrationWizard};
use eventpass_domain::constants::{
    EMAIL_NOT_VERIFIED_MESSAGE, LOGIN_PATH, REFRESH_TOKEN_PATH, REGISTER_EVENTMAKER_PATH,
    REGISTER_PATH, RESET_PASSWORD_PATH, RESET_PASSWORD_REQUEST_PATH, VERIFY_RESET_CODE_PATH,
};
use eventpass_domain::EventPassError;
use serde_json::json;
use support::*;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn login_stores_returned_tokens() {
    let server = MockServer::start().await;
    let context = signed_out(&server);

    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .and(body_json(json!({ "email": "ada@example.com", "password": "secret1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(refreshed_tokens()))
        .expect(1)
        .mount(&server)
        .await;

    context.accounts.login("ada@example.com", "secret1").await.expect("login");

    let stored = context.session.load().await.unwrap().expect("credentials");
    assert_eq!(stored.access_token, NEW_ACCESS);
    assert_eq!(stored.refresh_token, NEW_REFRESH);

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn unverified_email_is_reported_without_refresh() {
    let server = MockServer::start().await;
    let context = signed_out(&server);

    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": EMAIL_NOT_VERIFIED_MESSAGE })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(REFRESH_TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = context.accounts.login("ada@example.com", "secret1").await.unwrap_err();

    assert_eq!(
        err,
        FlowError::Api(EventPassError::EmailNotVerified(EMAIL_NOT_VERIFIED_MESSAGE.into()))
    );
    assert!(!context.session.is_authenticated().await.unwrap());
}

#[tokio::test]
async fn wrong_password_is_a_plain_http_error() {
    let server = MockServer::start().await;
    let context = signed_out(&server);

    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid credentials" })),
        )
        .mount(&server)
        .await;

    let err = context.accounts.login("ada@example.com", "wrong-password").await.unwrap_err();
    assert_eq!(err, FlowError::Api(EventPassError::http(401, "Invalid credentials")));
}

#[tokio::test]
async fn invalid_login_input_sends_nothing() {
    let server = MockServer::start().await;
    let context = signed_out(&server);

    let err = context.accounts.login("not-an-email", "").await.unwrap_err();

    let errors = err.validation().expect("validation error");
    assert!(errors.has_field("email"));
    assert!(errors.has_field("password"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn logout_clears_stored_credentials() {
    let server = MockServer::start().await;
    let context = signed_in(&server).await;

    context.accounts.logout().await.expect("logout");

    assert!(context.session.load().await.unwrap().is_none());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn sign_up_posts_credentials_without_confirmation() {
    let server = MockServer::start().await;
    let context = signed_out(&server);

    Mock::given(method("POST"))
        .and(path(REGISTER_PATH))
        .and(body_json(json!({ "email": "ada@example.com", "password": "secret1" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "message": "Check your inbox" })))
        .expect(1)
        .mount(&server)
        .await;

    context.accounts.register_user("ada@example.com", "secret1", "secret1").await.expect("sign up");
}

#[tokio::test]
async fn password_recovery_round() {
    let server = MockServer::start().await;
    let context = signed_out(&server);

    Mock::given(method("POST"))
        .and(path(RESET_PASSWORD_REQUEST_PATH))
        .and(body_json(json!({ "email": "ada@example.com" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(VERIFY_RESET_CODE_PATH))
        .and(body_json(json!({ "email": "ada@example.com", "code": "1234" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(RESET_PASSWORD_PATH))
        .and(body_json(json!({
            "email": "ada@example.com",
            "code": "1234",
            "newPassword": "newsecret"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let accounts = &context.accounts;
    accounts.request_password_reset("ada@example.com").await.expect("request code");
    accounts.verify_reset_code("ada@example.com", "1234").await.expect("verify code");
    accounts
        .reset_password("ada@example.com", "1234", "newsecret", "newsecret")
        .await
        .expect("reset password");
}

#[tokio::test]
async fn wrong_reset_code_surfaces_server_message() {
    let server = MockServer::start().await;
    let context = signed_out(&server);

    Mock::given(method("POST"))
        .and(path(VERIFY_RESET_CODE_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "Invalid code" })))
        .mount(&server)
        .await;

    let err = context.accounts.verify_reset_code("ada@example.com", "9999").await.unwrap_err();
    assert_eq!(err, FlowError::Api(EventPassError::http(400, "Invalid code")));
}

fn complete_wizard() -> RegistrationWizard {
    let mut wizard = RegistrationWizard::new();
    for field in RegistrationField::ALL {
        wizard.set_field(field, format!("{field} value"));
    }
    wizard.set_field(RegistrationField::Email, "org@example.com");
    wizard.set_field(RegistrationField::Password, "secret1");
    wizard.set_field(RegistrationField::ConfirmPassword, "secret1");
    wizard.set_agreed_to_terms(true);

    while wizard.phase() != RegistrationPhase::Organization {
        wizard.advance().expect("phase should be valid");
    }
    wizard
}

#[tokio::test]
async fn organizer_registration_posts_aggregate_payload() {
    let server = MockServer::start().await;
    let context = signed_out(&server);

    Mock::given(method("POST"))
        .and(path(REGISTER_EVENTMAKER_PATH))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let mut wizard = complete_wizard();
    let submitted = wizard.submit(context.auth.as_ref()).await.expect("submit");
    assert_eq!(submitted.email, "org@example.com");

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(body["email"], "org@example.com");
    assert_eq!(body["zipCode"], "zipCode value");
    assert_eq!(body["agreedToTerms"], true);
    assert!(body.get("confirmPassword").is_none());
}

#[tokio::test]
async fn rejected_registration_keeps_the_draft() {
    let server = MockServer::start().await;
    let context = signed_out(&server);

    Mock::given(method("POST"))
        .and(path(REGISTER_EVENTMAKER_PATH))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({ "message": "Email already in use" })),
        )
        .mount(&server)
        .await;

    let mut wizard = complete_wizard();
    let err = wizard.submit(context.auth.as_ref()).await.unwrap_err();

    assert_eq!(err.to_string(), "registration failed: HTTP 409: Email already in use");
    assert!(!wizard.is_submitted());
    assert_eq!(wizard.draft().get(RegistrationField::Email), "org@example.com");
}
