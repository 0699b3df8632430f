//! Outbound call integration tests against a mocked Twilio API

use serde_json::json;
use std::time::Duration;
use thinq_dialer::infrastructure::twilio::{ClientSettings, TwilioRestClient};
use thinq_dialer::{CallConfiguration, CallError, CallInitiator, ErrorKind};
use wiremock::matchers::{basic_auth, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCOUNT_SID: &str = "ACa5a21802beff96f147d40bf98c957038";
const AUTH_TOKEN: &str = "7852c807435af28d468344ca57a49d2a";
const CALL_SID: &str = "CA1234567890abcdef1234567890abcdef";

fn account_path() -> String {
    format!("/Accounts/{}.json", ACCOUNT_SID)
}

fn calls_path() -> String {
    format!("/Accounts/{}/Calls.json", ACCOUNT_SID)
}

fn initiator(server: &MockServer, customer_number: &str) -> CallInitiator<TwilioRestClient> {
    initiator_with_timeout(server, customer_number, Duration::from_secs(5))
}

fn initiator_with_timeout(
    server: &MockServer,
    customer_number: &str,
    timeout: Duration,
) -> CallInitiator<TwilioRestClient> {
    let config = CallConfiguration::new(customer_number, ACCOUNT_SID, AUTH_TOKEN, "+17543336811");
    let settings = ClientSettings {
        base_url: server.uri(),
        timeout,
    };
    CallInitiator::connect(config, settings).expect("client")
}

async fn mount_valid_account(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(account_path()))
        .and(basic_auth(ACCOUNT_SID, AUTH_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sid": ACCOUNT_SID,
            "friendly_name": "thinq",
            "status": "active"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_invalid_credentials_skip_call_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(account_path()))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": 20003,
            "message": "Authenticate",
            "status": 401
        })))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(calls_path()))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let initiator = initiator(&server, "+15551234567");

    assert!(!initiator.validate().await);
    assert_eq!(initiator.call().await, "Invalid Twilio Account details.");
}

#[tokio::test]
async fn test_successful_call_returns_sid() {
    let server = MockServer::start().await;
    mount_valid_account(&server).await;
    Mock::given(method("POST"))
        .and(path(calls_path()))
        .and(basic_auth(ACCOUNT_SID, AUTH_TOKEN))
        .and(body_string_contains("To=%2B15551234567"))
        .and(body_string_contains("From=%2B17543336811"))
        .and(body_string_contains(
            "Url=http%3A%2F%2Fcris.viralearnings.com%2Ftwiml%2Fget_response",
        ))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "sid": CALL_SID,
            "status": "queued",
            "to": "+15551234567",
            "from": "+17543336811",
            "direction": "outbound-api",
            "date_created": "Tue, 31 Aug 2010 20:36:28 +0000"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let initiator = initiator(&server, "+15551234567");
    let sid = initiator.initiate_call().await.expect("call sid");

    assert_eq!(sid.as_str(), CALL_SID);
}

#[tokio::test]
async fn test_vendor_rejection_returns_vendor_message() {
    let server = MockServer::start().await;
    mount_valid_account(&server).await;
    Mock::given(method("POST"))
        .and(path(calls_path()))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": 21211,
            "message": "The 'To' number is not a valid phone number.",
            "more_info": "https://www.twilio.com/docs/errors/21211",
            "status": 400
        })))
        .mount(&server)
        .await;

    let initiator = initiator(&server, "not-a-number");
    let err = initiator.initiate_call().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Rejected);
    assert_eq!(err.vendor_code(), Some(21211));
    assert_eq!(err.to_string(), "The 'To' number is not a valid phone number.");
}

#[tokio::test]
async fn test_unreadable_error_body_uses_status_text() {
    let server = MockServer::start().await;
    mount_valid_account(&server).await;
    Mock::given(method("POST"))
        .and(path(calls_path()))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream failure"))
        .mount(&server)
        .await;

    let initiator = initiator(&server, "+15551234567");
    let err = initiator.initiate_call().await.unwrap_err();

    assert_eq!(
        err,
        CallError::Rejected {
            status: 500,
            code: None,
            message: "500 Internal Server Error".to_string(),
        }
    );
}

#[tokio::test]
async fn test_malformed_success_body_is_invalid_response() {
    let server = MockServer::start().await;
    mount_valid_account(&server).await;
    Mock::given(method("POST"))
        .and(path(calls_path()))
        .respond_with(ResponseTemplate::new(201).set_body_string("not json"))
        .mount(&server)
        .await;

    let initiator = initiator(&server, "+15551234567");
    let err = initiator.initiate_call().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidResponse);
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    let server = MockServer::start().await;
    mount_valid_account(&server).await;
    Mock::given(method("POST"))
        .and(path(calls_path()))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "sid": CALL_SID }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let initiator = initiator_with_timeout(&server, "+15551234567", Duration::from_millis(500));
    let err = initiator.initiate_call().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn test_account_lookup_server_error_is_invalid() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(account_path()))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let initiator = initiator(&server, "+15551234567");
    let err = initiator.initiate_call().await.unwrap_err();

    assert_eq!(err, CallError::InvalidAccount);
}
