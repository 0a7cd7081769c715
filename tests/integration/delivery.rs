//! Delivery fan-out tests against a mock Telegram endpoint
//!
//! These verify the notifier boundary contract: one POST per destination,
//! isolated failures, no retry, and the `{chat_id, text}` payload shape.

use pi_monitoring::notify::Notifier;
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::telegram_config;

#[tokio::test]
async fn test_broadcast_reaches_every_destination() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bottest-token/sendMessage"))
        .respond_with(ResponseTemplate::new(200))
        .expect(3)
        .mount(&mock_server)
        .await;

    let config = telegram_config(&mock_server.uri(), &["1", "2", "3"]);
    let notifier = Notifier::new(&config, "test-token".to_string());

    let delivered = notifier.broadcast("report text").await;

    assert_eq!(delivered, 3, "every chat should receive one delivery");
}

#[tokio::test]
async fn test_one_failing_destination_does_not_abort_the_rest() {
    let mock_server = MockServer::start().await;

    // chat "2" always fails; mounted first so it takes precedence
    Mock::given(method("POST"))
        .and(path("/bottest-token/sendMessage"))
        .and(body_partial_json(json!({ "chat_id": "2" })))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/bottest-token/sendMessage"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&mock_server)
        .await;

    let config = telegram_config(&mock_server.uri(), &["1", "2", "3"]);
    let notifier = Notifier::new(&config, "test-token".to_string());

    let delivered = notifier.broadcast("report text").await;

    assert_eq!(
        delivered, 2,
        "exactly the two healthy chats should be delivered to"
    );
}

#[tokio::test]
async fn test_payload_is_chat_id_and_text_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bottest-token/sendMessage"))
        .and(body_json(json!({ "chat_id": "42", "text": "hello from the pi" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = telegram_config(&mock_server.uri(), &["42"]);
    let notifier = Notifier::new(&config, "test-token".to_string());

    let delivered = notifier.broadcast("hello from the pi").await;

    assert_eq!(delivered, 1);
}

#[tokio::test]
async fn test_unreachable_endpoint_fails_every_delivery_without_panicking() {
    // nothing listens on port 1
    let config = telegram_config("http://127.0.0.1:1", &["1", "2"]);
    let notifier = Notifier::new(&config, "test-token".to_string());

    let delivered = notifier.broadcast("report text").await;

    assert_eq!(delivered, 0);
}

#[tokio::test]
async fn test_trailing_slash_in_api_base_is_tolerated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bottest-token/sendMessage"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let base = format!("{}/", mock_server.uri());
    let config = telegram_config(&base, &["1"]);
    let notifier = Notifier::new(&config, "test-token".to_string());

    assert_eq!(notifier.broadcast("report text").await, 1);
}
