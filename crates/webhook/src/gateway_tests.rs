use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{is_webhook_persona, reply_for_offline_persona, SessionTicket, WebhookClient, WebhookError};

async fn setup() -> (MockServer, WebhookClient, SessionTicket) {
    let server = MockServer::start().await;
    let client = WebhookClient::new(format!("{}/webhook", server.uri())).expect("client builds");
    (server, client, SessionTicket::generate())
}

#[tokio::test]
async fn test_success_extracts_response_field() {
    let (server, client, ticket) = setup().await;

    Mock::given(method("POST"))
        .and(path("/webhook"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": "Margins look tight this quarter.",
            "status": "ok"
        })))
        .mount(&server)
        .await;

    let reply = client.send("How are margins?", "1", "CFO", "u1", &ticket).await.unwrap();
    assert_eq!(reply, "Margins look tight this quarter.");
}

#[tokio::test]
async fn test_payload_carries_session_and_persona() {
    let (server, client, ticket) = setup().await;

    Mock::given(method("POST"))
        .and(path("/webhook"))
        .and(body_partial_json(serde_json::json!({
            "message": "hello",
            "persona_id": "2",
            "persona_name": "Head of Retail Lending",
            "user_id": "u42",
            "session_id": ticket.id(),
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("ack"))
        .expect(1)
        .mount(&server)
        .await;

    let reply =
        client.send("hello", "2", "Head of Retail Lending", "u42", &ticket).await.unwrap();
    assert_eq!(reply, "ack");
}

#[tokio::test]
async fn test_inactive_workflow_404_returns_advisory() {
    let (server, client, ticket) = setup().await;

    Mock::given(method("POST"))
        .and(path("/webhook"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string("The requested webhook is not registered for this instance"),
        )
        .mount(&server)
        .await;

    let reply = client.send("hi", "1", "CFO", "u1", &ticket).await.unwrap();
    assert!(reply.contains("not currently active"), "unexpected reply: {reply}");
}

#[tokio::test]
async fn test_plain_404_is_an_error() {
    let (server, client, ticket) = setup().await;

    Mock::given(method("POST"))
        .and(path("/webhook"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such route"))
        .mount(&server)
        .await;

    let err = client.send("hi", "1", "CFO", "u1", &ticket).await.unwrap_err();
    assert!(matches!(err, WebhookError::Status { code: 404, .. }));
}

#[tokio::test]
async fn test_server_error_is_single_attempt() {
    let (server, client, ticket) = setup().await;

    Mock::given(method("POST"))
        .and(path("/webhook"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.send("hi", "1", "CFO", "u1", &ticket).await.unwrap_err();
    assert!(matches!(err, WebhookError::Status { code: 500, .. }));
    // Mock expectation of exactly one request verifies there is no retry.
}

#[tokio::test]
async fn test_test_connection_reports_status() {
    let (server, client, ticket) = setup().await;

    Mock::given(method("POST"))
        .and(path("/webhook"))
        .and(body_partial_json(serde_json::json!({"test": "connection_check"})))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    assert!(client.test_connection(&ticket).await);
}

#[tokio::test]
async fn test_offline_persona_never_hits_network() {
    assert!(is_webhook_persona("1"));
    assert!(is_webhook_persona("2"));
    assert!(!is_webhook_persona("3"));
    assert!(!is_webhook_persona("99"));

    let reply = reply_for_offline_persona("3", "Emily Carter").await;
    assert!(reply.contains("engineering"));

    let default_reply = reply_for_offline_persona("9", "Marketing Lead").await;
    assert!(default_reply.contains("Marketing Lead"));
}

#[tokio::test]
async fn test_fallback_reply_is_fixed() {
    assert!(WebhookError::fallback_reply().contains("technical difficulties"));
}
