//! End-to-end capture flow against the in-process mock server
//!
//! Exercises the executor and API client over real HTTP: payload assembly,
//! api_key injection, response aggregation, and error normalization.

use mock_posthog::{CaptureReply, MockPostHog};
use posthog_node::{
    execute, Credentials, Error, ExecutionContext, ItemParameters, PropertyEntry,
};
use serde_json::json;

fn credentials(server: &MockPostHog) -> Credentials {
    Credentials::new(server.url(), "phc_test_key")
}

fn item(event_name: &str, distinct_id: &str) -> ItemParameters {
    ItemParameters {
        event_name: event_name.to_string(),
        distinct_id: distinct_id.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn capture_body_carries_api_key_event_and_distinct_id() {
    posthog_node::logging::init_test();
    let server = MockPostHog::start(CaptureReply::default()).await.unwrap();

    let mut params = item("user signed up", "user-1");
    params.properties = vec![
        PropertyEntry::new("plan", "free"),
        PropertyEntry::new("plan", "pro"),
    ];
    let ctx = ExecutionContext::new(credentials(&server), vec![params]);

    let output = execute(&ctx).await.unwrap();
    assert_eq!(output, vec![json!({ "status": 1 })]);

    let bodies = server.received_bodies().await;
    assert_eq!(bodies.len(), 1);
    let body = &bodies[0];
    assert_eq!(body["api_key"], "phc_test_key");
    assert_eq!(body["event"], "user signed up");
    assert_eq!(body["properties"]["distinct_id"], "user-1");
    assert_eq!(body["properties"]["plan"], "pro");
    assert!(body.get("timestamp").is_none());
}

#[tokio::test]
async fn timestamp_reaches_the_wire_normalized() {
    let server = MockPostHog::start(CaptureReply::default()).await.unwrap();

    let mut params = item("user signed up", "user-1");
    params.additional_fields.timestamp = Some("2024-03-05T10:15:00+02:00".to_string());
    let ctx = ExecutionContext::new(credentials(&server), vec![params]);

    execute(&ctx).await.unwrap();

    let bodies = server.received_bodies().await;
    assert_eq!(bodies[0]["timestamp"], "2024-03-05T08:15:00.000Z");
}

#[tokio::test]
async fn two_items_produce_ordered_output() {
    let server = MockPostHog::start(CaptureReply::EchoEvent).await.unwrap();

    let ctx = ExecutionContext::new(
        credentials(&server),
        vec![item("first", "user-1"), item("second", "user-2")],
    );

    let output = execute(&ctx).await.unwrap();
    assert_eq!(
        output,
        vec![
            json!({ "status": 1, "event": "first" }),
            json!({ "status": 1, "event": "second" }),
        ]
    );
}

#[tokio::test]
async fn array_responses_are_flattened() {
    let reply = CaptureReply::ok(json!([{ "id": "x" }, { "id": "y" }]));
    let server = MockPostHog::start(reply).await.unwrap();

    let ctx = ExecutionContext::new(credentials(&server), vec![item("batchy", "user-1")]);

    let output = execute(&ctx).await.unwrap();
    assert_eq!(output, vec![json!({ "id": "x" }), json!({ "id": "y" })]);
}

#[tokio::test]
async fn structured_failures_become_api_errors() {
    let reply = CaptureReply::error(402, json!({ "error": "quota exceeded" }));
    let server = MockPostHog::start(reply).await.unwrap();

    let ctx = ExecutionContext::new(credentials(&server), vec![item("pay", "user-1")]);

    let err = execute(&ctx).await.unwrap_err();
    assert!(matches!(err, Error::Api { status: 402, .. }));
    assert_eq!(err.to_string(), "PosHog error response [402]: quota exceeded");
}

#[tokio::test]
async fn unstructured_failures_propagate_as_transport_errors() {
    let reply = CaptureReply::error(500, json!({ "message": "boom" }));
    let server = MockPostHog::start(reply).await.unwrap();

    let ctx = ExecutionContext::new(credentials(&server), vec![item("oops", "user-1")]);

    let err = execute(&ctx).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}

#[tokio::test]
async fn first_failure_aborts_remaining_items() {
    let reply = CaptureReply::error(402, json!({ "error": "quota exceeded" }));
    let server = MockPostHog::start(reply).await.unwrap();

    let ctx = ExecutionContext::new(
        credentials(&server),
        vec![item("first", "user-1"), item("second", "user-2")],
    );

    execute(&ctx).await.unwrap_err();

    // Only the first item was attempted.
    let bodies = server.received_bodies().await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["event"], "first");
}
