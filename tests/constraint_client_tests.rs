// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Constraint client tests against a mock backend.

use planning_client::models::{ConstraintSet, UnavailabilityInput, UnavailabilityKind};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

#[tokio::test]
async fn test_list_constraints() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(common::endpoint("/contraintes")))
        .and(query_param("userId", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "minSleep": 7,
            "unavailable": [
                {"id": 11, "day": 1, "start": "09:00", "end": "12:00", "type": "MEETING"},
                {"id": 12, "day": 4, "start": "18:00", "end": "20:00", "type": "SPORT"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let set = client.constraints(2).list().await;

    assert_eq!(set.min_sleep, 7.0);
    assert_eq!(set.unavailable.len(), 2);
    assert_eq!(set.unavailable[0].id, 11);
    assert_eq!(set.unavailable[1].day, 4);
    assert_eq!(
        set.unavailable[1].kind,
        UnavailabilityKind::Other("SPORT".to_string())
    );
}

#[tokio::test]
async fn test_list_server_error_gives_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(common::endpoint("/contraintes")))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let set = client.constraints(2).list().await;

    assert_eq!(set, ConstraintSet::default());
    assert_eq!(set.min_sleep, 8.0);
    assert!(set.unavailable.is_empty());
}

#[tokio::test]
async fn test_list_unreachable_backend_gives_defaults() {
    let client = common::unreachable_client();
    assert_eq!(client.constraints(2).list().await, ConstraintSet::default());
}

#[tokio::test]
async fn test_set_min_sleep() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(common::endpoint("/contraintes")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    client.constraints(2).set_min_sleep(7.5).await.unwrap();

    let requests = common::received(&server).await;
    assert_eq!(
        common::form_pairs(&requests[0]),
        vec![
            ("action".to_string(), "setSleep".to_string()),
            ("userId".to_string(), "2".to_string()),
            ("minSleep".to_string(), "7.5".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_add_unavailability_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(common::endpoint("/contraintes")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok", "id": 3})))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let reply = client
        .constraints(2)
        .add_unavailability(&UnavailabilityInput::default())
        .await
        .unwrap();
    assert_eq!(reply["id"], 3);

    let requests = common::received(&server).await;
    let request = &requests[0];
    assert_eq!(common::form_field(request, "action").as_deref(), Some("addUnavailable"));
    assert_eq!(common::form_field(request, "day").as_deref(), Some("0"));
    assert_eq!(common::form_field(request, "start").as_deref(), Some("00:00"));
    assert_eq!(common::form_field(request, "end").as_deref(), Some("23:59"));
    assert_eq!(common::form_field(request, "type").as_deref(), Some("MEETING"));
}

#[tokio::test]
async fn test_delete_unavailability() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(common::endpoint("/contraintes")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    client.constraints(2).delete_unavailability(12).await.unwrap();

    let requests = common::received(&server).await;
    assert_eq!(
        common::form_field(&requests[0], "action").as_deref(),
        Some("delUnavailable")
    );
    assert_eq!(common::form_field(&requests[0], "id").as_deref(), Some("12"));
}

#[tokio::test]
async fn test_writes_fail_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(common::endpoint("/contraintes")))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let api = client.constraints(2);

    assert_eq!(api.set_min_sleep(8.0).await.unwrap_err().status(), Some(500));
    assert!(api
        .add_unavailability(&UnavailabilityInput {
            day: Some(2),
            ..Default::default()
        })
        .await
        .is_err());
    assert!(api.delete_unavailability(1).await.is_err());
}
