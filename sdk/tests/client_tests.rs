// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0
//! SDK tests against a mock directory service.

use patron_sdk::{ApiError, ClientPayload, PatronClient};

fn payload(id: &str) -> ClientPayload {
    ClientPayload {
        id: id.to_string(),
        first_name: "John".to_string(),
        last_name: "Smith".to_string(),
        email: "john.smith@example.com".to_string(),
        phone_number: "+18202820232".to_string(),
    }
}

#[tokio::test]
async fn list_clients_unwraps_the_envelope() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/clients")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "success": true,
                "message": "Success",
                "data": [{
                    "id": "a",
                    "firstName": "John",
                    "lastName": "Smith",
                    "email": "john.smith@example.com",
                    "phoneNumber": "+18202820232"
                }]
            }"#,
        )
        .create_async()
        .await;

    let client = PatronClient::new(server.url());
    let clients = client.list_clients().await.unwrap();

    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].first_name, "John");
    assert_eq!(clients[0].id.as_str(), "a");
    mock.assert_async().await;
}

#[tokio::test]
async fn search_hits_the_name_route() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search/john")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true, "message": "Success", "data": []}"#)
        .create_async()
        .await;

    let client = PatronClient::new(server.url());
    let clients = client.search_clients("john").await.unwrap();

    assert!(clients.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn create_acknowledges_a_success_envelope() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/clients")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true, "message": "Success", "data": null}"#)
        .create_async()
        .await;

    let client = PatronClient::new(server.url());
    client.create_client(&payload("a")).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn failure_envelope_becomes_a_typed_api_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("PUT", "/clients/a")
        .with_status(502)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "success": false,
                "message": "notification service failed: service unavailable: simulated transient fault",
                "data": null
            }"#,
        )
        .create_async()
        .await;

    let client = PatronClient::new(server.url());
    let err = client.update_client("a", &payload("a")).await.unwrap_err();

    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 502);
            assert!(message.contains("notification"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn health_deserializes_the_liveness_report() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/health")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": "healthy", "uptime_seconds": 42}"#)
        .create_async()
        .await;

    let client = PatronClient::new(server.url());
    let health = client.health().await.unwrap();

    assert_eq!(health.status, "healthy");
    assert_eq!(health.uptime_seconds, 42);
}
