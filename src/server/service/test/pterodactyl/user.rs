use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::host_for;
use crate::server::{
    error::provision::ProvisionError,
    model::panel::RemoteUser,
    service::pterodactyl::{user::CreateUserResult, PterodactylClient},
};

/// Tests that user creation sends the expected payload and captures the id.
///
/// Expected: Ok(Created) with the remote id from the response
#[tokio::test]
async fn create_user_captures_remote_id() {
    let remote = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/application/users"))
        .and(header("Authorization", "Bearer ptla_key"))
        .and(body_partial_json(json!({
            "email": "player@example.com",
            "username": "player",
            "first_name": "player",
            "last_name": "User",
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "object": "user", "attributes": { "id": 42 } })),
        )
        .mount(&remote)
        .await;

    let http_client = reqwest::Client::new();
    let host = host_for(&remote.uri());
    let client = PterodactylClient::new(&http_client, &host);

    let result = client
        .create_user("player", "player@example.com", "hunter2")
        .await
        .unwrap();

    assert!(matches!(result, CreateUserResult::Created(42)));
}

/// Tests that a 422 answer is reported as a conflict, not an error.
///
/// Expected: Ok(Conflict)
#[tokio::test]
async fn create_user_maps_422_to_conflict() {
    let remote = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/application/users"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({
                "errors": [{ "detail": "The email has already been taken." }]
            })),
        )
        .mount(&remote)
        .await;

    let http_client = reqwest::Client::new();
    let host = host_for(&remote.uri());
    let client = PterodactylClient::new(&http_client, &host);

    let result = client
        .create_user("player", "player@example.com", "hunter2")
        .await
        .unwrap();

    assert!(matches!(result, CreateUserResult::Conflict));
}

/// Tests that any other failure status passes through status and body.
///
/// Expected: Err(Upstream) carrying the original status code
#[tokio::test]
async fn create_user_passes_through_other_failures() {
    let remote = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/application/users"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&remote)
        .await;

    let http_client = reqwest::Client::new();
    let host = host_for(&remote.uri());
    let client = PterodactylClient::new(&http_client, &host);

    let result = client
        .create_user("player", "player@example.com", "hunter2")
        .await;

    match result {
        Err(ProvisionError::Upstream { status, body }) => {
            assert_eq!(status, 502);
            assert_eq!(body, "bad gateway");
        }
        other => panic!("Expected upstream error, got {:?}", other),
    }
}

/// Tests the email lookup when an account exists.
///
/// Expected: Ok(Some(id)) from the first entry in the list
#[tokio::test]
async fn find_user_by_email_returns_first_match() {
    let remote = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/application/users"))
        .and(query_param("filter[email]", "player@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [
                { "object": "user", "attributes": { "id": 77 } },
                { "object": "user", "attributes": { "id": 78 } }
            ]
        })))
        .mount(&remote)
        .await;

    let http_client = reqwest::Client::new();
    let host = host_for(&remote.uri());
    let client = PterodactylClient::new(&http_client, &host);

    let found = client.find_user_by_email("player@example.com").await.unwrap();

    assert_eq!(found, Some(77));
}

/// Tests the email lookup when no account matches.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_user_by_email_returns_none_for_no_match() {
    let remote = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/application/users"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "object": "list", "data": [] })),
        )
        .mount(&remote)
        .await;

    let http_client = reqwest::Client::new();
    let host = host_for(&remote.uri());
    let client = PterodactylClient::new(&http_client, &host);

    let found = client.find_user_by_email("player@example.com").await.unwrap();

    assert_eq!(found, None);
}

/// Tests that a failing lookup call is its own error, distinct from both a
/// conflict and an upstream pass-through.
///
/// Expected: Err(AccountLookupFailed)
#[tokio::test]
async fn find_user_by_email_failure_maps_to_lookup_error() {
    let remote = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/application/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&remote)
        .await;

    let http_client = reqwest::Client::new();
    let host = host_for(&remote.uri());
    let client = PterodactylClient::new(&http_client, &host);

    let result = client.find_user_by_email("player@example.com").await;

    assert!(matches!(result, Err(ProvisionError::AccountLookupFailed)));
}

/// Tests conflict recovery: a 422 followed by a successful lookup reuses the
/// discovered account instead of failing.
///
/// Expected: Ok(RemoteUser::Existing) with the discovered id
#[tokio::test]
async fn resolve_user_recovers_conflict_via_lookup() {
    let remote = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/application/users"))
        .respond_with(ResponseTemplate::new(422))
        .mount(&remote)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/application/users"))
        .and(query_param("filter[email]", "player@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [{ "object": "user", "attributes": { "id": 77 } }]
        })))
        .mount(&remote)
        .await;

    let http_client = reqwest::Client::new();
    let host = host_for(&remote.uri());
    let client = PterodactylClient::new(&http_client, &host);

    let user = client
        .resolve_user("player", "player@example.com", "hunter2")
        .await
        .unwrap();

    assert_eq!(user, RemoteUser::Existing(77));
}

/// Tests that an unrecoverable conflict surfaces as AccountInUse.
///
/// Expected: Err(AccountInUse)
#[tokio::test]
async fn resolve_user_reports_unrecoverable_conflict() {
    let remote = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/application/users"))
        .respond_with(ResponseTemplate::new(422))
        .mount(&remote)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/application/users"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "object": "list", "data": [] })),
        )
        .mount(&remote)
        .await;

    let http_client = reqwest::Client::new();
    let host = host_for(&remote.uri());
    let client = PterodactylClient::new(&http_client, &host);

    let result = client
        .resolve_user("player", "player@example.com", "hunter2")
        .await;

    assert!(matches!(result, Err(ProvisionError::AccountInUse)));
}
