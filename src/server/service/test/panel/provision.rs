use super::*;

use sea_orm::EntityTrait;
use wiremock::matchers::query_param;

/// Tests the fully successful pipeline.
///
/// Verifies that a fresh remote user and server are created, the panel row is
/// written with both remote ids, the profile counter is incremented, and the
/// result message reflects completion.
///
/// Expected: Ok(Complete) with persisted panel
#[tokio::test]
async fn provisions_complete_panel() {
    let test = TestBuilder::new().with_panel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let remote = MockServer::start().await;
    mount_user_create(&remote, 42).await;
    mount_server_create(&remote, 55).await;

    let host = factory::host::create_host_with_domain(db, remote.uri())
        .await
        .unwrap();
    let user_id = uuid::Uuid::new_v4();
    factory::create_profile(db, user_id).await.unwrap();

    let http_client = reqwest::Client::new();
    let service = PanelProvisionService::new(db, &http_client);
    let outcome = service.provision(param_for(user_id, host.id)).await.unwrap();

    let ProvisionOutcome::Complete { panel } = outcome else {
        panic!("Expected complete outcome");
    };
    assert_eq!(panel.remote_user_id, 42);
    assert_eq!(panel.remote_server_id, Some(55));
    assert_eq!(panel.user_id, user_id);
    assert_eq!(panel.login_url, remote.uri());
    assert!(panel.is_active);

    // Panel row persisted
    let db_panel = entity::prelude::Panel::find_by_id(panel.id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(db_panel.remote_server_id, Some(55));

    // Profile counter incremented
    let profile = entity::prelude::Profile::find_by_id(user_id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(profile.panel_count, 1);
}

/// Tests conflict recovery: the remote account already exists and is
/// discoverable by email.
///
/// The pipeline must complete using the discovered id, not a new one.
///
/// Expected: Ok(Complete) with the discovered remote user id
#[tokio::test]
async fn reuses_existing_account_after_conflict() {
    let test = TestBuilder::new().with_panel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

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
    mount_server_create(&remote, 55).await;

    let host = factory::host::create_host_with_domain(db, remote.uri())
        .await
        .unwrap();
    let user_id = uuid::Uuid::new_v4();

    let http_client = reqwest::Client::new();
    let service = PanelProvisionService::new(db, &http_client);
    let outcome = service.provision(param_for(user_id, host.id)).await.unwrap();

    let ProvisionOutcome::Complete { panel } = outcome else {
        panic!("Expected complete outcome");
    };
    assert_eq!(panel.remote_user_id, 77);
}

/// Tests an unrecoverable conflict: collision with no account discoverable by
/// email.
///
/// The pipeline must abort without creating a server or writing a panel row.
///
/// Expected: Err(AccountInUse), no server creation, no panel row
#[tokio::test]
async fn unrecoverable_conflict_writes_nothing() {
    let test = TestBuilder::new().with_panel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

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

    let host = factory::host::create_host_with_domain(db, remote.uri())
        .await
        .unwrap();

    let http_client = reqwest::Client::new();
    let service = PanelProvisionService::new(db, &http_client);
    let result = service
        .provision(param_for(uuid::Uuid::new_v4(), host.id))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ProvisionErr(ProvisionError::AccountInUse))
    ));
    assert_eq!(requests_to(&remote, "/api/application/servers").await, 0);

    let panels = entity::prelude::Panel::find().all(db).await.unwrap();
    assert!(panels.is_empty());
}

/// Tests that a failing fallback lookup is a server-side error, not a
/// conflict.
///
/// Expected: Err(AccountLookupFailed)
#[tokio::test]
async fn lookup_failure_is_a_server_error() {
    let test = TestBuilder::new().with_panel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let remote = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/application/users"))
        .respond_with(ResponseTemplate::new(422))
        .mount(&remote)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/application/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&remote)
        .await;

    let host = factory::host::create_host_with_domain(db, remote.uri())
        .await
        .unwrap();

    let http_client = reqwest::Client::new();
    let service = PanelProvisionService::new(db, &http_client);
    let result = service
        .provision(param_for(uuid::Uuid::new_v4(), host.id))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ProvisionErr(ProvisionError::AccountLookupFailed))
    ));
}

/// Tests that non-conflict upstream failures keep their status code.
///
/// Expected: Err(Upstream) with the remote API's status
#[tokio::test]
async fn upstream_failure_passes_status_through() {
    let test = TestBuilder::new().with_panel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let remote = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/application/users"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&remote)
        .await;

    let host = factory::host::create_host_with_domain(db, remote.uri())
        .await
        .unwrap();

    let http_client = reqwest::Client::new();
    let service = PanelProvisionService::new(db, &http_client);
    let result = service
        .provision(param_for(uuid::Uuid::new_v4(), host.id))
        .await;

    match result {
        Err(AppError::ProvisionErr(ProvisionError::Upstream { status, .. })) => {
            assert_eq!(status, 503)
        }
        other => panic!("Expected upstream error, got {:?}", other),
    }
}

/// Tests partial success: the user exists remotely but server creation fails.
///
/// The panel row must still be written, with a null remote server id, and the
/// outcome must be the pending variant with its distinct message.
///
/// Expected: Ok(ServerPending) with persisted panel
#[tokio::test]
async fn server_failure_yields_pending_panel() {
    let test = TestBuilder::new().with_panel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let remote = MockServer::start().await;
    mount_user_create(&remote, 42).await;
    Mock::given(method("POST"))
        .and(path("/api/application/servers"))
        .respond_with(ResponseTemplate::new(400).set_body_string("no free allocations"))
        .mount(&remote)
        .await;

    let host = factory::host::create_host_with_domain(db, remote.uri())
        .await
        .unwrap();

    let http_client = reqwest::Client::new();
    let service = PanelProvisionService::new(db, &http_client);
    let outcome = service
        .provision(param_for(uuid::Uuid::new_v4(), host.id))
        .await
        .unwrap();

    let ProvisionOutcome::ServerPending { panel } = outcome else {
        panic!("Expected pending outcome");
    };
    assert_eq!(panel.remote_user_id, 42);
    assert_eq!(panel.remote_server_id, None);
    assert!(panel.is_active);

    let db_panel = entity::prelude::Panel::find_by_id(panel.id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(db_panel.remote_server_id, None);
}

/// Tests that an unknown host id aborts before any remote call.
///
/// Expected: Err(NotFound), zero outbound requests
#[tokio::test]
async fn unknown_host_makes_no_remote_calls() {
    let test = TestBuilder::new().with_panel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let remote = MockServer::start().await;

    let http_client = reqwest::Client::new();
    let service = PanelProvisionService::new(db, &http_client);
    let result = service
        .provision(param_for(uuid::Uuid::new_v4(), uuid::Uuid::new_v4()))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(remote.received_requests().await.unwrap().is_empty());
}

/// Tests that a failing panel insert is fatal even though remote resources
/// were created.
///
/// The panel table is missing from the schema, so the insert fails after both
/// remote calls succeeded. No compensation is attempted.
///
/// Expected: Err(DbErr) after both remote calls were made
#[tokio::test]
async fn panel_insert_failure_is_fatal() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Host)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let remote = MockServer::start().await;
    mount_user_create(&remote, 42).await;
    mount_server_create(&remote, 55).await;

    let host = factory::host::create_host_with_domain(db, remote.uri())
        .await
        .unwrap();

    let http_client = reqwest::Client::new();
    let service = PanelProvisionService::new(db, &http_client);
    let result = service
        .provision(param_for(uuid::Uuid::new_v4(), host.id))
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(requests_to(&remote, "/api/application/users").await, 1);
    assert_eq!(requests_to(&remote, "/api/application/servers").await, 1);
}

/// Tests that a failing profile counter update never changes the outcome.
///
/// The profile table is missing from the schema, so the increment fails; the
/// run must still report success.
///
/// Expected: Ok(Complete) with persisted panel
#[tokio::test]
async fn counter_failure_keeps_success() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Host)
        .with_table(entity::prelude::Panel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let remote = MockServer::start().await;
    mount_user_create(&remote, 42).await;
    mount_server_create(&remote, 55).await;

    let host = factory::host::create_host_with_domain(db, remote.uri())
        .await
        .unwrap();

    let http_client = reqwest::Client::new();
    let service = PanelProvisionService::new(db, &http_client);
    let outcome = service
        .provision(param_for(uuid::Uuid::new_v4(), host.id))
        .await
        .unwrap();

    assert!(matches!(outcome, ProvisionOutcome::Complete { .. }));
}

/// Tests that the two outcome variants carry distinct status messages.
///
/// Expected: complete and pending DTOs differ in message and success stays true
#[tokio::test]
async fn outcome_messages_distinguish_pending_state() {
    let test = TestBuilder::new().with_panel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let remote = MockServer::start().await;
    mount_user_create(&remote, 42).await;
    Mock::given(method("POST"))
        .and(path("/api/application/servers"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&remote)
        .await;

    let host = factory::host::create_host_with_domain(db, remote.uri())
        .await
        .unwrap();

    let http_client = reqwest::Client::new();
    let service = PanelProvisionService::new(db, &http_client);
    let outcome = service
        .provision(param_for(uuid::Uuid::new_v4(), host.id))
        .await
        .unwrap();

    let dto = outcome.into_dto();
    assert!(dto.success);
    assert_eq!(dto.remote_server_id, None);
    assert!(dto.message.contains("pending"));
}
