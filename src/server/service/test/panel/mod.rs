use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::server::{
    error::{provision::ProvisionError, AppError},
    model::panel::{CreatePanelParam, ProvisionOutcome},
    service::panel::PanelProvisionService,
};
use test_utils::{builder::TestBuilder, factory};

mod provision;

/// Provisioning parameters for a fixed test user.
fn param_for(user_id: Uuid, host_id: Uuid) -> CreatePanelParam {
    CreatePanelParam {
        user_id,
        host_id,
        username: "player".to_string(),
        email: "player@example.com".to_string(),
        password: "hunter2".to_string(),
        ram: 2048,
        cpu: 100,
        disk: 10240,
    }
}

/// Mounts a successful user creation answer with the given remote id.
async fn mount_user_create(remote: &MockServer, id: i64) {
    Mock::given(method("POST"))
        .and(path("/api/application/users"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "object": "user", "attributes": { "id": id } })),
        )
        .mount(remote)
        .await;
}

/// Mounts a successful server creation answer with the given remote id.
async fn mount_server_create(remote: &MockServer, id: i64) {
    Mock::given(method("POST"))
        .and(path("/api/application/servers"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "object": "server", "attributes": { "id": id } })),
        )
        .mount(remote)
        .await;
}

/// Counts requests the mock server received for the given path.
async fn requests_to(remote: &MockServer, target: &str) -> usize {
    remote
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|request| request.url.path() == target)
        .count()
}
