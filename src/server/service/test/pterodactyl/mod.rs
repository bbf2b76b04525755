use uuid::Uuid;

use crate::server::model::host::Host;

mod user;

/// Builds a host whose domain points at a mock server.
///
/// The domain carries a trailing slash to exercise the client's URL trimming.
fn host_for(uri: &str) -> Host {
    Host {
        id: Uuid::new_v4(),
        name: "Test Host".to_string(),
        domain: format!("{}/", uri),
        plta_key: "ptla_key".to_string(),
        egg_id: 3,
        location_id: 9,
    }
}
