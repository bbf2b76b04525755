use dioxus_logger::tracing;
use serde::Deserialize;
use serde_json::json;

use crate::server::{error::provision::ProvisionError, service::pterodactyl::PterodactylClient};

/// Docker image new servers boot from.
const DOCKER_IMAGE: &str = "ghcr.io/pterodactyl/yolks:nodejs_18";

/// Startup command configured on new servers.
const STARTUP_CMD: &str = "npm start";

/// Single server object in API responses: `{"object": "server", "attributes": {...}}`.
#[derive(Debug, Deserialize)]
struct ServerObject {
    attributes: ServerAttributes,
}

#[derive(Debug, Deserialize)]
struct ServerAttributes {
    id: i64,
}

/// Requested resource sizing for a new server.
#[derive(Debug, Clone, Copy)]
pub struct ResourceLimits {
    /// Memory limit in MB.
    pub ram: i64,
    /// CPU limit in percent.
    pub cpu: i64,
    /// Disk limit in MB.
    pub disk: i64,
}

impl PterodactylClient<'_> {
    /// Creates a game server owned by the given remote user.
    ///
    /// The server is deployed to the host's configured location from its egg
    /// template, with the requested resource limits and a single default
    /// allocation.
    ///
    /// # Arguments
    /// - `name` - Display name for the new server
    /// - `remote_user_id` - Owner of the server on the remote deployment
    /// - `egg_id` - Egg template to create the server from
    /// - `location_id` - Location to deploy to
    /// - `limits` - Requested resource sizing
    ///
    /// # Returns
    /// - `Ok(i64)` - Remote id of the created server
    /// - `Err(ProvisionError::Upstream)` - Failure status from the API
    /// - `Err(ProvisionError::Transport)` - Transport-level failure
    pub async fn create_server(
        &self,
        name: &str,
        remote_user_id: i64,
        egg_id: i64,
        location_id: i64,
        limits: ResourceLimits,
    ) -> Result<i64, ProvisionError> {
        let response = self
            .http_client
            .post(format!("{}/api/application/servers", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", "application/json")
            .json(&json!({
                "name": name,
                "user": remote_user_id,
                "egg": egg_id,
                "docker_image": DOCKER_IMAGE,
                "startup": STARTUP_CMD,
                "environment": {
                    "STARTUP_CMD": STARTUP_CMD,
                },
                "limits": {
                    "memory": limits.ram,
                    "swap": 0,
                    "disk": limits.disk,
                    "io": 500,
                    "cpu": limits.cpu,
                },
                "feature_limits": {
                    "databases": 1,
                    "backups": 1,
                    "allocations": 1,
                },
                "allocation": {
                    "default": 1,
                },
                "deploy": {
                    "locations": [location_id],
                    "dedicated_ip": false,
                    "port_range": [],
                },
            }))
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Server creation failed ({}): {}", status, body);
            return Err(ProvisionError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let server = response.json::<ServerObject>().await?;
        tracing::info!("Server created with remote id {}", server.attributes.id);

        Ok(server.attributes.id)
    }
}
