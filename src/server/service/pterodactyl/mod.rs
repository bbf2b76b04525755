//! Client for the Pterodactyl application API.
//!
//! One client is built per provisioning run from the host record being
//! provisioned on. All calls are authorized with the host's application API
//! key. The API wraps every resource in an `attributes` envelope; the
//! deserialization types in the submodules mirror only the fields this system
//! reads.

pub mod server;
pub mod user;

use crate::server::model::host::Host;

/// Per-host client for the Pterodactyl application API.
pub struct PterodactylClient<'a> {
    http_client: &'a reqwest::Client,
    base_url: String,
    api_key: String,
}

impl<'a> PterodactylClient<'a> {
    /// Creates a client for the given host.
    ///
    /// A trailing slash on the host's domain is stripped so request paths can
    /// be appended directly.
    pub fn new(http_client: &'a reqwest::Client, host: &Host) -> Self {
        Self {
            http_client,
            base_url: host.domain.trim_end_matches('/').to_string(),
            api_key: host.plta_key.clone(),
        }
    }
}
