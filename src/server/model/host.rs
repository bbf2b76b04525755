//! Host domain model.
//!
//! A host is one remote Pterodactyl deployment that panels can be provisioned
//! on, together with the API credentials this system uses to drive it.

use uuid::Uuid;

use crate::model::host::HostDto;

/// One remote Pterodactyl deployment and its API credentials.
///
/// Carries only the fields the provisioning pipeline reads; the stored record
/// also holds a client-scope API key this system does not use.
#[derive(Debug, Clone, PartialEq)]
pub struct Host {
    pub id: Uuid,
    /// Display name shown in the storefront.
    pub name: String,
    /// Base URL of the deployment, e.g. `https://panel.example.com`.
    pub domain: String,
    /// Application API key (admin scope).
    pub plta_key: String,
    /// Egg template new servers are created from.
    pub egg_id: i64,
    /// Location servers are deployed to.
    pub location_id: i64,
}

impl Host {
    /// Converts an entity model to a host domain model at the repository boundary.
    pub fn from_entity(entity: entity::host::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            domain: entity.domain,
            plta_key: entity.plta_key,
            egg_id: entity.egg_id,
            location_id: entity.location_id,
        }
    }

    /// Converts the host domain model to its public DTO.
    ///
    /// The DTO intentionally omits the domain and both API keys.
    pub fn into_dto(self) -> HostDto {
        HostDto {
            id: self.id,
            name: self.name,
            location_id: self.location_id,
        }
    }
}
