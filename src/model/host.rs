use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Public view of a host available for provisioning.
///
/// Deliberately excludes the host's domain and API keys; those stay
/// server-side.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct HostDto {
    pub id: Uuid,
    pub name: String,
    pub location_id: i64,
}
