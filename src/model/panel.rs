use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Request body for provisioning a new hosting panel.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreatePanelDto {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Id of the host to provision on.
    #[serde(rename = "serverId")]
    pub server_id: Uuid,
    /// Memory limit in MB.
    pub ram: i64,
    /// CPU limit in percent.
    pub cpu: i64,
    /// Disk limit in MB.
    pub disk: i64,
}

/// A provisioned panel as returned to the owning user.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PanelDto {
    pub id: Uuid,
    pub host_id: Uuid,
    pub username: String,
    pub email: String,
    pub password: String,
    /// URL of the control panel the credentials belong to.
    pub login_url: String,
    pub ram: i64,
    pub cpu: i64,
    pub disk: i64,
    pub remote_user_id: i64,
    /// None while server creation on the remote deployment is pending.
    pub remote_server_id: Option<i64>,
    pub is_active: bool,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

/// Composed result of a provisioning call.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ProvisionResultDto {
    pub success: bool,
    pub panel: PanelDto,
    pub remote_user_id: i64,
    pub remote_server_id: Option<i64>,
    /// Human-readable status; differs when server creation is still pending.
    pub message: String,
}
