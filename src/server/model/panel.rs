//! Panel domain models, parameters, and provisioning outcomes.
//!
//! Provides the domain model for provisioned panels along with the tagged
//! result types the provisioning pipeline is built from: `RemoteUser` for the
//! user step and `ProvisionOutcome` for the overall run.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::panel::{CreatePanelDto, PanelDto, ProvisionResultDto};

/// A provisioned panel: local record of an account on a remote deployment.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub id: Uuid,
    /// Identity-service subject that owns the panel.
    pub user_id: Uuid,
    pub host_id: Uuid,
    pub username: String,
    pub email: String,
    pub password: String,
    pub login_url: String,
    pub ram: i64,
    pub cpu: i64,
    pub disk: i64,
    pub remote_user_id: i64,
    /// None while server creation on the remote deployment is pending.
    pub remote_server_id: Option<i64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Panel {
    /// Converts an entity model to a panel domain model at the repository boundary.
    pub fn from_entity(entity: entity::panel::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            host_id: entity.host_id,
            username: entity.username,
            email: entity.email,
            password: entity.password,
            login_url: entity.login_url,
            ram: entity.ram,
            cpu: entity.cpu,
            disk: entity.disk,
            remote_user_id: entity.remote_user_id,
            remote_server_id: entity.remote_server_id,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }

    /// Converts the panel domain model to a DTO for API responses.
    pub fn into_dto(self) -> PanelDto {
        PanelDto {
            id: self.id,
            host_id: self.host_id,
            username: self.username,
            email: self.email,
            password: self.password,
            login_url: self.login_url,
            ram: self.ram,
            cpu: self.cpu,
            disk: self.disk,
            remote_user_id: self.remote_user_id,
            remote_server_id: self.remote_server_id,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

/// Parameters for a provisioning run.
///
/// Combines the authenticated caller's identity with the requested account
/// details and resource sizing.
#[derive(Debug, Clone)]
pub struct CreatePanelParam {
    /// Identity-service subject of the caller.
    pub user_id: Uuid,
    /// Host to provision on.
    pub host_id: Uuid,
    pub username: String,
    pub email: String,
    pub password: String,
    /// Memory limit in MB.
    pub ram: i64,
    /// CPU limit in percent.
    pub cpu: i64,
    /// Disk limit in MB.
    pub disk: i64,
}

impl CreatePanelParam {
    /// Builds provisioning parameters from the request DTO and the
    /// authenticated caller's subject id.
    pub fn from_dto(user_id: Uuid, dto: CreatePanelDto) -> Self {
        Self {
            user_id,
            host_id: dto.server_id,
            username: dto.username,
            email: dto.email,
            password: dto.password,
            ram: dto.ram,
            cpu: dto.cpu,
            disk: dto.disk,
        }
    }
}

/// Parameters for persisting a panel row after remote provisioning.
#[derive(Debug, Clone)]
pub struct InsertPanelParam {
    pub user_id: Uuid,
    pub host_id: Uuid,
    pub username: String,
    pub email: String,
    pub password: String,
    pub login_url: String,
    pub ram: i64,
    pub cpu: i64,
    pub disk: i64,
    pub remote_user_id: i64,
    /// None records server creation as pending.
    pub remote_server_id: Option<i64>,
}

/// Result of the remote user step.
///
/// The provisioning pipeline treats both variants identically downstream; the
/// distinction exists so tests and logs can tell a fresh account from a
/// recovered one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteUser {
    /// Freshly created on the remote deployment.
    Created(i64),
    /// Pre-existing account discovered via the email lookup after a conflict.
    Existing(i64),
}

impl RemoteUser {
    /// Remote user id regardless of how it was obtained.
    pub fn id(self) -> i64 {
        match self {
            Self::Created(id) | Self::Existing(id) => id,
        }
    }
}

/// Overall outcome of a provisioning run.
///
/// Partial success is a first-class variant: a panel whose remote user exists
/// but whose server creation failed is `ServerPending`, never an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ProvisionOutcome {
    /// User and server both exist on the remote deployment.
    Complete { panel: Panel },
    /// User exists remotely; server creation failed and is left for
    /// out-of-band completion. The panel row carries a null remote server id.
    ServerPending { panel: Panel },
}

impl ProvisionOutcome {
    /// Converts the outcome to the composed API result DTO.
    ///
    /// The status message differs between the two variants so callers can
    /// surface the pending state without inspecting ids.
    pub fn into_dto(self) -> ProvisionResultDto {
        match self {
            Self::Complete { panel } => ProvisionResultDto {
                success: true,
                remote_user_id: panel.remote_user_id,
                remote_server_id: panel.remote_server_id,
                message: "Panel created successfully.".to_string(),
                panel: panel.into_dto(),
            },
            Self::ServerPending { panel } => ProvisionResultDto {
                success: true,
                remote_user_id: panel.remote_user_id,
                remote_server_id: None,
                message: "Panel user created. Server creation pending.".to_string(),
                panel: panel.into_dto(),
            },
        }
    }
}
