//! Panel provisioning pipeline.
//!
//! The pipeline is a linear sequence of fallible steps, each with its own
//! recovery policy:
//!
//! 1. Host lookup — abort with 404 on a miss, before any remote call.
//! 2. Remote user resolve — create, recovering 422 collisions via the email
//!    lookup (`PterodactylClient::resolve_user`); abort on failure.
//! 3. Remote server create — non-fatal; failure downgrades the run to the
//!    `ServerPending` outcome.
//! 4. Panel persist — fatal on failure; no compensation of already-created
//!    remote resources.
//! 5. Profile counter increment — best-effort; failure is logged only.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{host::HostRepository, panel::PanelRepository, profile::ProfileRepository},
    error::AppError,
    model::panel::{CreatePanelParam, InsertPanelParam, ProvisionOutcome},
    service::pterodactyl::{server::ResourceLimits, PterodactylClient},
};

pub struct PanelProvisionService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
}

impl<'a> PanelProvisionService<'a> {
    pub fn new(db: &'a DatabaseConnection, http_client: &'a reqwest::Client) -> Self {
        Self { db, http_client }
    }

    /// Provisions a hosting panel for the given parameters.
    ///
    /// Runs the full pipeline against the host named in `param`. Partial
    /// success (user exists remotely, server creation failed) is returned as
    /// `ProvisionOutcome::ServerPending`, not an error.
    ///
    /// # Arguments
    /// - `param` - Caller identity, account details, and resource sizing
    ///
    /// # Returns
    /// - `Ok(ProvisionOutcome)` - Panel row written; complete or server-pending
    /// - `Err(AppError::NotFound)` - Host id does not resolve to a host
    /// - `Err(AppError::ProvisionErr)` - Remote user step failed
    /// - `Err(AppError::DbErr)` - Panel row could not be written
    pub async fn provision(&self, param: CreatePanelParam) -> Result<ProvisionOutcome, AppError> {
        let host = HostRepository::new(self.db)
            .find_by_id(param.host_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Server not found".to_string()))?;

        tracing::info!("Provisioning panel on host {} for {}", host.name, param.username);

        let client = PterodactylClient::new(self.http_client, &host);

        let remote_user = client
            .resolve_user(&param.username, &param.email, &param.password)
            .await?;

        let server_name = format!("{}-server", param.username);
        let limits = ResourceLimits {
            ram: param.ram,
            cpu: param.cpu,
            disk: param.disk,
        };

        let remote_server_id = match client
            .create_server(
                &server_name,
                remote_user.id(),
                host.egg_id,
                host.location_id,
                limits,
            )
            .await
        {
            Ok(id) => Some(id),
            Err(err) => {
                // Degraded mode: the account exists remotely, the server can
                // be finished out of band. Record the panel without a server.
                tracing::warn!("Server creation failed, continuing without it: {}", err);
                None
            }
        };

        let panel = PanelRepository::new(self.db)
            .create(InsertPanelParam {
                user_id: param.user_id,
                host_id: host.id,
                username: param.username,
                email: param.email,
                password: param.password,
                login_url: host.domain.trim_end_matches('/').to_string(),
                ram: param.ram,
                cpu: param.cpu,
                disk: param.disk,
                remote_user_id: remote_user.id(),
                remote_server_id,
            })
            .await?;

        if let Err(err) = ProfileRepository::new(self.db)
            .increment_panel_count(param.user_id)
            .await
        {
            tracing::error!("Failed to update profile panel counter: {}", err);
        }

        Ok(match remote_server_id {
            Some(_) => ProvisionOutcome::Complete { panel },
            None => ProvisionOutcome::ServerPending { panel },
        })
    }
}
