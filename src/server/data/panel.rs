//! Panel data repository for database operations.
//!
//! This module provides the `PanelRepository` for persisting provisioning
//! outcomes. A panel row is written exactly once per provisioning run; there
//! is no update or delete lifecycle.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::server::model::panel::{InsertPanelParam, Panel};

/// Repository providing database operations for provisioned panels.
pub struct PanelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PanelRepository<'a> {
    /// Creates a new PanelRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PanelRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a panel row recording a provisioning outcome.
    ///
    /// The row is created active with a fresh id and the current timestamp.
    /// A `None` remote server id records server creation as pending.
    ///
    /// # Arguments
    /// - `param` - Panel insert parameters including remote ids
    ///
    /// # Returns
    /// - `Ok(Panel)` - The created panel
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: InsertPanelParam) -> Result<Panel, DbErr> {
        let entity = entity::panel::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(param.user_id),
            host_id: ActiveValue::Set(param.host_id),
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password),
            login_url: ActiveValue::Set(param.login_url),
            ram: ActiveValue::Set(param.ram),
            cpu: ActiveValue::Set(param.cpu),
            disk: ActiveValue::Set(param.disk),
            remote_user_id: ActiveValue::Set(param.remote_user_id),
            remote_server_id: ActiveValue::Set(param.remote_server_id),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Panel::from_entity(entity))
    }
}
