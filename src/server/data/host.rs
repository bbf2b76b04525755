//! Host data repository for database operations.
//!
//! This module provides the `HostRepository` for reading host records from the
//! database. Hosts are administered out of band; the application only ever
//! reads them, so the repository exposes lookup operations only.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use uuid::Uuid;

use crate::server::model::host::Host;

/// Repository providing database operations for hosts.
///
/// This struct holds a reference to the database connection and provides
/// methods for querying host records.
pub struct HostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HostRepository<'a> {
    /// Creates a new HostRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `HostRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a host by its id.
    ///
    /// # Arguments
    /// - `id` - Host id
    ///
    /// # Returns
    /// - `Ok(Some(Host))` - Host found with full data, API keys included
    /// - `Ok(None)` - No host with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Host>, DbErr> {
        let entity = entity::prelude::Host::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Host::from_entity))
    }

    /// Gets all hosts, ordered alphabetically by name.
    ///
    /// Used by the storefront to offer a host selection.
    ///
    /// # Returns
    /// - `Ok(Vec<Host>)` - All hosts (empty if none are configured)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Host>, DbErr> {
        let entities = entity::prelude::Host::find()
            .order_by_asc(entity::host::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Host::from_entity).collect())
    }
}
