//! Host factory for creating test host entities.
//!
//! This module provides factory methods for creating host entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test hosts with customizable fields.
///
/// Provides a builder pattern for creating host entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::host::HostFactory;
///
/// let host = HostFactory::new(&db)
///     .name("EU Frankfurt")
///     .domain("https://panel.example.com")
///     .egg_id(5)
///     .build()
///     .await?;
/// ```
pub struct HostFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    domain: String,
    plta_key: String,
    pltc_key: String,
    egg_id: i64,
    location_id: i64,
}

impl<'a> HostFactory<'a> {
    /// Creates a new HostFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Host {id}"` where id is auto-incremented
    /// - domain: `"https://panel-{id}.example.com"`
    /// - plta_key: `"ptla_test_{id}"`
    /// - pltc_key: `"ptlc_test_{id}"`
    /// - egg_id: `1`
    /// - location_id: `1`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `HostFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Host {}", id),
            domain: format!("https://panel-{}.example.com", id),
            plta_key: format!("ptla_test_{}", id),
            pltc_key: format!("ptlc_test_{}", id),
            egg_id: 1,
            location_id: 1,
        }
    }

    /// Sets the display name for the host.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the base URL of the remote deployment.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Sets the application API key.
    pub fn plta_key(mut self, plta_key: impl Into<String>) -> Self {
        self.plta_key = plta_key.into();
        self
    }

    /// Sets the client API key.
    pub fn pltc_key(mut self, pltc_key: impl Into<String>) -> Self {
        self.pltc_key = pltc_key.into();
        self
    }

    /// Sets the egg template id.
    pub fn egg_id(mut self, egg_id: i64) -> Self {
        self.egg_id = egg_id;
        self
    }

    /// Sets the deployment location id.
    pub fn location_id(mut self, location_id: i64) -> Self {
        self.location_id = location_id;
        self
    }

    /// Builds and inserts the host entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::host::Model)` - Created host entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::host::Model, DbErr> {
        entity::host::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            domain: ActiveValue::Set(self.domain),
            plta_key: ActiveValue::Set(self.plta_key),
            pltc_key: ActiveValue::Set(self.pltc_key),
            egg_id: ActiveValue::Set(self.egg_id),
            location_id: ActiveValue::Set(self.location_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a host with default values.
///
/// Shorthand for `HostFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::host::Model)` - Created host entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_host(db: &DatabaseConnection) -> Result<entity::host::Model, DbErr> {
    HostFactory::new(db).build().await
}

/// Creates a host pointing at a specific domain.
///
/// Shorthand for `HostFactory::new(db).domain(domain).build().await`. Useful for
/// tests that need the host to point at a mock server.
///
/// # Arguments
/// - `db` - Database connection
/// - `domain` - Base URL of the remote deployment
///
/// # Returns
/// - `Ok(entity::host::Model)` - Created host entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_host_with_domain(
    db: &DatabaseConnection,
    domain: impl Into<String>,
) -> Result<entity::host::Model, DbErr> {
    HostFactory::new(db).domain(domain).build().await
}
