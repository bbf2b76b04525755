//! Profile data repository for database operations.

use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ExprTrait, QueryFilter,
};
use uuid::Uuid;

/// Repository providing database operations for user profiles.
pub struct ProfileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileRepository<'a> {
    /// Creates a new ProfileRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ProfileRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Atomically increments the panel counter on a user's profile.
    ///
    /// # Arguments
    /// - `user_id` - Identity subject whose profile to update
    ///
    /// # Returns
    /// - `Ok(())` - Counter incremented (or no matching profile row found)
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn increment_panel_count(&self, user_id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Profile::update_many()
            .filter(entity::profile::Column::UserId.eq(user_id))
            .col_expr(
                entity::profile::Column::PanelCount,
                Expr::col(entity::profile::Column::PanelCount).add(1),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
