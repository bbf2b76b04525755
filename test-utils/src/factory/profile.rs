//! Profile factory for creating test profile entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a profile for the given user with a zero panel count.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Identity subject that owns the profile
///
/// # Returns
/// - `Ok(entity::profile::Model)` - Created profile entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_profile(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<entity::profile::Model, DbErr> {
    create_profile_with_count(db, user_id, 0).await
}

/// Creates a profile for the given user with a specific panel count.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Identity subject that owns the profile
/// - `panel_count` - Initial counter value
///
/// # Returns
/// - `Ok(entity::profile::Model)` - Created profile entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_profile_with_count(
    db: &DatabaseConnection,
    user_id: Uuid,
    panel_count: i64,
) -> Result<entity::profile::Model, DbErr> {
    entity::profile::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        panel_count: ActiveValue::Set(panel_count),
    }
    .insert(db)
    .await
}
