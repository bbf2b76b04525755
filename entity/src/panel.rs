//! Panel entity recording the outcome of one provisioning attempt.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "panel")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Identity-service subject that owns the panel.
    pub user_id: Uuid,
    pub host_id: Uuid,
    pub username: String,
    pub email: String,
    pub password: String,
    /// Login URL of the Pterodactyl deployment the account lives on.
    pub login_url: String,
    /// Memory limit in MB.
    pub ram: i64,
    /// CPU limit in percent.
    pub cpu: i64,
    /// Disk limit in MB.
    pub disk: i64,
    /// User id on the remote Pterodactyl deployment.
    pub remote_user_id: i64,
    /// Server id on the remote deployment; NULL while server creation is pending.
    pub remote_server_id: Option<i64>,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::host::Entity",
        from = "Column::HostId",
        to = "super::host::Column::Id"
    )]
    Host,
}

impl Related<super::host::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Host.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
