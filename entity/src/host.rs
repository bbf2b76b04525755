//! Host entity describing one remote Pterodactyl deployment.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "host")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Display name shown in the storefront.
    pub name: String,
    /// Base URL of the Pterodactyl deployment, e.g. `https://panel.example.com`.
    pub domain: String,
    /// Application API key (admin scope).
    pub plta_key: String,
    /// Client API key.
    pub pltc_key: String,
    /// Egg template new servers are created from.
    pub egg_id: i64,
    /// Location servers are deployed to.
    pub location_id: i64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::panel::Entity")]
    Panel,
}

impl Related<super::panel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Panel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
