use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Host::Table)
                    .if_not_exists()
                    .col(pk_uuid(Host::Id))
                    .col(string(Host::Name))
                    .col(string(Host::Domain))
                    .col(string(Host::PltaKey))
                    .col(string(Host::PltcKey))
                    .col(big_integer(Host::EggId))
                    .col(big_integer(Host::LocationId))
                    .col(timestamp_with_time_zone(Host::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Host::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Host {
    Table,
    Id,
    Name,
    Domain,
    PltaKey,
    PltcKey,
    EggId,
    LocationId,
    CreatedAt,
}
