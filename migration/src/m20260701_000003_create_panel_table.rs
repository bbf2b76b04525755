use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260701_000001_create_host_table::Host;

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Panel::Table)
                    .if_not_exists()
                    .col(pk_uuid(Panel::Id))
                    .col(uuid(Panel::UserId))
                    .col(uuid(Panel::HostId))
                    .col(string(Panel::Username))
                    .col(string(Panel::Email))
                    .col(string(Panel::Password))
                    .col(string(Panel::LoginUrl))
                    .col(big_integer(Panel::Ram))
                    .col(big_integer(Panel::Cpu))
                    .col(big_integer(Panel::Disk))
                    .col(big_integer(Panel::RemoteUserId))
                    .col(big_integer_null(Panel::RemoteServerId))
                    .col(boolean(Panel::IsActive).default(true))
                    .col(timestamp_with_time_zone(Panel::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_panel_host_id")
                            .from(Panel::Table, Panel::HostId)
                            .to(Host::Table, Host::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Panel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Panel {
    Table,
    Id,
    UserId,
    HostId,
    Username,
    Email,
    Password,
    LoginUrl,
    Ram,
    Cpu,
    Disk,
    RemoteUserId,
    RemoteServerId,
    IsActive,
    CreatedAt,
}
