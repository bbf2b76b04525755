pub use sea_orm_migration::prelude::*;

mod m20260701_000001_create_host_table;
mod m20260701_000002_create_profile_table;
mod m20260701_000003_create_panel_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260701_000001_create_host_table::Migration),
            Box::new(m20260701_000002_create_profile_table::Migration),
            Box::new(m20260701_000003_create_panel_table::Migration),
        ]
    }
}
