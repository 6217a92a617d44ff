pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_world_tables;
mod m20240101_000002_create_users_table;
mod m20240101_000003_create_session_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    // Keep bookkeeping apart from any migration table already in the world database
    fn migration_table_name() -> sea_orm::DynIden {
        Alias::new("worldpop_migrations").into_iden()
    }

    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_world_tables::Migration),
            Box::new(m20240101_000002_create_users_table::Migration),
            Box::new(m20240101_000003_create_session_table::Migration),
        ]
    }
}
