//! `SeaORM` migrations for the base schema owned by the host application.

pub use sea_orm_migration::prelude::*;

mod m20210601_000001_create_press_settings;

/// Migration entrypoint used by `sea_orm_migration::MigratorTrait`.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20210601_000001_create_press_settings::Migration)]
    }
}
