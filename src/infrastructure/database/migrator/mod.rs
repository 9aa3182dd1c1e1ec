//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_regions;
mod m20240101_000002_create_service_types;
mod m20240101_000003_create_services;
mod m20240101_000004_create_rates;
mod m20240101_000005_create_users;
mod m20240101_000006_create_audit_entries;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_regions::Migration),
            Box::new(m20240101_000002_create_service_types::Migration),
            Box::new(m20240101_000003_create_services::Migration),
            Box::new(m20240101_000004_create_rates::Migration),
            Box::new(m20240101_000005_create_users::Migration),
            Box::new(m20240101_000006_create_audit_entries::Migration),
        ]
    }
}
