//! Create services table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_regions::Regions;
use super::m20240101_000002_create_service_types::ServiceTypes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Services::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Services::RegionId).integer().not_null())
                    .col(
                        ColumnDef::new(Services::ServiceTypeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Services::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_services_region")
                            .from(Services::Table, Services::RegionId)
                            .to(Regions::Table, Regions::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_services_service_type")
                            .from(Services::Table, Services::ServiceTypeId)
                            .to(ServiceTypes::Table, ServiceTypes::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // One service per (region, type) - backstop for the duplicate check
        manager
            .create_index(
                Index::create()
                    .name("idx_services_region_type")
                    .table(Services::Table)
                    .col(Services::RegionId)
                    .col(Services::ServiceTypeId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Services {
    Table,
    Id,
    RegionId,
    ServiceTypeId,
    CreatedAt,
}
