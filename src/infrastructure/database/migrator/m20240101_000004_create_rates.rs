//! Create rates table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_regions::Regions;
use super::m20240101_000002_create_service_types::ServiceTypes;
use super::m20240101_000003_create_services::Services;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rates::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rates::Rate).decimal().not_null())
                    .col(
                        ColumnDef::new(Rates::EffectiveFrom)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Rates::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Rates::ServiceId).integer().not_null())
                    .col(ColumnDef::new(Rates::ServiceTypeId).integer().not_null())
                    .col(ColumnDef::new(Rates::RegionId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rates_service")
                            .from(Rates::Table, Rates::ServiceId)
                            .to(Services::Table, Services::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rates_service_type")
                            .from(Rates::Table, Rates::ServiceTypeId)
                            .to(ServiceTypes::Table, ServiceTypes::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rates_region")
                            .from(Rates::Table, Rates::RegionId)
                            .to(Regions::Table, Regions::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rates_service_effective")
                    .table(Rates::Table)
                    .col(Rates::ServiceId)
                    .col(Rates::EffectiveFrom)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rates::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Rates {
    Table,
    Id,
    Rate,
    EffectiveFrom,
    CreatedAt,
    ServiceId,
    ServiceTypeId,
    RegionId,
}
