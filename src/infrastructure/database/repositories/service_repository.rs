//! SeaORM implementation of ServiceRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionError, TransactionTrait,
};
use tracing::info;

use super::db_err;
use super::rate_repository::rate_to_domain;
use crate::domain::rate::Rate;
use crate::domain::region::Region;
use crate::domain::service::{Service, ServiceRepository};
use crate::domain::service_type::ServiceType;
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{rate, service};

pub(crate) fn service_to_domain(m: service::Model) -> Service {
    Service {
        id: m.id,
        region_id: m.region_id,
        service_type_id: m.service_type_id,
        created_at: m.created_at,
    }
}

pub struct SeaOrmServiceRepository {
    db: DatabaseConnection,
}

impl SeaOrmServiceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ServiceRepository for SeaOrmServiceRepository {
    async fn find_for_region(&self, region_id: i32) -> DomainResult<Vec<Service>> {
        let models = service::Entity::find()
            .filter(service::Column::RegionId.eq(region_id))
            .order_by_asc(service::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(service_to_domain).collect())
    }

    async fn find_by_region_and_type(
        &self,
        region_id: i32,
        service_type_id: i32,
    ) -> DomainResult<Option<Service>> {
        let model = service::Entity::find()
            .filter(service::Column::RegionId.eq(region_id))
            .filter(service::Column::ServiceTypeId.eq(service_type_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(service_to_domain))
    }

    async fn create_with_initial_rate(
        &self,
        region: &Region,
        service_type: &ServiceType,
        start_rate: Decimal,
        effective_from: DateTime<Utc>,
    ) -> DomainResult<(Service, Rate)> {
        let region_id = region.id;
        let region_name = region.name.clone();
        let type_id = service_type.id;
        let type_name = service_type.name.clone();

        // Duplicate check and both inserts share one transaction; the unique
        // (region_id, service_type_id) index is the backstop under races.
        let (svc, initial) = self
            .db
            .transaction::<_, (service::Model, rate::Model), DomainError>(move |txn| {
                Box::pin(async move {
                    let existing = service::Entity::find()
                        .filter(service::Column::RegionId.eq(region_id))
                        .filter(service::Column::ServiceTypeId.eq(type_id))
                        .one(txn)
                        .await
                        .map_err(db_err)?;
                    if existing.is_some() {
                        return Err(DomainError::Conflict(format!(
                            "Service of type {} already exists at {}",
                            type_name, region_name
                        )));
                    }

                    let now = Utc::now();
                    let svc = service::ActiveModel {
                        region_id: Set(region_id),
                        service_type_id: Set(type_id),
                        created_at: Set(now),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await
                    .map_err(db_err)?;

                    let initial = rate::ActiveModel {
                        rate: Set(start_rate),
                        effective_from: Set(effective_from),
                        created_at: Set(now),
                        service_id: Set(svc.id),
                        service_type_id: Set(type_id),
                        region_id: Set(region_id),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await
                    .map_err(db_err)?;

                    Ok((svc, initial))
                })
            })
            .await
            .map_err(|e| match e {
                TransactionError::Connection(e) => db_err(e),
                TransactionError::Transaction(e) => e,
            })?;

        info!(
            "Service created: {} @ {} ({}), initial rate {}",
            service_type.name, region.name, svc.id, initial.rate
        );
        Ok((service_to_domain(svc), rate_to_domain(initial)))
    }
}
