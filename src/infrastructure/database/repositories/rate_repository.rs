//! SeaORM implementation of RateRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

use super::db_err;
use crate::domain::rate::{Rate, RateRepository};
use crate::domain::service::Service;
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::rate;

pub(crate) fn rate_to_domain(m: rate::Model) -> Rate {
    Rate {
        id: m.id,
        value: m.rate,
        effective_from: m.effective_from,
        created_at: m.created_at,
        service_id: m.service_id,
        service_type_id: m.service_type_id,
        region_id: m.region_id,
    }
}

pub struct SeaOrmRateRepository {
    db: DatabaseConnection,
}

impl SeaOrmRateRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RateRepository for SeaOrmRateRepository {
    async fn history_for_service(&self, service_id: i32) -> DomainResult<Vec<Rate>> {
        // Ascending id = creation order; RateHistory relies on it for the
        // last-created-wins tie-break.
        let models = rate::Entity::find()
            .filter(rate::Column::ServiceId.eq(service_id))
            .order_by_asc(rate::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(rate_to_domain).collect())
    }

    async fn append(
        &self,
        service: &Service,
        value: Decimal,
        effective_from: DateTime<Utc>,
    ) -> DomainResult<Rate> {
        let model = rate::ActiveModel {
            rate: Set(value),
            effective_from: Set(effective_from),
            created_at: Set(Utc::now()),
            service_id: Set(service.id),
            service_type_id: Set(service.service_type_id),
            region_id: Set(service.region_id),
            ..Default::default()
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!(
            "Rate appended for service {}: {} effective {}",
            service.id, result.rate, result.effective_from
        );
        Ok(rate_to_domain(result))
    }
}
