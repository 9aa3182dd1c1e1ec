//! Rate repository interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::model::Rate;
use crate::domain::service::Service;
use crate::domain::DomainResult;

#[async_trait]
pub trait RateRepository: Send + Sync {
    /// Full history for a service, in creation order (ascending id).
    async fn history_for_service(&self, service_id: i32) -> DomainResult<Vec<Rate>>;

    /// Append a new rate entry. Prior entries are never touched.
    async fn append(
        &self,
        service: &Service,
        value: Decimal,
        effective_from: DateTime<Utc>,
    ) -> DomainResult<Rate>;
}
