//! Service repository interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::model::Service;
use crate::domain::rate::Rate;
use crate::domain::region::Region;
use crate::domain::service_type::ServiceType;
use crate::domain::DomainResult;

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Services offered at a region, in creation order.
    async fn find_for_region(&self, region_id: i32) -> DomainResult<Vec<Service>>;

    async fn find_by_region_and_type(
        &self,
        region_id: i32,
        service_type_id: i32,
    ) -> DomainResult<Option<Service>>;

    /// Creates the service together with its initial rate as one atomic unit.
    /// Fails with `Conflict` when the region already offers this type; on any
    /// failure neither row exists.
    async fn create_with_initial_rate(
        &self,
        region: &Region,
        service_type: &ServiceType,
        start_rate: Decimal,
        effective_from: DateTime<Utc>,
    ) -> DomainResult<(Service, Rate)>;
}
