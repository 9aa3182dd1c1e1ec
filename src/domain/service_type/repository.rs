//! Service type repository interface

use async_trait::async_trait;

use super::model::{NewServiceType, ServiceType};
use crate::domain::DomainResult;

#[async_trait]
pub trait ServiceTypeRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<ServiceType>>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ServiceType>>;
    async fn find_all(&self) -> DomainResult<Vec<ServiceType>>;
    /// Fails with `Conflict` when the name or display name is already taken.
    async fn create(&self, service_type: NewServiceType) -> DomainResult<ServiceType>;
    /// Updates the mutable fields; the name itself is immutable.
    async fn update(
        &self,
        name: &str,
        display_name: Option<String>,
        description: Option<String>,
    ) -> DomainResult<ServiceType>;
}
