//! Region repository interface

use async_trait::async_trait;

use super::model::{NewRegion, Region};
use crate::domain::DomainResult;

#[async_trait]
pub trait RegionRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Region>>;
    async fn find_all(&self) -> DomainResult<Vec<Region>>;
    /// Fails with `Conflict` when the name is already taken.
    async fn create(&self, region: NewRegion) -> DomainResult<Region>;
    async fn update_description(&self, name: &str, description: String) -> DomainResult<Region>;
}
