//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to all per-aggregate repositories
//! - `DomainResult` — standard result type for domain operations

use super::audit::AuditLog;
use super::rate::RateRepository;
use super::region::RegionRepository;
use super::service::ServiceRepository;
use super::service_type::ServiceTypeRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let region = repos.regions().find_by_name("eu_west").await?;
///     let history = repos.rates().history_for_service(service.id).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn regions(&self) -> &dyn RegionRepository;
    fn service_types(&self) -> &dyn ServiceTypeRepository;
    fn services(&self) -> &dyn ServiceRepository;
    fn rates(&self) -> &dyn RateRepository;
    fn audit(&self) -> &dyn AuditLog;
}
