//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod audit_repository;
pub mod rate_repository;
pub mod region_repository;
pub mod repository_provider;
pub mod service_repository;
pub mod service_type_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use crate::domain::DomainError;

pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}
