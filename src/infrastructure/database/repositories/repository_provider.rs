//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::audit::AuditLog;
use crate::domain::rate::RateRepository;
use crate::domain::region::RegionRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::service::ServiceRepository;
use crate::domain::service_type::ServiceTypeRepository;

use super::audit_repository::SeaOrmAuditLog;
use super::rate_repository::SeaOrmRateRepository;
use super::region_repository::SeaOrmRegionRepository;
use super::service_repository::SeaOrmServiceRepository;
use super::service_type_repository::SeaOrmServiceTypeRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let region = repos.regions().find_by_name("eu_west").await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    regions: SeaOrmRegionRepository,
    service_types: SeaOrmServiceTypeRepository,
    services: SeaOrmServiceRepository,
    rates: SeaOrmRateRepository,
    audit: SeaOrmAuditLog,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            regions: SeaOrmRegionRepository::new(db.clone()),
            service_types: SeaOrmServiceTypeRepository::new(db.clone()),
            services: SeaOrmServiceRepository::new(db.clone()),
            rates: SeaOrmRateRepository::new(db.clone()),
            audit: SeaOrmAuditLog::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn regions(&self) -> &dyn RegionRepository {
        &self.regions
    }

    fn service_types(&self) -> &dyn ServiceTypeRepository {
        &self.service_types
    }

    fn services(&self) -> &dyn ServiceRepository {
        &self.services
    }

    fn rates(&self) -> &dyn RateRepository {
        &self.rates
    }

    fn audit(&self) -> &dyn AuditLog {
        &self.audit
    }
}
