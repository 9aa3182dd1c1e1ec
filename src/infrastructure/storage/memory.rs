//! In-memory repository implementations for development and testing

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_decimal::Decimal;

use crate::domain::audit::{AuditEntry, AuditLog, NewAuditEntry};
use crate::domain::rate::{Rate, RateRepository};
use crate::domain::region::{NewRegion, Region, RegionRepository};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::service::{Service, ServiceRepository};
use crate::domain::service_type::{NewServiceType, ServiceType, ServiceTypeRepository};
use crate::domain::{DomainError, DomainResult};

/// All repositories over process-local maps. Single struct so one instance
/// satisfies `RepositoryProvider` the same way the SeaORM provider does.
#[derive(Default)]
pub struct InMemoryRepositories {
    regions: DashMap<i32, Region>,
    service_types: DashMap<i32, ServiceType>,
    services: DashMap<i32, Service>,
    rates: DashMap<i32, Rate>,
    audit_entries: DashMap<i32, AuditEntry>,
    region_counter: AtomicI32,
    service_type_counter: AtomicI32,
    service_counter: AtomicI32,
    rate_counter: AtomicI32,
    audit_counter: AtomicI32,
}

impl InMemoryRepositories {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(counter: &AtomicI32) -> i32 {
        counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Entries recorded so far, in append order.
    pub fn audit_entries(&self) -> Vec<AuditEntry> {
        let mut entries: Vec<AuditEntry> =
            self.audit_entries.iter().map(|e| e.value().clone()).collect();
        entries.sort_by_key(|e| e.id);
        entries
    }
}

#[async_trait]
impl RegionRepository for InMemoryRepositories {
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Region>> {
        Ok(self
            .regions
            .iter()
            .find(|r| r.value().name == name)
            .map(|r| r.value().clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Region>> {
        let mut regions: Vec<Region> = self.regions.iter().map(|r| r.value().clone()).collect();
        regions.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(regions)
    }

    async fn create(&self, new: NewRegion) -> DomainResult<Region> {
        if RegionRepository::find_by_name(self, &new.name).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "Region with name {} already exists",
                new.name
            )));
        }
        let id = Self::next(&self.region_counter);
        let region = Region {
            id,
            name: new.name,
            description: new.description,
            created_at: Utc::now(),
        };
        self.regions.insert(id, region.clone());
        Ok(region)
    }

    async fn update_description(&self, name: &str, description: String) -> DomainResult<Region> {
        let id = self
            .regions
            .iter()
            .find(|r| r.value().name == name)
            .map(|r| *r.key());
        let Some(mut region) = id.and_then(|id| self.regions.get_mut(&id)) else {
            return Err(DomainError::NotFound {
                entity: "Region",
                field: "name",
                value: name.to_string(),
            });
        };
        region.description = description;
        Ok(region.clone())
    }
}

#[async_trait]
impl ServiceTypeRepository for InMemoryRepositories {
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<ServiceType>> {
        Ok(self
            .service_types
            .iter()
            .find(|t| t.value().name == name)
            .map(|t| t.value().clone()))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ServiceType>> {
        Ok(self.service_types.get(&id).map(|t| t.value().clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<ServiceType>> {
        let mut types: Vec<ServiceType> =
            self.service_types.iter().map(|t| t.value().clone()).collect();
        types.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(types)
    }

    async fn create(&self, new: NewServiceType) -> DomainResult<ServiceType> {
        let taken = self
            .service_types
            .iter()
            .any(|t| t.value().name == new.name || t.value().display_name == new.display_name);
        if taken {
            return Err(DomainError::Conflict(format!(
                "Service type with name {} or display name {} already exists",
                new.name, new.display_name
            )));
        }
        let id = Self::next(&self.service_type_counter);
        let service_type = ServiceType {
            id,
            name: new.name,
            display_name: new.display_name,
            description: new.description,
            created_at: Utc::now(),
        };
        self.service_types.insert(id, service_type.clone());
        Ok(service_type)
    }

    async fn update(
        &self,
        name: &str,
        display_name: Option<String>,
        description: Option<String>,
    ) -> DomainResult<ServiceType> {
        let id = self
            .service_types
            .iter()
            .find(|t| t.value().name == name)
            .map(|t| *t.key());
        let Some(mut service_type) = id.and_then(|id| self.service_types.get_mut(&id)) else {
            return Err(DomainError::NotFound {
                entity: "ServiceType",
                field: "name",
                value: name.to_string(),
            });
        };
        if let Some(display_name) = display_name {
            service_type.display_name = display_name;
        }
        if let Some(description) = description {
            service_type.description = description;
        }
        Ok(service_type.clone())
    }
}

#[async_trait]
impl ServiceRepository for InMemoryRepositories {
    async fn find_for_region(&self, region_id: i32) -> DomainResult<Vec<Service>> {
        let mut services: Vec<Service> = self
            .services
            .iter()
            .filter(|s| s.value().region_id == region_id)
            .map(|s| s.value().clone())
            .collect();
        services.sort_by_key(|s| s.id);
        Ok(services)
    }

    async fn find_by_region_and_type(
        &self,
        region_id: i32,
        service_type_id: i32,
    ) -> DomainResult<Option<Service>> {
        Ok(self
            .services
            .iter()
            .find(|s| {
                s.value().region_id == region_id && s.value().service_type_id == service_type_id
            })
            .map(|s| s.value().clone()))
    }

    async fn create_with_initial_rate(
        &self,
        region: &Region,
        service_type: &ServiceType,
        start_rate: Decimal,
        effective_from: DateTime<Utc>,
    ) -> DomainResult<(Service, Rate)> {
        if self
            .find_by_region_and_type(region.id, service_type.id)
            .await?
            .is_some()
        {
            return Err(DomainError::Conflict(format!(
                "Service of type {} already exists at {}",
                service_type.name, region.name
            )));
        }

        let now = Utc::now();
        let service = Service {
            id: Self::next(&self.service_counter),
            region_id: region.id,
            service_type_id: service_type.id,
            created_at: now,
        };
        let rate = Rate {
            id: Self::next(&self.rate_counter),
            value: start_rate,
            effective_from,
            created_at: now,
            service_id: service.id,
            service_type_id: service_type.id,
            region_id: region.id,
        };
        self.services.insert(service.id, service.clone());
        self.rates.insert(rate.id, rate.clone());
        Ok((service, rate))
    }
}

#[async_trait]
impl RateRepository for InMemoryRepositories {
    async fn history_for_service(&self, service_id: i32) -> DomainResult<Vec<Rate>> {
        let mut rates: Vec<Rate> = self
            .rates
            .iter()
            .filter(|r| r.value().service_id == service_id)
            .map(|r| r.value().clone())
            .collect();
        rates.sort_by_key(|r| r.id);
        Ok(rates)
    }

    async fn append(
        &self,
        service: &Service,
        value: Decimal,
        effective_from: DateTime<Utc>,
    ) -> DomainResult<Rate> {
        let rate = Rate {
            id: Self::next(&self.rate_counter),
            value,
            effective_from,
            created_at: Utc::now(),
            service_id: service.id,
            service_type_id: service.service_type_id,
            region_id: service.region_id,
        };
        self.rates.insert(rate.id, rate.clone());
        Ok(rate)
    }
}

#[async_trait]
impl AuditLog for InMemoryRepositories {
    async fn append(&self, entry: NewAuditEntry) -> DomainResult<AuditEntry> {
        let audit = AuditEntry {
            id: Self::next(&self.audit_counter),
            actor: entry.actor,
            entity_type: entry.entity_type,
            entity_id: entry.entity_id,
            action: entry.action,
            description: entry.description,
            created_at: Utc::now(),
        };
        self.audit_entries.insert(audit.id, audit.clone());
        Ok(audit)
    }
}

impl RepositoryProvider for InMemoryRepositories {
    fn regions(&self) -> &dyn RegionRepository {
        self
    }

    fn service_types(&self) -> &dyn ServiceTypeRepository {
        self
    }

    fn services(&self) -> &dyn ServiceRepository {
        self
    }

    fn rates(&self) -> &dyn RateRepository {
        self
    }

    fn audit(&self) -> &dyn AuditLog {
        self
    }
}
