//! Pricing use cases: service creation and rate management per region

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::warn;

use crate::domain::audit::NewAuditEntry;
use crate::domain::rate::{Rate, RateHistory};
use crate::domain::region::{NewRegion, Region};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::service::Service;
use crate::domain::service_type::ServiceType;
use crate::domain::{DomainError, DomainResult};
use crate::shared::validations::is_valid_identifier;

/// Application service over the pricing domain.
///
/// Carries every operation the API exposes: region creation (with initial
/// services), service creation, rate appends, and rate-history queries.
/// Mutating operations take the acting caller's username for the audit
/// trail.
pub struct PricingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl PricingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    // ── Lookups ────────────────────────────────────────────────

    pub async fn region_by_name(&self, name: &str) -> DomainResult<Region> {
        if !is_valid_identifier(name) {
            return Err(DomainError::Validation(format!(
                "Region name must contain only alphanumeric characters or '_': {}",
                name
            )));
        }
        self.repos
            .regions()
            .find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "Region",
                field: "name",
                value: name.to_string(),
            })
    }

    pub async fn service_type_by_name(&self, name: &str) -> DomainResult<ServiceType> {
        if !is_valid_identifier(name) {
            return Err(DomainError::Validation(format!(
                "Service type name must contain only alphanumeric characters or '_': {}",
                name
            )));
        }
        self.repos
            .service_types()
            .find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "ServiceType",
                field: "name",
                value: name.to_string(),
            })
    }

    /// The service of the given type at the given region.
    pub async fn find_service(
        &self,
        region_name: &str,
        type_name: &str,
    ) -> DomainResult<Service> {
        let region = self.region_by_name(region_name).await?;
        let service_type = self.service_type_by_name(type_name).await?;
        self.repos
            .services()
            .find_by_region_and_type(region.id, service_type.id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "Service",
                field: "service_type",
                value: format!("{} @ {}", type_name, region_name),
            })
    }

    // ── Mutations ──────────────────────────────────────────────

    /// Create a region, then give it one service per entry in
    /// `initial_rates` (service-type name to starting rate). Callers pass
    /// one entry per registered service type.
    pub async fn create_region(
        &self,
        actor: &str,
        new: NewRegion,
        initial_rates: Vec<(String, Decimal)>,
    ) -> DomainResult<Region> {
        if !is_valid_identifier(&new.name) {
            return Err(DomainError::Validation(format!(
                "Region name must contain only alphanumeric characters or '_': {}",
                new.name
            )));
        }

        let region = self.repos.regions().create(new).await?;
        self.record_audit(NewAuditEntry::created(
            actor,
            "region",
            region.id,
            format!("New region {}", region.name),
        ))
        .await;

        for (type_name, start_rate) in initial_rates {
            self.add_service(actor, &region.name, &type_name, start_rate)
                .await?;
        }
        Ok(region)
    }

    /// Add a service of the given type to a region, with its initial rate
    /// effective immediately. One service per type and region.
    pub async fn add_service(
        &self,
        actor: &str,
        region_name: &str,
        type_name: &str,
        start_rate: Decimal,
    ) -> DomainResult<Service> {
        if start_rate < Decimal::ZERO {
            return Err(DomainError::Validation(
                "start_rate must be a positive number or zero".to_string(),
            ));
        }

        let region = self.region_by_name(region_name).await?;
        let service_type = self.service_type_by_name(type_name).await?;

        let (service, initial) = self
            .repos
            .services()
            .create_with_initial_rate(&region, &service_type, start_rate, Utc::now())
            .await?;

        self.record_audit(NewAuditEntry::created(
            actor,
            "service",
            service.id,
            format!("New {} service at {}", service_type.name, region.name),
        ))
        .await;
        self.record_audit(NewAuditEntry::created(
            actor,
            "rate",
            initial.id,
            format!(
                "Initial rate {} for {} at {}",
                initial.value, service_type.name, region.name
            ),
        ))
        .await;

        Ok(service)
    }

    /// Append a rate to a service's history. Prior entries are untouched;
    /// the new entry wins only per the history's resolution rules.
    pub async fn set_rate(
        &self,
        actor: &str,
        region_name: &str,
        type_name: &str,
        new_rate: Decimal,
        effective_from: Option<DateTime<Utc>>,
    ) -> DomainResult<Rate> {
        if new_rate < Decimal::ZERO {
            return Err(DomainError::Validation(
                "new_rate must be a positive number or zero".to_string(),
            ));
        }

        let service = self.find_service(region_name, type_name).await?;
        let rate = self
            .repos
            .rates()
            .append(&service, new_rate, effective_from.unwrap_or_else(Utc::now))
            .await?;

        self.record_audit(NewAuditEntry::created(
            actor,
            "rate",
            rate.id,
            format!(
                "New rate {} for {} at {}, effective {}",
                rate.value, type_name, region_name, rate.effective_from
            ),
        ))
        .await;

        Ok(rate)
    }

    // ── Queries ────────────────────────────────────────────────

    /// Full rate history, in insertion order.
    pub async fn rate_history(
        &self,
        region_name: &str,
        type_name: &str,
    ) -> DomainResult<Vec<Rate>> {
        let service = self.find_service(region_name, type_name).await?;
        self.repos.rates().history_for_service(service.id).await
    }

    /// The rate in force at `as_of` (default: now). `None` when no rate has
    /// taken effect yet.
    pub async fn current_rate(
        &self,
        region_name: &str,
        type_name: &str,
        as_of: Option<DateTime<Utc>>,
    ) -> DomainResult<Option<Rate>> {
        let history = self.history(region_name, type_name).await?;
        Ok(history
            .current_as_of(as_of.unwrap_or_else(Utc::now))
            .cloned())
    }

    /// The next scheduled rate after now, degrading to the current rate when
    /// nothing is scheduled.
    pub async fn next_future_rate(
        &self,
        region_name: &str,
        type_name: &str,
    ) -> DomainResult<Option<Rate>> {
        let history = self.history(region_name, type_name).await?;
        Ok(history.next_after(Utc::now()).cloned())
    }

    async fn history(&self, region_name: &str, type_name: &str) -> DomainResult<RateHistory> {
        let service = self.find_service(region_name, type_name).await?;
        let entries = self.repos.rates().history_for_service(service.id).await?;
        Ok(RateHistory::new(entries))
    }

    /// Audit writes happen after the primary mutation committed; a failed
    /// write is logged, never propagated.
    async fn record_audit(&self, entry: NewAuditEntry) {
        if let Err(e) = self.repos.audit().append(entry).await {
            warn!("Failed to record audit entry: {}", e);
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::audit::{AuditEntry, AuditLog, NewAuditEntry};
    use crate::domain::rate::RateRepository;
    use crate::domain::region::RegionRepository;
    use crate::domain::service::ServiceRepository;
    use crate::domain::service_type::{NewServiceType, ServiceTypeRepository};
    use crate::infrastructure::storage::InMemoryRepositories;
    use async_trait::async_trait;
    use chrono::Duration;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    async fn seeded() -> (Arc<InMemoryRepositories>, PricingService) {
        let repos = Arc::new(InMemoryRepositories::new());
        ServiceTypeRepository::create(
            repos.as_ref(),
            NewServiceType {
                name: "things".to_string(),
                display_name: "Things".to_string(),
                description: "Generic things".to_string(),
            },
        )
        .await
        .unwrap();
        ServiceTypeRepository::create(
            repos.as_ref(),
            NewServiceType {
                name: "storage".to_string(),
                display_name: "Storage".to_string(),
                description: "Durable storage".to_string(),
            },
        )
        .await
        .unwrap();
        RegionRepository::create(
            repos.as_ref(),
            NewRegion {
                name: "place".to_string(),
                description: "A place".to_string(),
            },
        )
        .await
        .unwrap();

        let service = PricingService::new(Arc::clone(&repos) as Arc<dyn RepositoryProvider>);
        (repos, service)
    }

    #[tokio::test]
    async fn add_service_sets_initial_rate_as_current() {
        let (_repos, pricing) = seeded().await;
        pricing
            .add_service("admin", "place", "things", dec("0.5"))
            .await
            .unwrap();

        let current = pricing
            .current_rate("place", "things", None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(current.value, dec("0.5"));
    }

    #[tokio::test]
    async fn duplicate_service_type_is_a_conflict() {
        let (_repos, pricing) = seeded().await;
        pricing
            .add_service("admin", "place", "things", dec("0.5"))
            .await
            .unwrap();

        let err = pricing
            .add_service("admin", "place", "things", dec("0.5"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn negative_start_rate_is_rejected_without_side_effects() {
        let (repos, pricing) = seeded().await;
        let err = pricing
            .add_service("admin", "place", "things", dec("-1"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let region = repos.regions().find_by_name("place").await.unwrap().unwrap();
        assert!(repos
            .services()
            .find_for_region(region.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn negative_set_rate_creates_no_entry() {
        let (_repos, pricing) = seeded().await;
        pricing
            .add_service("admin", "place", "things", dec("0.5"))
            .await
            .unwrap();

        let err = pricing
            .set_rate("admin", "place", "things", dec("-1"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let history = pricing.rate_history("place", "things").await.unwrap();
        assert_eq!(history.len(), 1);
    }

    #[tokio::test]
    async fn current_and_future_resolve_across_scheduled_rates() {
        let (_repos, pricing) = seeded().await;
        pricing
            .add_service("admin", "place", "things", dec("0.1"))
            .await
            .unwrap();
        // captured after the initial rate so the scheduled entries below
        // strictly bracket it
        let now = Utc::now();
        pricing
            .set_rate("admin", "place", "things", dec("0.3"), Some(now - Duration::days(3)))
            .await
            .unwrap();
        pricing
            .set_rate("admin", "place", "things", dec("0.5"), Some(now))
            .await
            .unwrap();
        pricing
            .set_rate("admin", "place", "things", dec("0.6"), Some(now + Duration::days(3)))
            .await
            .unwrap();

        let current = pricing
            .current_rate("place", "things", None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(current.value, dec("0.5"));

        let next = pricing
            .next_future_rate("place", "things")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(next.value, dec("0.6"));
    }

    #[tokio::test]
    async fn current_rate_honours_explicit_as_of() {
        let (_repos, pricing) = seeded().await;
        let now = Utc::now();
        pricing
            .add_service("admin", "place", "things", dec("0.1"))
            .await
            .unwrap();
        pricing
            .set_rate("admin", "place", "things", dec("0.9"), Some(now + Duration::days(5)))
            .await
            .unwrap();

        // Nearest to a future date resolves the scheduled rate
        let later = pricing
            .current_rate("place", "things", Some(now + Duration::days(6)))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(later.value, dec("0.9"));
    }

    #[tokio::test]
    async fn history_round_trips_in_insertion_order() {
        let (_repos, pricing) = seeded().await;
        let now = Utc::now();
        pricing
            .add_service("admin", "place", "things", dec("0.5"))
            .await
            .unwrap();
        // Appended out of effective order on purpose
        pricing
            .set_rate("admin", "place", "things", dec("0.9"), Some(now + Duration::days(9)))
            .await
            .unwrap();
        pricing
            .set_rate("admin", "place", "things", dec("0.2"), Some(now - Duration::days(9)))
            .await
            .unwrap();

        let values: Vec<Decimal> = pricing
            .rate_history("place", "things")
            .await
            .unwrap()
            .iter()
            .map(|r| r.value)
            .collect();
        assert_eq!(values, vec![dec("0.5"), dec("0.9"), dec("0.2")]);
    }

    #[tokio::test]
    async fn unknown_region_and_type_are_not_found() {
        let (_repos, pricing) = seeded().await;
        assert!(matches!(
            pricing.find_service("nowhere", "things").await.unwrap_err(),
            DomainError::NotFound { entity: "Region", .. }
        ));
        assert!(matches!(
            pricing.find_service("place", "lodging").await.unwrap_err(),
            DomainError::NotFound { entity: "ServiceType", .. }
        ));
        // registered type, but not offered at this region
        assert!(matches!(
            pricing.find_service("place", "storage").await.unwrap_err(),
            DomainError::NotFound { entity: "Service", .. }
        ));
    }

    #[tokio::test]
    async fn malformed_type_name_is_a_validation_error() {
        let (_repos, pricing) = seeded().await;
        let err = pricing.find_service("place", "not a type").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn create_region_adds_one_service_per_entry() {
        let (repos, pricing) = seeded().await;
        let region = pricing
            .create_region(
                "admin",
                NewRegion {
                    name: "other_place".to_string(),
                    description: "Another place".to_string(),
                },
                vec![
                    ("things".to_string(), dec("0.5")),
                    ("storage".to_string(), dec("1.25")),
                ],
            )
            .await
            .unwrap();

        let services = repos.services().find_for_region(region.id).await.unwrap();
        assert_eq!(services.len(), 2);

        let storage = pricing
            .current_rate("other_place", "storage", None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(storage.value, dec("1.25"));
    }

    #[tokio::test]
    async fn mutations_carry_the_actor_into_the_audit_trail() {
        let (repos, pricing) = seeded().await;
        pricing
            .add_service("carol", "place", "things", dec("0.5"))
            .await
            .unwrap();
        pricing
            .set_rate("carol", "place", "things", dec("0.7"), None)
            .await
            .unwrap();

        let entries = repos.audit_entries();
        // service + initial rate + appended rate
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.actor == "carol"));
        assert_eq!(entries[0].entity_type, "service");
        assert_eq!(entries[1].entity_type, "rate");
        assert_eq!(entries[2].entity_type, "rate");
    }

    // Provider whose audit sink always fails; everything else delegates.
    struct BrokenAuditSink;

    #[async_trait]
    impl AuditLog for BrokenAuditSink {
        async fn append(&self, _entry: NewAuditEntry) -> DomainResult<AuditEntry> {
            Err(DomainError::Validation(
                "Database error: audit sink unavailable".to_string(),
            ))
        }
    }

    struct NoAuditProvider {
        inner: Arc<InMemoryRepositories>,
        broken: BrokenAuditSink,
    }

    impl RepositoryProvider for NoAuditProvider {
        fn regions(&self) -> &dyn RegionRepository {
            self.inner.regions()
        }
        fn service_types(&self) -> &dyn ServiceTypeRepository {
            self.inner.service_types()
        }
        fn services(&self) -> &dyn ServiceRepository {
            self.inner.services()
        }
        fn rates(&self) -> &dyn RateRepository {
            self.inner.rates()
        }
        fn audit(&self) -> &dyn AuditLog {
            &self.broken
        }
    }

    #[tokio::test]
    async fn audit_failure_does_not_fail_the_mutation() {
        let (repos, _) = seeded().await;
        let pricing = PricingService::new(Arc::new(NoAuditProvider {
            inner: Arc::clone(&repos),
            broken: BrokenAuditSink,
        }));

        pricing
            .add_service("admin", "place", "things", dec("0.5"))
            .await
            .unwrap();

        let current = pricing
            .current_rate("place", "things", None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(current.value, dec("0.5"));
        assert!(repos.audit_entries().is_empty());
    }
}
