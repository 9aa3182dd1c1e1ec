//! SeaORM implementation of ServiceTypeRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

use super::db_err;
use crate::domain::service_type::{NewServiceType, ServiceType, ServiceTypeRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::service_type;

fn entity_to_domain(m: service_type::Model) -> ServiceType {
    ServiceType {
        id: m.id,
        name: m.name,
        display_name: m.display_name,
        description: m.description,
        created_at: m.created_at,
    }
}

pub struct SeaOrmServiceTypeRepository {
    db: DatabaseConnection,
}

impl SeaOrmServiceTypeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ServiceTypeRepository for SeaOrmServiceTypeRepository {
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<ServiceType>> {
        let model = service_type::Entity::find()
            .filter(service_type::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ServiceType>> {
        let model = service_type::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<ServiceType>> {
        let models = service_type::Entity::find()
            .order_by_asc(service_type::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn create(&self, new: NewServiceType) -> DomainResult<ServiceType> {
        let taken = service_type::Entity::find()
            .filter(
                service_type::Column::Name
                    .eq(&new.name)
                    .or(service_type::Column::DisplayName.eq(&new.display_name)),
            )
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if taken.is_some() {
            return Err(DomainError::Conflict(format!(
                "Service type with name {} or display name {} already exists",
                new.name, new.display_name
            )));
        }

        let model = service_type::ActiveModel {
            name: Set(new.name),
            display_name: Set(new.display_name),
            description: Set(new.description),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Service type registered: {} ({})", result.name, result.id);
        Ok(entity_to_domain(result))
    }

    async fn update(
        &self,
        name: &str,
        display_name: Option<String>,
        description: Option<String>,
    ) -> DomainResult<ServiceType> {
        let existing = service_type::Entity::find()
            .filter(service_type::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "ServiceType",
                field: "name",
                value: name.to_string(),
            });
        };

        let mut model: service_type::ActiveModel = existing.into();
        if let Some(display_name) = display_name {
            model.display_name = Set(display_name);
        }
        if let Some(description) = description {
            model.description = Set(description);
        }
        let result = model.update(&self.db).await.map_err(db_err)?;
        Ok(entity_to_domain(result))
    }
}
