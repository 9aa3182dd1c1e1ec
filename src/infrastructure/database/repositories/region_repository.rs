//! SeaORM implementation of RegionRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

use super::db_err;
use crate::domain::region::{NewRegion, Region, RegionRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::region;

fn entity_to_domain(m: region::Model) -> Region {
    Region {
        id: m.id,
        name: m.name,
        description: m.description,
        created_at: m.created_at,
    }
}

pub struct SeaOrmRegionRepository {
    db: DatabaseConnection,
}

impl SeaOrmRegionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RegionRepository for SeaOrmRegionRepository {
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Region>> {
        let model = region::Entity::find()
            .filter(region::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Region>> {
        let models = region::Entity::find()
            .order_by_asc(region::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn create(&self, new: NewRegion) -> DomainResult<Region> {
        if self.find_by_name(&new.name).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "Region with name {} already exists",
                new.name
            )));
        }

        let model = region::ActiveModel {
            name: Set(new.name),
            description: Set(new.description),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Region created: {} ({})", result.name, result.id);
        Ok(entity_to_domain(result))
    }

    async fn update_description(&self, name: &str, description: String) -> DomainResult<Region> {
        let existing = region::Entity::find()
            .filter(region::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Region",
                field: "name",
                value: name.to_string(),
            });
        };

        let mut model: region::ActiveModel = existing.into();
        model.description = Set(description);
        let result = model.update(&self.db).await.map_err(db_err)?;
        Ok(entity_to_domain(result))
    }
}
