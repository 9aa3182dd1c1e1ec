//! Service type entity - immutable reference data

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Catalog entry for a kind of service (e.g. "storage", "compute")
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Unique type name (alphanumeric or '_')
    #[sea_orm(unique)]
    pub name: String,

    /// Unique human-facing name
    #[sea_orm(unique)]
    pub display_name: String,

    pub description: String,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::service::Entity")]
    Services,
    #[sea_orm(has_many = "super::rate::Entity")]
    Rates,
}

impl Related<super::service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Services.def()
    }
}

impl Related<super::rate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
