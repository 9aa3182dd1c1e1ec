//! Audit entry entity - append-only operation log

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One recorded mutation. Written after the primary change commits;
/// never updated or deleted by the service.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "audit_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Username of the acting caller
    pub actor: String,

    /// Affected entity kind ("region", "service", "rate")
    pub entity_type: String,

    pub entity_id: String,

    pub action: String,

    pub description: String,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
