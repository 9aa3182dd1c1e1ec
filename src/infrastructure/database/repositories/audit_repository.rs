//! SeaORM implementation of the audit log

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use super::db_err;
use crate::domain::audit::{AuditEntry, AuditLog, NewAuditEntry};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::audit_entry;

fn entity_to_domain(m: audit_entry::Model) -> AuditEntry {
    AuditEntry {
        id: m.id,
        actor: m.actor,
        entity_type: m.entity_type,
        entity_id: m.entity_id,
        action: m.action,
        description: m.description,
        created_at: m.created_at,
    }
}

pub struct SeaOrmAuditLog {
    db: DatabaseConnection,
}

impl SeaOrmAuditLog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuditLog for SeaOrmAuditLog {
    async fn append(&self, entry: NewAuditEntry) -> DomainResult<AuditEntry> {
        let model = audit_entry::ActiveModel {
            actor: Set(entry.actor),
            entity_type: Set(entry.entity_type),
            entity_id: Set(entry.entity_id),
            action: Set(entry.action),
            description: Set(entry.description),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        Ok(entity_to_domain(result))
    }
}
