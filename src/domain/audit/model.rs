//! Audit trail entry

use chrono::{DateTime, Utc};

/// One record of a mutating operation. Append-only; the core never reads
/// these back.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    pub id: i32,
    /// Username of the acting caller
    pub actor: String,
    /// Kind of entity affected ("region", "service", "rate")
    pub entity_type: String,
    pub entity_id: String,
    /// What happened ("created")
    pub action: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Data for appending an audit entry.
#[derive(Debug, Clone)]
pub struct NewAuditEntry {
    pub actor: String,
    pub entity_type: String,
    pub entity_id: String,
    pub action: String,
    pub description: String,
}

impl NewAuditEntry {
    pub fn created(
        actor: &str,
        entity_type: &str,
        entity_id: impl ToString,
        description: impl Into<String>,
    ) -> Self {
        Self {
            actor: actor.to_string(),
            entity_type: entity_type.to_string(),
            entity_id: entity_id.to_string(),
            action: "created".to_string(),
            description: description.into(),
        }
    }
}
