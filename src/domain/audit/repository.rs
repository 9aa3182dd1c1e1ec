//! Audit log interface

use async_trait::async_trait;

use super::model::{AuditEntry, NewAuditEntry};
use crate::domain::DomainResult;

/// Fire-and-forget sink: callers log append failures and move on; a failed
/// audit write never rolls back the mutation it describes.
#[async_trait]
pub trait AuditLog: Send + Sync {
    async fn append(&self, entry: NewAuditEntry) -> DomainResult<AuditEntry>;
}
