//! Service type catalog entry

use chrono::{DateTime, Utc};

/// A catalog entry describing a kind of service (e.g. "storage", "compute").
/// Reference data: regions bind services to these, rates denormalize them.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceType {
    pub id: i32,
    /// Unique name, alphanumeric or '_' only
    pub name: String,
    /// Unique human-facing name
    pub display_name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Data for registering a service type.
#[derive(Debug, Clone)]
pub struct NewServiceType {
    pub name: String,
    pub display_name: String,
    pub description: String,
}
