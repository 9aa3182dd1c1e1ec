//! Region domain entity

use chrono::{DateTime, Utc};

/// A geographic region offering a set of services at regional rates.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: i32,
    /// Unique name, alphanumeric or '_' only
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a region.
#[derive(Debug, Clone)]
pub struct NewRegion {
    pub name: String,
    pub description: String,
}
