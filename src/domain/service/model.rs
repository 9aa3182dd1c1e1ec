//! Service domain entity

use chrono::{DateTime, Utc};

/// The binding of one service type to one region. Both references are fixed
/// at creation; the service's price lives in its rate history, which is
/// never empty (a service is created together with its initial rate).
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: i32,
    pub region_id: i32,
    pub service_type_id: i32,
    pub created_at: DateTime<Utc>,
}
