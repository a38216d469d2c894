//! Customer read model, as returned by `GET /api/v1/admin/users/{id}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

/// Read-only customer profile shown next to an order. This client never
/// mutates customers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub verified: bool,
    pub orders_count: u32,
    pub total_spent: Money,
    pub created_at: DateTime<Utc>,
}
