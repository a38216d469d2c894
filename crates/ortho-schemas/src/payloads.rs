//! Request payloads for the admin API write endpoints.
//!
//! These structs are constructed by `ortho-workflow` (after validation) and
//! serialized by `ortho-client`. Keeping them here means the wire shape is
//! defined exactly once.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::order::{Carrier, OrderStatus, PaymentMethod, ShipmentStatus};

/// Body of `PATCH /api/v1/admin/orders/{id}/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body of `POST /api/v1/admin/orders/{id}/complete`. The two confirmation
/// flags travel as query parameters, not in the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A shipping-tracking sub-record nested inside a shipping assignment.
///
/// The timestamp is always the submission time; operator-entered values are
/// discarded by the form layer before this struct is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub status: ShipmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

/// Body of `POST /api/v1/admin/orders/{id}/shipping/assign`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingAssignment {
    pub tracking_number: String,
    pub carrier: Carrier,
    pub status: ShipmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub checkpoint: Checkpoint,
}

/// Parameters of `POST /api/v1/admin/orders/{id}/payment/verify`. Method,
/// amount and reference travel as query parameters; notes in the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentVerification {
    pub method: PaymentMethod,
    pub amount_collected: Money,
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
