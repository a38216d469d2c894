//! Shipping assignment form.
//!
//! Collects the operator's courier handoff details and produces the
//! [`ShippingAssignment`] payload. The nested checkpoint's timestamp is
//! always the submission time; any operator-entered timestamp is ignored
//! (couriers reject backdated checkpoints).

use chrono::{DateTime, Utc};
use ortho_schemas::{Carrier, Checkpoint, ShipmentStatus, ShippingAssignment};

use crate::forms::FieldErrors;

/// Operator input for assigning a shipment to an order.
///
/// `tracking_number` and `carrier` are required; everything else is
/// optional. Defaults match the admin UI: status starts at `shipped`, the
/// checkpoint description falls back to a standard handoff line.
#[derive(Debug, Clone, Default)]
pub struct ShippingForm {
    pub tracking_number: String,
    pub carrier: Option<Carrier>,
    pub status: Option<ShipmentStatus>,
    pub estimated_delivery: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub checkpoint_description: Option<String>,
    pub checkpoint_location: Option<String>,
}

impl ShippingForm {
    /// True once the two required fields are non-empty — the admin UI keeps
    /// the submit control disabled until this holds.
    pub fn is_submittable(&self) -> bool {
        !self.tracking_number.trim().is_empty() && self.carrier.is_some()
    }

    /// Validate and build the submission payload. `submitted_at` becomes
    /// the checkpoint timestamp regardless of operator input.
    pub fn into_payload(self, submitted_at: DateTime<Utc>) -> Result<ShippingAssignment, FieldErrors> {
        let mut errors = FieldErrors::new();

        let tracking_number = self.tracking_number.trim().to_string();
        if tracking_number.is_empty() {
            errors.push("tracking_number", "tracking number is required");
        }
        if self.carrier.is_none() {
            errors.push("carrier", "carrier is required");
        }

        let carrier = self.carrier.unwrap_or(Carrier::LocalCourier);
        let status = self.status.unwrap_or(ShipmentStatus::Shipped);
        let description = self
            .checkpoint_description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| format!("Package handed to {carrier}"));

        errors.into_result(ShippingAssignment {
            tracking_number,
            carrier,
            status,
            estimated_delivery: self.estimated_delivery,
            location: self.location.clone(),
            checkpoint: Checkpoint {
                status,
                location: self.checkpoint_location.or(self.location),
                description,
                timestamp: submitted_at,
            },
        })
    }
}
