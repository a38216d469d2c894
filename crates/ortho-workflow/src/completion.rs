//! Order completion gate.
//!
//! Completion is a distinguished transition with extra preconditions: the
//! operator must confirm delivery, and for cash-on-delivery orders must
//! additionally confirm the cash was collected. The gate only controls
//! whether the client submits; the server re-validates.

use ortho_schemas::{OrderStatus, PaymentMethod};

use crate::transitions::TransitionError;

/// Operator confirmations collected by the completion form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionGate {
    pub delivery_confirmation: bool,
    pub payment_collected: bool,
}

/// True iff the order may be completed with these confirmations:
/// delivery is confirmed AND (the method is not cash-on-delivery OR the
/// cash was collected).
pub fn can_complete(gate: CompletionGate, method: PaymentMethod) -> bool {
    gate.delivery_confirmation
        && (method != PaymentMethod::CashOnDelivery || gate.payment_collected)
}

/// Completion may only be initiated once the order has left the warehouse:
/// from `shipped` (confirming delivery as part of completion) or from
/// `delivered` (recording the payment side after the fact).
pub fn check_completion_allowed(status: OrderStatus) -> Result<(), TransitionError> {
    match status {
        OrderStatus::Shipped | OrderStatus::Delivered => Ok(()),
        other => Err(TransitionError {
            from: other,
            to: OrderStatus::Delivered,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_not_offered_before_shipment() {
        assert!(check_completion_allowed(OrderStatus::Pending).is_err());
        assert!(check_completion_allowed(OrderStatus::Processing).is_err());
        assert!(check_completion_allowed(OrderStatus::Shipped).is_ok());
        assert!(check_completion_allowed(OrderStatus::Delivered).is_ok());
        assert!(check_completion_allowed(OrderStatus::Cancelled).is_err());
        assert!(check_completion_allowed(OrderStatus::Refunded).is_err());
    }
}
