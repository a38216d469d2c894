//! Payment verification form.
//!
//! The operator records how an order was actually paid. There is no
//! partial- or over-payment workflow: the collected amount must equal the
//! order total to the cent, in both directions, or the submission is
//! blocked with a field-level error.

use ortho_schemas::{Money, Order, PaymentMethod, PaymentVerification};

use crate::forms::FieldErrors;

/// Operator input for verifying an order's payment.
///
/// `method` and `amount_collected` default to the order's own values when
/// left unset — the common case is confirming exactly what the order says.
#[derive(Debug, Clone, Default)]
pub struct PaymentForm {
    pub method: Option<PaymentMethod>,
    pub amount_collected: Option<Money>,
    pub reference: String,
    pub notes: Option<String>,
}

impl PaymentForm {
    /// Validate against the order and build the submission payload.
    ///
    /// All four checks run; every failing field lands in the error map:
    /// - method present (after defaulting to the order's method)
    /// - amount strictly positive
    /// - amount equals the order total exactly
    /// - reference non-blank
    pub fn into_payload(self, order: &Order) -> Result<PaymentVerification, FieldErrors> {
        let mut errors = FieldErrors::new();

        let method = self.method.unwrap_or(order.payment_method);
        let amount = self.amount_collected.unwrap_or(order.total);

        if !amount.is_positive() {
            errors.push("amount_collected", "amount must be greater than zero");
        } else if amount != order.total {
            errors.push(
                "amount_collected",
                format!(
                    "amount {} does not match order total {}",
                    amount, order.total
                ),
            );
        }

        let reference = self.reference.trim().to_string();
        if reference.is_empty() {
            errors.push("reference", "payment reference is required");
        }

        let notes = self.notes.filter(|n| !n.trim().is_empty());

        errors.into_result(PaymentVerification {
            method,
            amount_collected: amount,
            reference,
            notes,
        })
    }
}
