//! Order status transition table.
//!
//! The admin UI this replaces offered every non-current status from every
//! status, which let an operator move a refunded order back to pending with
//! one click. That behavior was flagged as unintended; the table below is
//! the explicit replacement. Illegal transitions return
//! [`TransitionError`] and are never submitted to the server.
//!
//! ```text
//! pending    ──► processing | cancelled
//! processing ──► shipped    | cancelled
//! shipped    ──► delivered  | cancelled
//! delivered  ──► refunded
//! cancelled  ──► refunded
//! refunded   ──► (terminal)
//! ```
//!
//! Self-transitions are rejected: re-submitting the current status is a
//! no-op the server should never see.

use std::fmt;

use ortho_schemas::OrderStatus;

/// Statuses legally reachable from `from` in one step.
pub fn allowed_transitions(from: OrderStatus) -> &'static [OrderStatus] {
    use OrderStatus::*;
    match from {
        Pending => &[Processing, Cancelled],
        Processing => &[Shipped, Cancelled],
        Shipped => &[Delivered, Cancelled],
        Delivered => &[Refunded],
        Cancelled => &[Refunded],
        Refunded => &[],
    }
}

/// True if no further transitions are possible.
pub fn is_terminal(status: OrderStatus) -> bool {
    allowed_transitions(status).is_empty()
}

/// Returned when a requested status change is not in the transition table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionError {
    pub from: OrderStatus,
    pub to: OrderStatus,
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.from == self.to {
            write!(f, "order is already {}", self.from)
        } else if is_terminal(self.from) {
            write!(f, "order is {} (terminal); no transitions allowed", self.from)
        } else {
            write!(
                f,
                "illegal order transition: {} -> {} (allowed: {})",
                self.from,
                self.to,
                allowed_transitions(self.from)
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        }
    }
}

impl std::error::Error for TransitionError {}

/// Validate a requested transition against the table.
pub fn check_transition(from: OrderStatus, to: OrderStatus) -> Result<(), TransitionError> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(TransitionError { from, to })
    }
}
