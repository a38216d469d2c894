//! Order lifecycle rules: the status transition table, the completion gate,
//! and the operator forms (shipping assignment, payment verification).
//!
//! Everything here is pure and synchronous. The admin API remains the
//! authority on every transition; this crate makes the client fail-closed —
//! an operation that this crate rejects is never submitted.

mod completion;
mod forms;
mod payment;
mod shipping;
mod transitions;

pub use completion::{can_complete, check_completion_allowed, CompletionGate};
pub use forms::FieldErrors;
pub use payment::PaymentForm;
pub use shipping::ShippingForm;
pub use transitions::{allowed_transitions, check_transition, is_terminal, TransitionError};
