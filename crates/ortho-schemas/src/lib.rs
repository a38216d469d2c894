//! Shared domain types for the Ortho marketplace toolkit.
//!
//! Every crate in the workspace speaks these types. Monetary amounts use
//! the fixed-point [`Money`] type (integer cents) everywhere; the decimal
//! string form only appears at the wire boundary.

mod customer;
mod money;
mod order;
mod payloads;
mod product;

pub use customer::Customer;
pub use money::{Money, ParseMoneyError};
pub use order::{
    Address, Carrier, Order, OrderItem, OrderStatus, ParseEnumError, PaymentMethod,
    PaymentStatus, ShipmentStatus, TimelineEvent,
};
pub use payloads::{
    Checkpoint, CompletionRequest, PaymentVerification, ShippingAssignment, StatusUpdateRequest,
};
pub use product::Product;
