//! Shopping cart state.
//!
//! A cart is an insertion-ordered list of lines keyed by product id. Every
//! line snapshots the product's id/name/price/image at add time, so later
//! catalog changes do not retroactively reprice a cart.
//!
//! # Invariant
//!
//! A stored line never has quantity zero: setting a quantity to zero (or
//! removing the line) drops it. There is no stock-level reconciliation at
//! mutation time; availability is checked at checkout, which is out of
//! scope here.
//!
//! Mutations do not perform IO. The caller (the CLI) persists a snapshot of
//! [`Cart::lines`] through `ortho-store` after every mutation.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ortho_schemas::{Money, Product};

// ---------------------------------------------------------------------------
// CartLine
// ---------------------------------------------------------------------------

/// One cart line: a product snapshot plus a quantity ≥ 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: Uuid,
    pub name: String,
    pub price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub quantity: u32,
}

// ---------------------------------------------------------------------------
// CartTotalError
// ---------------------------------------------------------------------------

/// Returned when a cart total overflows the fixed-point range. Practically
/// unreachable with retail prices, but the arithmetic is checked rather
/// than silently wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartTotalError {
    /// Product id of the line where the overflow occurred.
    pub product_id: Uuid,
}

impl fmt::Display for CartTotalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cart total overflow at product {}", self.product_id)
    }
}

impl std::error::Error for CartTotalError {}

// ---------------------------------------------------------------------------
// Cart
// ---------------------------------------------------------------------------

/// The cart state machine. See the module docs for the quantity invariant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from a persisted snapshot. Lines with quantity zero
    /// (possible only if the snapshot was edited by hand) are dropped to
    /// restore the invariant.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self {
            lines: lines.into_iter().filter(|l| l.quantity > 0).collect(),
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a product. If the product id is already in the cart the existing
    /// line's quantity is incremented (saturating); otherwise a new line is
    /// appended. `quantity == 0` is a no-op.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
            return;
        }
        self.lines.push(CartLine {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity,
        });
    }

    /// Remove the line for `product_id`. Absent ids are a no-op.
    pub fn remove(&mut self, product_id: Uuid) {
        self.lines.retain(|l| l.id != product_id);
    }

    /// Replace the quantity of an existing line. Zero behaves as
    /// [`Cart::remove`]. An absent id is a no-op: no line is created.
    pub fn update_quantity(&mut self, product_id: Uuid, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `price × quantity` over all lines, with overflow detection.
    pub fn total(&self) -> Result<Money, CartTotalError> {
        let mut sum = Money::ZERO;
        for line in &self.lines {
            let line_total = line
                .price
                .checked_mul_qty(line.quantity)
                .and_then(|t| sum.checked_add(t))
                .ok_or(CartTotalError {
                    product_id: line.id,
                })?;
            sum = line_total;
        }
        Ok(sum)
    }

    /// Sum of quantities over all lines.
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }
}
