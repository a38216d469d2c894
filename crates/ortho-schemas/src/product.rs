//! Catalog product snapshot.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

/// A storefront product. The catalog renders these from the built-in set;
/// the cart stores a snapshot of id/name/price/image at add time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub in_stock: bool,
}
