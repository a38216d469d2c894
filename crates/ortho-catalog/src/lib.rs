//! Catalog filtering and sorting.
//!
//! Pure and synchronous: callers own the product list and re-run the query
//! whenever the inputs change. The list is storefront-scale (dozens of
//! items), so there is no index and no pagination; memoization is a caller
//! concern.

mod builtin;
mod filter;

pub use builtin::demo_products;
pub use filter::{filter_products, CatalogQuery, ParseSortKeyError, SortKey};
