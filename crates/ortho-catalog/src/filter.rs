use std::fmt;
use std::str::FromStr;

use ortho_schemas::Product;

// ---------------------------------------------------------------------------
// SortKey
// ---------------------------------------------------------------------------

/// Catalog sort order. Sorting is stable: ties keep their original
/// position in the input list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    NameAsc,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "name",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned for an unrecognized sort key string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSortKeyError(pub String);

impl fmt::Display for ParseSortKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sort key: {:?} (expected name | price-asc | price-desc)", self.0)
    }
}

impl std::error::Error for ParseSortKeyError {}

impl FromStr for SortKey {
    type Err = ParseSortKeyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::NameAsc),
            "price-asc" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            other => Err(ParseSortKeyError(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// CatalogQuery
// ---------------------------------------------------------------------------

/// One storefront query: category constraint, search term, sort order.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    /// Exact category match. `None`, `""` and `"All"` are unconstrained.
    pub category: Option<String>,
    /// Case-insensitive substring match against name OR description.
    /// Empty matches everything.
    pub search: String,
    pub sort: SortKey,
}

impl CatalogQuery {
    fn category_matches(&self, product: &Product) -> bool {
        match self.category.as_deref() {
            None | Some("") | Some("All") => true,
            Some(cat) => product.category == cat,
        }
    }

    fn search_matches(&self, product: &Product) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
    }

    /// True if the product passes both the category and search predicates.
    pub fn matches(&self, product: &Product) -> bool {
        self.category_matches(product) && self.search_matches(product)
    }
}

// ---------------------------------------------------------------------------
// filter_products
// ---------------------------------------------------------------------------

/// Filter and sort a product list for display.
///
/// The result is a fresh vector; the input is never reordered. Filtering is
/// idempotent: applying the same query to its own output returns an equal
/// list.
pub fn filter_products(products: &[Product], query: &CatalogQuery) -> Vec<Product> {
    let mut out: Vec<Product> = products
        .iter()
        .filter(|p| query.matches(p))
        .cloned()
        .collect();

    match query.sort {
        SortKey::NameAsc => out.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::PriceAsc => out.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => out.sort_by(|a, b| b.price.cmp(&a.price)),
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ortho_schemas::Money;
    use uuid::Uuid;

    fn product(n: u128, name: &str, desc: &str, category: &str, cents: i64) -> Product {
        Product {
            id: Uuid::from_u128(n),
            name: name.to_string(),
            description: desc.to_string(),
            category: category.to_string(),
            price: Money::from_cents(cents),
            image: None,
            in_stock: true,
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product(1, "Carbon foot", "Energy-return foot", "Lower Limb", 120_000),
            product(2, "Myo hand", "Myoelectric hand", "Upper Limb", 950_000),
            product(3, "Gel liner", "Silicone gel liner", "Liners & Sleeves", 18_500),
            product(4, "Knee joint", "Polycentric knee", "Lower Limb", 240_000),
        ]
    }

    #[test]
    fn empty_query_returns_all_sorted_by_name() {
        let out = filter_products(&fixture(), &CatalogQuery::default());
        assert_eq!(out.len(), 4);
        assert_eq!(out[0].name, "Carbon foot");
        assert_eq!(out[3].name, "Myo hand");
    }

    #[test]
    fn category_all_and_empty_are_unconstrained() {
        for cat in [None, Some(String::new()), Some("All".to_string())] {
            let q = CatalogQuery {
                category: cat,
                ..CatalogQuery::default()
            };
            assert_eq!(filter_products(&fixture(), &q).len(), 4);
        }
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_description() {
        let q = CatalogQuery {
            search: "SILICONE".to_string(),
            ..CatalogQuery::default()
        };
        let out = filter_products(&fixture(), &q);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Gel liner");
    }

    #[test]
    fn category_and_search_combine_with_and() {
        let q = CatalogQuery {
            category: Some("Lower Limb".to_string()),
            search: "knee".to_string(),
            ..CatalogQuery::default()
        };
        let out = filter_products(&fixture(), &q);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Knee joint");
    }

    #[test]
    fn price_sort_directions() {
        let asc = filter_products(
            &fixture(),
            &CatalogQuery {
                sort: SortKey::PriceAsc,
                ..CatalogQuery::default()
            },
        );
        assert_eq!(asc.first().unwrap().name, "Gel liner");
        assert_eq!(asc.last().unwrap().name, "Myo hand");

        let desc = filter_products(
            &fixture(),
            &CatalogQuery {
                sort: SortKey::PriceDesc,
                ..CatalogQuery::default()
            },
        );
        assert_eq!(desc.first().unwrap().name, "Myo hand");
    }

    #[test]
    fn price_ties_keep_input_order() {
        let mut items = fixture();
        items.push(product(5, "Second foot", "Another foot", "Lower Limb", 120_000));
        let out = filter_products(
            &items,
            &CatalogQuery {
                sort: SortKey::PriceAsc,
                ..CatalogQuery::default()
            },
        );
        let tied: Vec<&str> = out
            .iter()
            .filter(|p| p.price == Money::from_cents(120_000))
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(tied, vec!["Carbon foot", "Second foot"]);
    }
}
