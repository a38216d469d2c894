//! Filtering must be idempotent: running the same query over its own output
//! yields an equal list, for every category/search/sort combination over the
//! built-in catalog.

use ortho_catalog::{demo_products, filter_products, CatalogQuery, SortKey};

#[test]
fn filtering_twice_equals_filtering_once() {
    let products = demo_products();

    let categories = [
        None,
        Some("All".to_string()),
        Some("Lower Limb".to_string()),
        Some("Care".to_string()),
        Some("No Such Category".to_string()),
    ];
    let searches = ["", "liner", "CARBON", "zzz-no-match"];
    let sorts = [SortKey::NameAsc, SortKey::PriceAsc, SortKey::PriceDesc];

    for category in &categories {
        for search in &searches {
            for sort in sorts {
                let query = CatalogQuery {
                    category: category.clone(),
                    search: search.to_string(),
                    sort,
                };
                let once = filter_products(&products, &query);
                let twice = filter_products(&once, &query);
                assert_eq!(
                    once, twice,
                    "query not idempotent: category={category:?} search={search:?} sort={sort}"
                );
            }
        }
    }
}

#[test]
fn unmatched_category_yields_empty() {
    let query = CatalogQuery {
        category: Some("No Such Category".to_string()),
        ..CatalogQuery::default()
    };
    assert!(filter_products(&demo_products(), &query).is_empty());
}
