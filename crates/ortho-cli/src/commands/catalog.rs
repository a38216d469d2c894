//! `ortho catalog` handlers.

use anyhow::Result;

use ortho_catalog::{demo_products, filter_products, CatalogQuery, SortKey};

pub fn list(category: Option<String>, search: Option<String>, sort: Option<String>) -> Result<()> {
    let sort = match sort {
        Some(raw) => raw.parse::<SortKey>()?,
        None => SortKey::default(),
    };
    let query = CatalogQuery {
        category,
        search: search.unwrap_or_default(),
        sort,
    };

    let products = filter_products(&demo_products(), &query);
    println!("products={} sort={}", products.len(), query.sort);
    for p in &products {
        println!(
            "id={} price={} in_stock={} category={:?} name={:?}",
            p.id, p.price, p.in_stock, p.category, p.name
        );
    }
    Ok(())
}
