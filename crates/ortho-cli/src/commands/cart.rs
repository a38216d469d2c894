//! `ortho cart` handlers.
//!
//! The cart lives in the local store under [`KEY_CART`] as a snapshot of
//! its lines; every mutation loads, mutates, and persists in one shot, so
//! the cart survives console restarts the way a browser cart survives a
//! page reload.

use anyhow::{bail, Context, Result};

use ortho_cart::{Cart, CartLine};
use ortho_catalog::demo_products;
use ortho_config::OrthoConfig;
use ortho_store::{LocalStore, KEY_CART};

use super::{open_store, parse_id};

fn load_cart(store: &LocalStore) -> Result<Cart> {
    Ok(store
        .get::<Vec<CartLine>>(KEY_CART)?
        .map(Cart::from_lines)
        .unwrap_or_default())
}

fn save_cart(store: &LocalStore, cart: &Cart) -> Result<()> {
    store.put(KEY_CART, &cart.lines().to_vec())
}

pub fn add(cfg: &OrthoConfig, product: &str, qty: u32) -> Result<()> {
    let id = parse_id("product id", product)?;
    let product = demo_products()
        .into_iter()
        .find(|p| p.id == id)
        .with_context(|| format!("no such product: {id}"))?;
    if !product.in_stock {
        bail!("product is out of stock: {:?}", product.name);
    }

    let store = open_store(cfg)?;
    let mut cart = load_cart(&store)?;
    cart.add(&product, qty);
    save_cart(&store, &cart)?;

    let total = cart.total()?;
    println!(
        "added=true product_id={} qty={} count={} total={}",
        id,
        qty,
        cart.count(),
        total
    );
    Ok(())
}

pub fn remove(cfg: &OrthoConfig, product: &str) -> Result<()> {
    let id = parse_id("product id", product)?;
    let store = open_store(cfg)?;
    let mut cart = load_cart(&store)?;
    cart.remove(id);
    save_cart(&store, &cart)?;
    println!("removed=true product_id={} count={}", id, cart.count());
    Ok(())
}

pub fn set_qty(cfg: &OrthoConfig, product: &str, qty: u32) -> Result<()> {
    let id = parse_id("product id", product)?;
    let store = open_store(cfg)?;
    let mut cart = load_cart(&store)?;
    cart.update_quantity(id, qty);
    save_cart(&store, &cart)?;
    println!("updated=true product_id={} qty={} count={}", id, qty, cart.count());
    Ok(())
}

pub fn show(cfg: &OrthoConfig) -> Result<()> {
    let store = open_store(cfg)?;
    let cart = load_cart(&store)?;

    let total = cart.total()?;
    println!("lines={} count={} total={}", cart.lines().len(), cart.count(), total);
    for line in cart.lines() {
        let line_total = line
            .price
            .checked_mul_qty(line.quantity)
            .context("line total overflow")?;
        println!(
            "product_id={} qty={} price={} line_total={} name={:?}",
            line.id, line.quantity, line.price, line_total, line.name
        );
    }
    Ok(())
}

pub fn clear(cfg: &OrthoConfig) -> Result<()> {
    let store = open_store(cfg)?;
    let mut cart = load_cart(&store)?;
    cart.clear();
    save_cart(&store, &cart)?;
    println!("cleared=true");
    Ok(())
}
