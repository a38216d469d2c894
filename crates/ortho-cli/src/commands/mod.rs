//! Command handler modules for the `ortho` console.
//!
//! Shared wiring (store, client, key=value printers) lives here; the
//! command-specific logic lives in the submodules.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod order;
pub mod payment;
pub mod shipping;

use std::time::Duration;

use anyhow::{Context, Result};
use uuid::Uuid;

use ortho_client::{AdminClient, ClientError};
use ortho_config::OrthoConfig;
use ortho_schemas::Order;
use ortho_store::{LocalStore, KEY_AUTH_TOKEN};
use ortho_workflow::allowed_transitions;

/// Env var fallback for the bearer token when no `auth login` session
/// exists. Tokens are never read from config files.
pub const ENV_API_TOKEN: &str = "ORTHO_API_TOKEN";

/// Open the local store at the configured directory.
pub fn open_store(cfg: &OrthoConfig) -> Result<LocalStore> {
    LocalStore::open(&cfg.store.dir)
}

/// Build an admin client. The token comes from the store (`auth login`)
/// first, then the environment; unauthenticated clients are still valid
/// for servers that allow it.
pub fn build_client(cfg: &OrthoConfig, store: &LocalStore) -> Result<AdminClient> {
    let client = AdminClient::new(
        cfg.api.base_url.clone(),
        Duration::from_secs(cfg.api.timeout_secs),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    let token = match store.get::<String>(KEY_AUTH_TOKEN)? {
        Some(t) => Some(t),
        None => std::env::var(ENV_API_TOKEN).ok(),
    };
    tracing::debug!(
        base_url = %cfg.api.base_url,
        authenticated = token.is_some(),
        "admin client ready"
    );
    Ok(match token {
        Some(t) => client.with_token(t),
        None => client,
    })
}

/// Map a client failure to its operator-facing message. The technical
/// detail was already logged at the client layer.
pub fn surface<T>(res: Result<T, ClientError>) -> Result<T> {
    res.map_err(|e| anyhow::anyhow!("{}", e.user_message()))
}

/// Parse a CLI uuid argument with a field-named error.
pub fn parse_id(what: &str, raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw.trim()).with_context(|| format!("invalid {what}: {raw:?}"))
}

/// Print an order as one `key=value` line per field, with items and
/// timeline entries indented beneath.
pub fn print_order(order: &Order) {
    println!("order_id={}", order.id);
    println!("order_number={}", order.order_number);
    println!("customer_id={}", order.customer_id);
    println!("status={}", order.status);
    println!(
        "allowed_next={}",
        allowed_transitions(order.status)
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(",")
    );
    println!("payment_status={}", order.payment_status);
    println!("payment_method={}", order.payment_method);
    println!("subtotal={}", order.subtotal);
    println!("tax={}", order.tax);
    println!("shipping_cost={}", order.shipping_cost);
    println!("discount={}", order.discount);
    println!("total={}", order.total);
    println!("items={}", order.items.len());
    for item in &order.items {
        println!(
            "  item product_id={} sku={} qty={} unit_price={} name={:?}",
            item.product_id, item.sku, item.quantity, item.unit_price, item.name
        );
    }
    println!(
        "tracking_number={}",
        order.tracking_number.as_deref().unwrap_or("")
    );
    println!("created_at={}", order.created_at.to_rfc3339());
    for ev in &order.timeline {
        println!(
            "  timeline ts={} title={:?} description={:?}",
            ev.timestamp.to_rfc3339(),
            ev.title,
            ev.description
        );
    }
}
