//! `ortho order` and `ortho customer` handlers.
//!
//! Lifecycle guardrails run here, before any request leaves the process:
//! a move that is not in the transition table, or a completion whose
//! confirmations are missing, is refused locally and the server never
//! sees it.

use anyhow::{bail, Result};

use ortho_config::OrthoConfig;
use ortho_schemas::{CompletionRequest, OrderStatus, PaymentMethod, StatusUpdateRequest};
use ortho_workflow::{can_complete, check_completion_allowed, check_transition, CompletionGate};

use super::{build_client, open_store, parse_id, print_order, surface};

pub async fn show(cfg: &OrthoConfig, order_id: &str) -> Result<()> {
    let id = parse_id("order id", order_id)?;
    let store = open_store(cfg)?;
    let client = build_client(cfg, &store)?;

    let order = surface(client.get_order(id).await)?;
    print_order(&order);
    Ok(())
}

pub async fn set_status(
    cfg: &OrthoConfig,
    order_id: &str,
    status: &str,
    notes: Option<String>,
) -> Result<()> {
    let id = parse_id("order id", order_id)?;
    let to: OrderStatus = status.parse()?;

    let store = open_store(cfg)?;
    let client = build_client(cfg, &store)?;

    let order = surface(client.get_order(id).await)?;
    check_transition(order.status, to)?;

    let updated = surface(
        client
            .update_status(id, &StatusUpdateRequest { status: to, notes })
            .await,
    )?;
    println!("status_updated=true order_id={} status={}", id, updated.status);
    print_order(&updated);
    Ok(())
}

pub async fn complete(
    cfg: &OrthoConfig,
    order_id: &str,
    delivery_confirmed: bool,
    payment_collected: bool,
    notes: Option<String>,
) -> Result<()> {
    let id = parse_id("order id", order_id)?;
    let store = open_store(cfg)?;
    let client = build_client(cfg, &store)?;

    let order = surface(client.get_order(id).await)?;
    check_completion_allowed(order.status)?;

    let gate = CompletionGate {
        delivery_confirmation: delivery_confirmed,
        payment_collected,
    };
    if !can_complete(gate, order.payment_method) {
        if !gate.delivery_confirmation {
            bail!("completion requires --delivery-confirmed");
        }
        debug_assert_eq!(order.payment_method, PaymentMethod::CashOnDelivery);
        bail!("cash-on-delivery completion requires --payment-collected");
    }

    let updated = surface(
        client
            .complete_order(
                id,
                gate.delivery_confirmation,
                gate.payment_collected,
                &CompletionRequest { notes },
            )
            .await,
    )?;
    println!("completed=true order_id={} status={}", id, updated.status);
    print_order(&updated);
    Ok(())
}

pub async fn customer_show(cfg: &OrthoConfig, customer_id: &str) -> Result<()> {
    let id = parse_id("customer id", customer_id)?;
    let store = open_store(cfg)?;
    let client = build_client(cfg, &store)?;

    let customer = surface(client.get_customer(id).await)?;
    println!("customer_id={}", customer.id);
    println!("name={:?}", customer.name);
    println!("email={}", customer.email);
    println!("phone={}", customer.phone.as_deref().unwrap_or(""));
    println!("verified={}", customer.verified);
    println!("orders_count={}", customer.orders_count);
    println!("total_spent={}", customer.total_spent);
    println!("created_at={}", customer.created_at.to_rfc3339());
    Ok(())
}
