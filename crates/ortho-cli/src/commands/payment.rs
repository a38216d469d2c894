//! `ortho payment verify` handler.

use anyhow::Result;

use ortho_config::OrthoConfig;
use ortho_schemas::{Money, PaymentMethod};
use ortho_workflow::PaymentForm;

use super::{build_client, open_store, parse_id, print_order, surface};

pub async fn verify(
    cfg: &OrthoConfig,
    order_id: &str,
    method: Option<String>,
    amount: Option<String>,
    reference: String,
    notes: Option<String>,
) -> Result<()> {
    let id = parse_id("order id", order_id)?;
    let method = method.map(|m| m.parse::<PaymentMethod>()).transpose()?;
    let amount_collected = amount.map(|a| a.parse::<Money>()).transpose()?;

    let store = open_store(cfg)?;
    let client = build_client(cfg, &store)?;

    // The amount check is against the live order total, so fetch first.
    let order = surface(client.get_order(id).await)?;

    let form = PaymentForm {
        method,
        amount_collected,
        reference,
        notes,
    };
    let payload = form.into_payload(&order)?;

    let updated = surface(client.verify_payment(id, &payload).await)?;
    println!(
        "payment_verified=true order_id={} method={} amount={} reference={}",
        id, payload.method, payload.amount_collected, payload.reference
    );
    print_order(&updated);
    Ok(())
}
