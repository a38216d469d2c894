//! `ortho shipping assign` handler.

use anyhow::Result;
use chrono::{DateTime, Utc};

use ortho_config::OrthoConfig;
use ortho_schemas::{Carrier, ShipmentStatus};
use ortho_workflow::ShippingForm;

use super::{build_client, open_store, parse_id, print_order, surface};

/// Raw CLI input for a shipping assignment, one field per flag.
pub struct AssignArgs {
    pub order_id: String,
    pub tracking: String,
    pub carrier: String,
    pub status: Option<String>,
    pub eta: Option<String>,
    pub location: Option<String>,
    pub checkpoint_description: Option<String>,
    pub checkpoint_location: Option<String>,
}

pub async fn assign(cfg: &OrthoConfig, args: AssignArgs) -> Result<()> {
    let id = parse_id("order id", &args.order_id)?;
    let carrier: Carrier = args.carrier.parse()?;
    let status = args
        .status
        .map(|s| s.parse::<ShipmentStatus>())
        .transpose()?;
    let estimated_delivery = args
        .eta
        .map(|s| DateTime::parse_from_rfc3339(&s).map(|dt| dt.with_timezone(&Utc)))
        .transpose()?;

    let form = ShippingForm {
        tracking_number: args.tracking,
        carrier: Some(carrier),
        status,
        estimated_delivery,
        location: args.location,
        checkpoint_description: args.checkpoint_description,
        checkpoint_location: args.checkpoint_location,
    };
    let payload = form.into_payload(Utc::now())?;

    let store = open_store(cfg)?;
    let client = build_client(cfg, &store)?;
    let updated = surface(client.assign_shipping(id, &payload).await)?;

    println!(
        "shipping_assigned=true order_id={} tracking_number={} carrier={} shipment_status={}",
        id, payload.tracking_number, payload.carrier, payload.status
    );
    print_order(&updated);
    Ok(())
}
