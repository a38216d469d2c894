//! The shipping checkpoint's timestamp is always the submission time; the
//! form offers no way to smuggle an operator-entered timestamp into the
//! payload.

use chrono::{TimeZone, Utc};
use ortho_schemas::{Carrier, ShipmentStatus};
use ortho_workflow::ShippingForm;

#[test]
fn payload_checkpoint_carries_the_submission_time() {
    let submitted = Utc.with_ymd_and_hms(2026, 8, 23, 15, 45, 10).unwrap();

    let form = ShippingForm {
        tracking_number: "ARX-778899".to_string(),
        carrier: Some(Carrier::Aramex),
        status: Some(ShipmentStatus::Shipped),
        estimated_delivery: Some(Utc.with_ymd_and_hms(2026, 8, 27, 0, 0, 0).unwrap()),
        location: Some("Sorting facility".to_string()),
        checkpoint_description: Some("Picked up from seller".to_string()),
        checkpoint_location: Some("Seller warehouse".to_string()),
    };

    let payload = form.into_payload(submitted).unwrap();
    assert_eq!(payload.checkpoint.timestamp, submitted);
    assert_eq!(payload.checkpoint.location.as_deref(), Some("Seller warehouse"));
    // The shipment-level fields are untouched.
    assert_eq!(payload.location.as_deref(), Some("Sorting facility"));
    assert_eq!(
        payload.estimated_delivery,
        Some(Utc.with_ymd_and_hms(2026, 8, 27, 0, 0, 0).unwrap())
    );
}
