//! Scenario tests for the admin client against an in-process mock admin
//! API. A real axum server is bound on an ephemeral loopback port so the
//! whole reqwest stack is exercised, not just serialization.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, Query},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, patch, post},
    Json, Router,
};
use chrono::{TimeZone, Utc};
use uuid::Uuid;

use ortho_client::{AdminClient, ClientError};
use ortho_schemas::{
    Address, Carrier, Checkpoint, CompletionRequest, Customer, Money, Order, OrderStatus,
    PaymentMethod, PaymentStatus, PaymentVerification, ShipmentStatus, ShippingAssignment,
    StatusUpdateRequest,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn sample_order(id: Uuid) -> Order {
    Order {
        id,
        order_number: "ORD-7001".to_string(),
        customer_id: Uuid::from_u128(42),
        status: OrderStatus::Shipped,
        payment_status: PaymentStatus::Pending,
        payment_method: PaymentMethod::CashOnDelivery,
        subtotal: Money::from_cents(249_999),
        tax: Money::ZERO,
        shipping_cost: Money::from_cents(1_500),
        discount: Money::ZERO,
        total: Money::from_cents(251_499),
        shipping_address: Address {
            line1: "7 Spring Lane".to_string(),
            line2: None,
            city: "Beirut".to_string(),
            country: "LB".to_string(),
            postal_code: None,
        },
        items: vec![],
        timeline: vec![],
        tracking_number: Some("TRK-1".to_string()),
        notes: None,
        created_at: Utc.with_ymd_and_hms(2026, 8, 20, 10, 0, 0).unwrap(),
    }
}

/// Bind the router on an ephemeral loopback port and serve it in the
/// background; returns the bound address.
async fn spawn_mock(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock listener");
    let addr = listener.local_addr().expect("mock local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock server");
    });
    addr
}

fn client_for(addr: SocketAddr) -> AdminClient {
    AdminClient::new(format!("http://{addr}"), Duration::from_secs(2)).expect("build client")
}

// ---------------------------------------------------------------------------
// GET order
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_order_round_trips_and_sends_bearer_token() {
    let seen_auth: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));

    let state = Arc::clone(&seen_auth);
    let router = Router::new().route(
        "/api/v1/admin/orders/:id",
        get(
            move |Path(id): Path<Uuid>, headers: HeaderMap| {
                let state = Arc::clone(&state);
                async move {
                    *state.lock().unwrap() = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    Json(sample_order(id))
                }
            },
        ),
    );

    let addr = spawn_mock(router).await;
    let client = client_for(addr).with_token("tok-123");

    let id = Uuid::from_u128(7);
    let order = client.get_order(id).await.expect("get_order");

    assert_eq!(order.id, id);
    assert_eq!(order.status, OrderStatus::Shipped);
    assert_eq!(order.total, Money::from_cents(251_499));
    assert_eq!(
        seen_auth.lock().unwrap().as_deref(),
        Some("Bearer tok-123")
    );
}

// ---------------------------------------------------------------------------
// PATCH status — server rejection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn status_rejection_surfaces_server_message_and_leaves_state_untouched() {
    let router = Router::new().route(
        "/api/v1/admin/orders/:id/status",
        patch(|Path(_id): Path<Uuid>, Json(_body): Json<StatusUpdateRequest>| async {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({ "detail": "illegal order transition" })),
            )
                .into_response()
        }),
    );

    let addr = spawn_mock(router).await;
    let client = client_for(addr);

    let id = Uuid::from_u128(7);
    let in_memory = sample_order(id);
    let before = in_memory.clone();

    let err = client
        .update_status(
            id,
            &StatusUpdateRequest {
                status: OrderStatus::Refunded,
                notes: None,
            },
        )
        .await
        .unwrap_err();

    match &err {
        ClientError::Api { status, message } => {
            assert_eq!(*status, 422);
            assert_eq!(message, "illegal order transition");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert_eq!(err.user_message(), "illegal order transition");
    // The failure must not have touched the order we were holding.
    assert_eq!(in_memory, before);
}

// ---------------------------------------------------------------------------
// POST complete — confirmations as query params
// ---------------------------------------------------------------------------

#[tokio::test]
async fn completion_confirmations_travel_as_query_params() {
    let seen: Arc<Mutex<Option<HashMap<String, String>>>> = Arc::new(Mutex::new(None));

    let state = Arc::clone(&seen);
    let router = Router::new().route(
        "/api/v1/admin/orders/:id/complete",
        post(
            move |Path(id): Path<Uuid>,
                  Query(params): Query<HashMap<String, String>>,
                  Json(_body): Json<CompletionRequest>| {
                let state = Arc::clone(&state);
                async move {
                    *state.lock().unwrap() = Some(params);
                    Json(sample_order(id))
                }
            },
        ),
    );

    let addr = spawn_mock(router).await;
    let client = client_for(addr);

    client
        .complete_order(
            Uuid::from_u128(7),
            true,
            false,
            &CompletionRequest {
                notes: Some("cash counted".to_string()),
            },
        )
        .await
        .expect("complete_order");

    let params = seen.lock().unwrap().clone().expect("params captured");
    assert_eq!(params.get("delivery_confirmation").map(String::as_str), Some("true"));
    assert_eq!(params.get("payment_collected").map(String::as_str), Some("false"));
}

// ---------------------------------------------------------------------------
// POST shipping/assign — checkpoint timestamp on the wire
// ---------------------------------------------------------------------------

#[tokio::test]
async fn shipping_assignment_carries_the_submission_timestamp_to_the_server() {
    let seen: Arc<Mutex<Option<ShippingAssignment>>> = Arc::new(Mutex::new(None));

    let state = Arc::clone(&seen);
    let router = Router::new().route(
        "/api/v1/admin/orders/:id/shipping/assign",
        post(
            move |Path(id): Path<Uuid>, Json(body): Json<ShippingAssignment>| {
                let state = Arc::clone(&state);
                async move {
                    *state.lock().unwrap() = Some(body);
                    Json(sample_order(id))
                }
            },
        ),
    );

    let addr = spawn_mock(router).await;
    let client = client_for(addr);

    let submitted_at = Utc.with_ymd_and_hms(2026, 8, 22, 16, 45, 0).unwrap();
    let assignment = ShippingAssignment {
        tracking_number: "TRK-555".to_string(),
        carrier: Carrier::Aramex,
        status: ShipmentStatus::Shipped,
        estimated_delivery: None,
        location: Some("Beirut hub".to_string()),
        checkpoint: Checkpoint {
            status: ShipmentStatus::Shipped,
            location: Some("Beirut hub".to_string()),
            description: "Package handed to aramex".to_string(),
            timestamp: submitted_at,
        },
    };
    client
        .assign_shipping(Uuid::from_u128(7), &assignment)
        .await
        .expect("assign_shipping");

    // The server sees exactly the timestamp the form stamped at submission.
    let body = seen.lock().unwrap().clone().expect("body captured");
    assert_eq!(body.checkpoint.timestamp, submitted_at);
    assert_eq!(body.tracking_number, "TRK-555");
    assert_eq!(body.carrier, Carrier::Aramex);
}

// ---------------------------------------------------------------------------
// GET customer
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_customer_round_trips_the_read_model() {
    let router = Router::new().route(
        "/api/v1/admin/users/:id",
        get(|Path(id): Path<Uuid>| async move {
            Json(Customer {
                id,
                name: "Rana Haddad".to_string(),
                email: "rana@example.net".to_string(),
                phone: None,
                verified: true,
                orders_count: 4,
                total_spent: Money::from_cents(1_005_996),
                created_at: Utc.with_ymd_and_hms(2025, 3, 2, 9, 0, 0).unwrap(),
            })
        }),
    );

    let addr = spawn_mock(router).await;
    let client = client_for(addr);

    let id = Uuid::from_u128(42);
    let customer = client.get_customer(id).await.expect("get_customer");
    assert_eq!(customer.id, id);
    assert!(customer.verified);
    assert_eq!(customer.total_spent, Money::from_cents(1_005_996));
}

// ---------------------------------------------------------------------------
// POST payment/verify — payment data as query params
// ---------------------------------------------------------------------------

#[tokio::test]
async fn payment_verification_sends_method_amount_and_reference() {
    let seen: Arc<Mutex<Option<HashMap<String, String>>>> = Arc::new(Mutex::new(None));

    let state = Arc::clone(&seen);
    let router = Router::new().route(
        "/api/v1/admin/orders/:id/payment/verify",
        post(
            move |Path(id): Path<Uuid>, Query(params): Query<HashMap<String, String>>| {
                let state = Arc::clone(&state);
                async move {
                    *state.lock().unwrap() = Some(params);
                    Json(sample_order(id))
                }
            },
        ),
    );

    let addr = spawn_mock(router).await;
    let client = client_for(addr);

    let verification = PaymentVerification {
        method: PaymentMethod::CashOnDelivery,
        amount_collected: Money::from_cents(251_499),
        reference: "COD-REF-9".to_string(),
        notes: None,
    };
    client
        .verify_payment(Uuid::from_u128(7), &verification)
        .await
        .expect("verify_payment");

    let params = seen.lock().unwrap().clone().expect("params captured");
    assert_eq!(params.get("method").map(String::as_str), Some("cash_on_delivery"));
    assert_eq!(params.get("amount").map(String::as_str), Some("2514.99"));
    assert_eq!(params.get("reference").map(String::as_str), Some("COD-REF-9"));
}

// ---------------------------------------------------------------------------
// Transport failure
// ---------------------------------------------------------------------------

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    // Bind then immediately drop a listener to get a port nobody serves.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(addr);
    let err = client.get_order(Uuid::from_u128(1)).await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)), "{err:?}");
    assert!(err.user_message().contains("Could not reach the server"));
}
