//! Async REST client for the marketplace admin API.
//!
//! One method per endpoint, one request per call. No retry, no request
//! cancellation: a failed call surfaces a [`ClientError`] and leaves the
//! caller's state exactly as it was, so the operator can re-submit.
//!
//! Write endpoints return the updated [`Order`]; callers treat that as the
//! refetch the admin UI performed after every mutation.

mod error;

use std::time::Duration;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use uuid::Uuid;

use ortho_schemas::{
    CompletionRequest, Customer, Order, PaymentVerification, ShippingAssignment,
    StatusUpdateRequest,
};

pub use error::ClientError;

/// Handle to the admin API. Cheap to clone (`reqwest::Client` is an Arc
/// internally).
#[derive(Debug, Clone)]
pub struct AdminClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl AdminClient {
    /// Build a client against `base_url` (scheme + host, no trailing
    /// slash required) with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attach a bearer token to every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// `GET /api/v1/admin/orders/{order_id}`
    pub async fn get_order(&self, order_id: Uuid) -> Result<Order, ClientError> {
        let path = format!("/api/v1/admin/orders/{order_id}");
        self.send(self.request(Method::GET, &path), &path).await
    }

    /// `GET /api/v1/admin/users/{customer_id}`
    pub async fn get_customer(&self, customer_id: Uuid) -> Result<Customer, ClientError> {
        let path = format!("/api/v1/admin/users/{customer_id}");
        self.send(self.request(Method::GET, &path), &path).await
    }

    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    /// `PATCH /api/v1/admin/orders/{order_id}/status`
    pub async fn update_status(
        &self,
        order_id: Uuid,
        update: &StatusUpdateRequest,
    ) -> Result<Order, ClientError> {
        let path = format!("/api/v1/admin/orders/{order_id}/status");
        self.send(self.request(Method::PATCH, &path).json(update), &path)
            .await
    }

    /// `POST /api/v1/admin/orders/{order_id}/complete` — the confirmation
    /// flags travel as query parameters, the notes in the body.
    pub async fn complete_order(
        &self,
        order_id: Uuid,
        delivery_confirmation: bool,
        payment_collected: bool,
        body: &CompletionRequest,
    ) -> Result<Order, ClientError> {
        let path = format!("/api/v1/admin/orders/{order_id}/complete");
        let req = self
            .request(Method::POST, &path)
            .query(&[
                ("delivery_confirmation", delivery_confirmation),
                ("payment_collected", payment_collected),
            ])
            .json(body);
        self.send(req, &path).await
    }

    /// `POST /api/v1/admin/orders/{order_id}/shipping/assign`
    pub async fn assign_shipping(
        &self,
        order_id: Uuid,
        assignment: &ShippingAssignment,
    ) -> Result<Order, ClientError> {
        let path = format!("/api/v1/admin/orders/{order_id}/shipping/assign");
        self.send(self.request(Method::POST, &path).json(assignment), &path)
            .await
    }

    /// `POST /api/v1/admin/orders/{order_id}/payment/verify` — method,
    /// amount and reference travel as query parameters, the notes in the
    /// body.
    pub async fn verify_payment(
        &self,
        order_id: Uuid,
        verification: &PaymentVerification,
    ) -> Result<Order, ClientError> {
        let path = format!("/api/v1/admin/orders/{order_id}/payment/verify");
        let req = self
            .request(Method::POST, &path)
            .query(&[
                ("method", verification.method.as_str().to_string()),
                ("amount", verification.amount_collected.to_string()),
                ("reference", verification.reference.clone()),
            ])
            .json(&CompletionRequest {
                notes: verification.notes.clone(),
            });
        self.send(req, &path).await
    }

    // -----------------------------------------------------------------------
    // Plumbing
    // -----------------------------------------------------------------------

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        let mut req = self.http.request(method, url);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn send<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        path: &str,
    ) -> Result<T, ClientError> {
        debug!(path, "admin api request");

        let resp = req.send().await.map_err(|e| {
            warn!(path, error = %e, "admin api transport failure");
            ClientError::Transport(e)
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = match error::extract_message(&body) {
                m if m.is_empty() => default_reason(status),
                m => m,
            };
            warn!(path, status = status.as_u16(), %message, "admin api rejected request");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        resp.json::<T>().await.map_err(|e| {
            warn!(path, error = %e, "admin api response did not decode");
            ClientError::Decode(e.to_string())
        })
    }
}

fn default_reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}
