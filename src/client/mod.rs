//! Paylink API client
//!
//! [`PaylinkClient`] holds the merchant's credentials and exposes the three
//! things a merchant integration does: create orders, build payment URLs, and
//! verify webhook notifications.
//!
//! # Examples
//!
//! ## Creating an order
//!
//! ```no_run
//! use paylink::client::PaylinkClient;
//! use paylink::types::{ClientConfig, Customer, Environment, OrderPlacementRequest};
//! use rust_decimal::Decimal;
//!
//! # async fn example() -> paylink::Result<()> {
//! let config = ClientConfig::new("api-token")
//!     .with_client_key("client-key")
//!     .with_environment(Environment::Test);
//! let client = PaylinkClient::new(config)?;
//!
//! let order = OrderPlacementRequest::new(
//!     Decimal::new(15050, 2),
//!     "Order #1",
//!     "checkout",
//!     "ref-1",
//!     "JMD",
//! )
//! .with_customer(Customer::new().with_phone("8765550100"));
//!
//! match client.create_order(&order).await {
//!     Ok(response) => println!("Created order {}", response.result.id),
//!     Err(e) => println!("Order failed: {}", e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Building a payment URL
//!
//! ```
//! use paylink::client::{PaylinkClient, PaymentUrlOptions};
//! use paylink::types::ClientConfig;
//!
//! # fn example() -> paylink::Result<()> {
//! let client = PaylinkClient::new(ClientConfig::new("api-token"))?;
//! let url = client.create_payment_url(
//!     PaymentUrlOptions::new("acme", 150.5).with_reference_id("ref-1"),
//! )?;
//! assert!(url.starts_with("https://api.paylink.app/merchants/acme/order?link_token=&order_token="));
//! # Ok(())
//! # }
//! ```

use crate::crypto::{Verifier, VerifyOptions};
use crate::types::constants::{CLIENT_KEY_HEADER, ORDERS_PATH};
use crate::types::{
    ClientConfig, Environment, OrderPlacementRequest, OrderPlacementResponse, WebhookPayload,
};
use crate::{PaylinkError, Result};
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;

pub mod payment_url;


pub use payment_url::{
    build_payment_url, generate_reference_id, host_base, OrderTokenPayload, PaymentUrlOptions,
};

/// Client for the Paylink order API
///
/// Credentials can be swapped with the `set_*` methods, which need exclusive
/// access: no request can be in flight while they change.
#[derive(Clone)]
pub struct PaylinkClient {
    token: String,
    client_key: Option<String>,
    environment: Environment,
    base_url: String,
    client: Client,
    verifier: Verifier,
}

impl std::fmt::Debug for PaylinkClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaylinkClient")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("backend", &self.verifier.backend().name())
            .finish()
    }
}

impl PaylinkClient {
    /// Create a new client
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .build()
            .map_err(|e| PaylinkError::config(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = config.resolved_base_url().trim_end_matches('/').to_string();

        Ok(Self {
            token: config.token,
            client_key: config.client_key,
            environment: config.environment,
            base_url,
            client,
            verifier: Verifier::with_backend(config.backend),
        })
    }

    /// Replace the API token
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = token.into();
    }

    /// Replace the client key
    pub fn set_client_key(&mut self, client_key: impl Into<String>) {
        self.client_key = Some(client_key.into());
    }

    /// Switch environment, resetting the base URL to that environment's host
    pub fn set_environment(&mut self, environment: Environment) {
        self.environment = environment;
        self.base_url = environment.base_url().to_string();
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Base URL of the order API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Verifier used for webhook tokens
    pub fn verifier(&self) -> &Verifier {
        &self.verifier
    }

    /// Submit an order.
    ///
    /// Every failure (invalid order, transport error, non-success status,
    /// unreadable body) is logged and returned as an error value; this never
    /// panics. Callers that only care whether it worked can use `.ok()`.
    pub async fn create_order(
        &self,
        order: &OrderPlacementRequest,
    ) -> Result<OrderPlacementResponse> {
        match self.send_order(order).await {
            Ok(response) => Ok(response),
            Err(e) => {
                tracing::error!(
                    "Order creation failed for reference {}: {}",
                    order.reference_id,
                    e
                );
                Err(e)
            }
        }
    }

    async fn send_order(&self, order: &OrderPlacementRequest) -> Result<OrderPlacementResponse> {
        order.validate()?;

        let url = format!("{}{}", self.base_url, ORDERS_PATH);
        tracing::debug!(
            "Order request body: {}",
            serde_json::to_string(order).unwrap_or_default()
        );
        tracing::debug!("Sending request to: {}", url);

        let mut request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .json(order);

        if let Some(client_key) = &self.client_key {
            request = request.header(CLIENT_KEY_HEADER, client_key);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            return Err(PaylinkError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let order_response: OrderPlacementResponse = serde_json::from_slice(&bytes)?;
        Ok(order_response)
    }

    /// Build a shareable payment URL. Pure: no request is made.
    pub fn create_payment_url(&self, options: PaymentUrlOptions) -> Result<String> {
        build_payment_url(&self.base_url, &options)
    }

    /// Verify a webhook token and decode its payload.
    ///
    /// Any failure, including a claim set that is not a webhook payload,
    /// yields `None`; the cause is logged. Use [`Verifier::verify`] through
    /// [`PaylinkClient::verifier`] to see why a token was rejected.
    pub async fn verify_webhook(&self, token: &str, secret: &str) -> Option<WebhookPayload> {
        match self
            .verifier
            .verify_as::<WebhookPayload>(token, secret.as_bytes(), &VerifyOptions::default())
            .await
        {
            Ok(payload) => Some(payload),
            Err(e) => {
                tracing::warn!("Rejected webhook token: {}", e);
                None
            }
        }
    }
}
