//! # Paylink Rust SDK
//!
//! A **type-safe** client for the Paylink payment platform.
//!
//! ## Features
//!
//! - 🧾 **Order creation**: Submit orders to the Paylink order API
//! - 🔗 **Payment URLs**: Build shareable, merchant-scoped payment links locally, without a network call
//! - 🔒 **Webhook verification**: Verify HS256/HS512-signed webhook tokens with constant-time signature checks
//! - 🔁 **Swappable crypto**: Pure-Rust (`hmac`/`sha2`) or `ring` backends with identical output
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use paylink::{
//!     client::{PaylinkClient, PaymentUrlOptions},
//!     types::{ClientConfig, Customer, Environment},
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PaylinkClient::new(
//!         ClientConfig::new("api-token")
//!             .with_client_key("client-key")
//!             .with_environment(Environment::Test),
//!     )?;
//!
//!     // Share a payment link
//!     let url = client.create_payment_url(
//!         PaymentUrlOptions::new("acme", 150.5)
//!             .with_title("Order #1")
//!             .with_customer(Customer::new().with_first_name("Jane")),
//!     )?;
//!     println!("Pay here: {}", url);
//!
//!     // Handle an incoming webhook
//!     # let token = "";
//!     if let Some(payload) = client.verify_webhook(token, "webhook-secret").await {
//!         println!("Order {} is {}", payload.reference, payload.status);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`types`**: Orders, customers, webhook payloads and configuration
//! - **`client`**: The [`PaylinkClient`] facade and payment URL construction
//! - **`crypto`**: JWT verification and the crypto backends
//! - **`error`**: Error handling
//!
//! ## Error handling
//!
//! Remote calls return [`Result`] values carrying a [`PaylinkError`] and
//! never panic. Webhook verification exposes precise [`crypto::JwtError`]
//! kinds through [`crypto::Verifier`], while
//! [`PaylinkClient::verify_webhook`] collapses them into `None`.

pub mod client;
pub mod crypto;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use client::{PaylinkClient, PaymentUrlOptions};
pub use crypto::{Verifier, VerifyOptions};
pub use error::{PaylinkError, Result};
pub use types::*;

/// Current version of the Paylink library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
