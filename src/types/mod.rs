//! Core types for the Paylink SDK
//!
//! This module defines the data shapes exchanged with the platform: orders and
//! their responses, customers, webhook payloads, and client configuration.
//!
//! # Architecture
//!
//! The types module is organized as follows:
//! - [`order`] - Order requests, responses and customers
//! - [`webhook`] - Webhook payloads and statuses
//! - [`config`] - Client configuration and environments
//! - [`constants`] - Hosts, header names and defaults
//!
//! # Examples
//!
//! ## Creating an order request
//!
//! ```
//! use paylink::types::{Customer, OrderPlacementRequest};
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! # fn example() -> paylink::Result<()> {
//! let order = OrderPlacementRequest::new(
//!     Decimal::from_str("150.50").unwrap(),
//!     "Order #1",
//!     "checkout",
//!     "ref-1",
//!     "JMD",
//! )
//! .with_customer(Customer::new().with_first_name("Jane").with_phone("8765550100"));
//!
//! order.validate()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Client configuration
//!
//! ```
//! use paylink::types::{ClientConfig, Environment};
//!
//! # fn example() -> paylink::Result<()> {
//! let config = ClientConfig::new("api-token")
//!     .with_client_key("client-key")
//!     .with_environment("test".parse::<Environment>()?);
//!
//! config.validate()?;
//! assert_eq!(config.resolved_base_url(), "https://sandbox.paylink.app/api/v1");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod order;
pub mod webhook;

// Re-export commonly used types
pub use config::{ClientConfig, Environment};
pub use constants::statuses;
pub use order::{Customer, OrderPlacementRequest, OrderPlacementResponse, OrderResult};
pub use webhook::{WebhookPayload, WebhookStatus};
