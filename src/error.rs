//! Error types for the Paylink SDK

use crate::crypto::jwt::JwtError;
use thiserror::Error;

/// Result type alias for Paylink operations
pub type Result<T> = std::result::Result<T, PaylinkError>;

/// Errors surfaced by the Paylink client
#[derive(Debug, Error)]
pub enum PaylinkError {
    /// Client configuration is unusable
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Payment URL requested without a merchant username
    #[error("A merchant username is required to build a payment URL")]
    MissingUsername,

    /// Payment URL requested with a total that is not a finite number
    #[error("Payment total must be a finite number, got {total}")]
    InvalidTotal { total: f64 },

    /// Order rejected locally before it was sent
    #[error("Invalid order: {message}")]
    InvalidOrder { message: String },

    /// Remote API answered with a non-success status
    #[error("Order API responded with status {status}: {body}")]
    Status { status: u16, body: String },

    /// Transport-level failure talking to the order API
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Base64 payload could not be decoded
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Webhook token failed verification
    #[error("JWT error: {0}")]
    Jwt(#[from] JwtError),
}

impl PaylinkError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid order error
    pub fn invalid_order(message: impl Into<String>) -> Self {
        Self::InvalidOrder {
            message: message.into(),
        }
    }

    /// Whether the failure happened on the remote side of an order call
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::Http(_))
    }
}
