//! Webhook notification payloads

use super::constants::statuses;
use super::order::Customer;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Lifecycle status carried by a webhook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebhookStatus {
    Pending,
    Error,
    Paid,
    Partial,
    Confirmed,
    Cancelled,
    Prepared,
    Shipped,
    Delivered,
    Completed,
    Returned,
    Refunded,
}

impl WebhookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WebhookStatus::Pending => statuses::PENDING,
            WebhookStatus::Error => statuses::ERROR,
            WebhookStatus::Paid => statuses::PAID,
            WebhookStatus::Partial => statuses::PARTIAL,
            WebhookStatus::Confirmed => statuses::CONFIRMED,
            WebhookStatus::Cancelled => statuses::CANCELLED,
            WebhookStatus::Prepared => statuses::PREPARED,
            WebhookStatus::Shipped => statuses::SHIPPED,
            WebhookStatus::Delivered => statuses::DELIVERED,
            WebhookStatus::Completed => statuses::COMPLETED,
            WebhookStatus::Returned => statuses::RETURNED,
            WebhookStatus::Refunded => statuses::REFUNDED,
        }
    }

    /// Whether funds have been received for the order
    pub fn is_paid(&self) -> bool {
        matches!(
            self,
            WebhookStatus::Paid
                | WebhookStatus::Confirmed
                | WebhookStatus::Prepared
                | WebhookStatus::Shipped
                | WebhookStatus::Delivered
                | WebhookStatus::Completed
        )
    }
}

impl fmt::Display for WebhookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WebhookStatus {
    type Err = crate::PaylinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_value(Value::String(s.to_string()))
            .map_err(|_| crate::PaylinkError::config(format!("Unknown webhook status '{}'", s)))
    }
}

/// Claims of a verified webhook token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub facilitator: String,
    pub provider: String,
    pub provider_id: String,
    /// Merchant reference of the order
    pub reference: String,
    pub currency: String,
    pub amount: Decimal,
    /// Payer as reported by the provider
    #[serde(default)]
    pub client: Customer,
    pub status: WebhookStatus,
    /// Remaining claims such as `iat` and `exp`
    #[serde(flatten)]
    pub claims: BTreeMap<String, Value>,
}
