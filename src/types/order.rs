//! Order and customer types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Customer details attached to an order or reported by a webhook
///
/// The four named fields are the ones the platform knows about; anything else
/// a caller wants to pass along goes into `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Additional free-form fields
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Customer {
    /// Create an empty customer
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set a field by name, routing known names to their typed slot
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match key.as_str() {
            "first_name" => self.first_name = Some(value),
            "last_name" => self.last_name = Some(value),
            "email" => self.email = Some(value),
            "phone" => self.phone = Some(value),
            _ => {
                self.extra.insert(key, Value::String(value));
            }
        }
        self
    }

    /// Lay this customer over the all-empty default, field by field.
    ///
    /// Every named field is present in the result; fields this customer
    /// sets win, the rest are empty strings.
    pub fn merged_over_default(&self) -> Self {
        let field = |value: &Option<String>| Some(value.clone().unwrap_or_default());
        Self {
            first_name: field(&self.first_name),
            last_name: field(&self.last_name),
            email: field(&self.email),
            phone: field(&self.phone),
            extra: self.extra.clone(),
        }
    }

    /// Whether no field carries a value
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.extra.is_empty()
    }
}

/// Order submitted to the order creation endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPlacementRequest {
    /// Order amount in major currency units
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    /// Title shown to the payer
    pub title: String,
    /// Merchant-defined order kind
    pub kind: String,
    /// Payer details
    #[serde(default)]
    pub customer: Customer,
    /// Merchant reference for reconciliation
    pub reference_id: String,
    /// ISO 4217 currency code
    pub currency_code: String,
}

impl OrderPlacementRequest {
    /// Create a new order request
    pub fn new(
        total: Decimal,
        title: impl Into<String>,
        kind: impl Into<String>,
        reference_id: impl Into<String>,
        currency_code: impl Into<String>,
    ) -> Self {
        Self {
            total,
            title: title.into(),
            kind: kind.into(),
            customer: Customer::default(),
            reference_id: reference_id.into(),
            currency_code: currency_code.into(),
        }
    }

    /// Set the customer
    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customer = customer;
        self
    }

    /// Check the order before it goes on the wire
    pub fn validate(&self) -> crate::Result<()> {
        if self.total < Decimal::ZERO {
            return Err(crate::PaylinkError::invalid_order(format!(
                "total must not be negative, got {}",
                self.total
            )));
        }
        Ok(())
    }
}

/// Response from the order creation endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPlacementResponse {
    /// Outcome reported by the platform
    pub state: String,
    /// The created order
    pub result: OrderResult,
}

/// Order as recorded by the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResult {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub total: Decimal,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub reference_id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub customer: Customer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default)]
    pub title: String,
    /// Links the platform generated for this order
    #[serde(default)]
    pub urls: BTreeMap<String, Value>,
}

impl OrderResult {
    /// Look up a generated link by name
    pub fn url(&self, name: &str) -> Option<&str> {
        self.urls.get(name).and_then(Value::as_str)
    }
}
