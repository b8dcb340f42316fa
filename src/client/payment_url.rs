//! Payment URL construction
//!
//! A payment URL points the payer at the merchant's order page and carries
//! the whole order inline as an order token: the standard base64 encoding of
//! the order's JSON. Building one needs no network access.

use crate::types::constants::DEFAULT_CURRENCY_CODE;
use crate::types::Customer;
use crate::{PaylinkError, Result};
use base64::{engine::general_purpose, Engine as _};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::Rng;
use serde::{Deserialize, Serialize, Serializer};

/// Characters escaped in the username path segment. Everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is percent-encoded.
const USERNAME_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const REFERENCE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Largest integer an f64 represents exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Options for [`PaylinkClient::create_payment_url`](super::PaylinkClient::create_payment_url)
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentUrlOptions {
    /// Merchant username the order belongs to
    pub username: String,
    /// Amount to charge
    pub total: f64,
    /// Defaults to `JMD`
    pub currency_code: Option<String>,
    /// Defaults to `Payment to {username}`
    pub title: Option<String>,
    /// Defaults to a random identifier
    pub reference_id: Option<String>,
    pub customer: Option<Customer>,
    /// Payment link the order is attributed to
    pub payment_link_id: Option<String>,
}

impl PaymentUrlOptions {
    pub fn new(username: impl Into<String>, total: f64) -> Self {
        Self {
            username: username.into(),
            total,
            currency_code: None,
            title: None,
            reference_id: None,
            customer: None,
            payment_link_id: None,
        }
    }

    pub fn with_currency_code(mut self, currency_code: impl Into<String>) -> Self {
        self.currency_code = Some(currency_code.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_reference_id(mut self, reference_id: impl Into<String>) -> Self {
        self.reference_id = Some(reference_id.into());
        self
    }

    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customer = Some(customer);
        self
    }

    pub fn with_payment_link_id(mut self, payment_link_id: impl Into<String>) -> Self {
        self.payment_link_id = Some(payment_link_id.into());
        self
    }

    /// Reject options no URL can be built from
    pub fn validate(&self) -> Result<()> {
        if self.username.is_empty() {
            return Err(PaylinkError::MissingUsername);
        }
        if !self.total.is_finite() {
            return Err(PaylinkError::InvalidTotal { total: self.total });
        }
        Ok(())
    }
}

/// Order fields carried inside an order token, in wire order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTokenPayload {
    #[serde(serialize_with = "serialize_js_number")]
    pub total: f64,
    pub currency_code: String,
    pub title: String,
    pub reference_id: String,
    pub customer: Customer,
}

impl OrderTokenPayload {
    /// Apply defaults to `options`. Call [`PaymentUrlOptions::validate`] first.
    pub fn from_options(options: &PaymentUrlOptions) -> Self {
        let customer = options.customer.clone().unwrap_or_default();
        Self {
            total: options.total,
            currency_code: options
                .currency_code
                .clone()
                .unwrap_or_else(|| DEFAULT_CURRENCY_CODE.to_string()),
            title: options
                .title
                .clone()
                .unwrap_or_else(|| format!("Payment to {}", options.username)),
            reference_id: options
                .reference_id
                .clone()
                .unwrap_or_else(generate_reference_id),
            customer: customer.merged_over_default(),
        }
    }

    /// Encode as an order token
    pub fn encode(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(general_purpose::STANDARD.encode(json))
    }

    /// Decode an order token
    pub fn decode(token: &str) -> Result<Self> {
        let decoded = general_purpose::STANDARD.decode(token)?;
        let payload = serde_json::from_slice(&decoded)?;
        Ok(payload)
    }
}

/// Render integral amounts without a fractional part (`150`, not `150.0`)
fn serialize_js_number<S: Serializer>(
    value: &f64,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Random 20 to 24 character lowercase alphanumeric reference.
///
/// Not guaranteed unique; callers that need uniqueness pass their own.
pub fn generate_reference_id() -> String {
    let mut rng = rand::thread_rng();
    let len = rng.gen_range(20..=24);
    (0..len)
        .map(|_| REFERENCE_ALPHABET[rng.gen_range(0..REFERENCE_ALPHABET.len())] as char)
        .collect()
}

/// Scheme, host and port of `base_url`, dropping the API path
pub fn host_base(base_url: &str) -> Result<String> {
    let parsed = url::Url::parse(base_url)
        .map_err(|e| PaylinkError::config(format!("Invalid base URL: {}", e)))?;
    Ok(parsed.origin().ascii_serialization())
}

/// Build the payment URL for `options` on the host of `base_url`
pub fn build_payment_url(base_url: &str, options: &PaymentUrlOptions) -> Result<String> {
    options.validate()?;

    let order_token = OrderTokenPayload::from_options(options).encode()?;
    let username = utf8_percent_encode(&options.username, USERNAME_ENCODE_SET);

    Ok(format!(
        "{}/merchants/{}/order?link_token={}&order_token={}",
        host_base(base_url)?,
        username,
        options.payment_link_id.as_deref().unwrap_or_default(),
        order_token
    ))
}
