//! Platform constants: hosts, headers and defaults

/// Order API base URL for live payments
pub const LIVE_BASE_URL: &str = "https://api.paylink.app/api/v1";

/// Order API base URL for the sandbox
pub const TEST_BASE_URL: &str = "https://sandbox.paylink.app/api/v1";

/// Currency used when a payment URL does not name one
pub const DEFAULT_CURRENCY_CODE: &str = "JMD";

/// Header carrying the merchant's client key
pub const CLIENT_KEY_HEADER: &str = "Client-Key";

/// Path of the order creation endpoint, relative to the base URL
pub const ORDERS_PATH: &str = "/orders";

/// Webhook status values
pub mod statuses {
    pub const PENDING: &str = "pending";
    pub const ERROR: &str = "error";
    pub const PAID: &str = "paid";
    pub const PARTIAL: &str = "partial";
    pub const CONFIRMED: &str = "confirmed";
    pub const CANCELLED: &str = "cancelled";
    pub const PREPARED: &str = "prepared";
    pub const SHIPPED: &str = "shipped";
    pub const DELIVERED: &str = "delivered";
    pub const COMPLETED: &str = "completed";
    pub const RETURNED: &str = "returned";
    pub const REFUNDED: &str = "refunded";

    /// Every status a webhook may carry
    pub fn all() -> Vec<&'static str> {
        vec![
            PENDING, ERROR, PAID, PARTIAL, CONFIRMED, CANCELLED, PREPARED, SHIPPED, DELIVERED,
            COMPLETED, RETURNED, REFUNDED,
        ]
    }
}
