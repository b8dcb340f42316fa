//! Crypto backend abstraction for JWT verification
//!
//! The verifier needs four primitives: HMAC signing, constant-time comparison,
//! and base64url encoding in both directions. Each backend supplies all four
//! so one can be swapped for the other without touching the verifier.

use super::jwt::{Algorithm, JwtError};
use super::native::NativeBackend;
use super::portable::PortableBackend;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Primitives the JWT verifier is built on
///
/// Implementations must agree byte-for-byte: the same algorithm, key and
/// message always yield the same signature and the same encoding.
#[async_trait]
pub trait CryptoBackend: Send + Sync + fmt::Debug {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Compute the raw HMAC of `message` keyed by `key`
    async fn sign(
        &self,
        algorithm: Algorithm,
        key: &[u8],
        message: &[u8],
    ) -> Result<Vec<u8>, JwtError>;

    /// Compare two byte strings without leaking where they differ.
    ///
    /// Slices of different length compare unequal immediately.
    fn constant_time_eq(&self, a: &[u8], b: &[u8]) -> bool;

    /// Encode as unpadded base64url
    fn base64url_encode(&self, bytes: &[u8]) -> String;

    /// Decode unpadded base64url
    fn base64url_decode(&self, encoded: &str) -> Result<Vec<u8>, JwtError>;
}

/// Bundled backend implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Pure-Rust RustCrypto primitives, available on every target
    #[default]
    Portable,
    /// `ring` primitives backed by platform assembly
    Native,
}

impl BackendKind {
    /// Instantiate the backend
    pub fn build(self) -> Arc<dyn CryptoBackend> {
        match self {
            BackendKind::Portable => Arc::new(PortableBackend),
            BackendKind::Native => Arc::new(NativeBackend),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Portable => "portable",
            BackendKind::Native => "native",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = crate::PaylinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "portable" => Ok(BackendKind::Portable),
            "native" => Ok(BackendKind::Native),
            other => Err(crate::PaylinkError::config(format!(
                "Unknown crypto backend '{}'",
                other
            ))),
        }
    }
}
