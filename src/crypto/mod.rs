//! Cryptographic utilities for Paylink webhooks
//!
//! Paylink signs webhook notifications as compact JWTs using a secret shared
//! with the merchant. This module verifies those tokens.
//!
//! # Architecture
//!
//! The crypto module is organized as follows:
//! - [`jwt`] - Token parsing, signing and verification ([`Verifier`])
//! - [`backend`] - The [`CryptoBackend`] trait and backend selection
//! - [`portable`] - Pure-Rust backend (`hmac`, `sha2`, `subtle`)
//! - [`native`] - `ring` backend
//!
//! # Examples
//!
//! ## Verifying a webhook token
//!
//! ```no_run
//! use paylink::crypto::{Verifier, VerifyOptions};
//!
//! # async fn example(token: &str) -> Result<(), paylink::crypto::JwtError> {
//! let verifier = Verifier::default();
//! let claims = verifier
//!     .verify(token, b"webhook-secret", &VerifyOptions::default())
//!     .await?;
//! println!("status: {:?}", claims.get("status"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Choosing a backend
//!
//! ```
//! use paylink::crypto::{BackendKind, Verifier};
//!
//! let verifier = Verifier::with_backend(BackendKind::Native);
//! assert_eq!(verifier.backend().name(), "native");
//! ```

pub mod backend;
pub mod jwt;
pub mod native;
pub mod portable;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use backend::{BackendKind, CryptoBackend};
pub use jwt::{Algorithm, Claims, DecodedToken, Header, JwtError, Verifier, VerifyOptions};
pub use native::NativeBackend;
pub use portable::PortableBackend;
