//! Backend on `ring`'s native HMAC implementation

use super::backend::CryptoBackend;
use super::jwt::{Algorithm, JwtError};
use async_trait::async_trait;
use ring::hmac;

/// Backend using `ring` for signing and `base64-url` for encoding
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeBackend;

impl NativeBackend {
    fn key(algorithm: Algorithm, secret: &[u8]) -> hmac::Key {
        let algorithm = match algorithm {
            Algorithm::HS256 => hmac::HMAC_SHA256,
            Algorithm::HS512 => hmac::HMAC_SHA512,
        };
        hmac::Key::new(algorithm, secret)
    }
}

#[async_trait]
impl CryptoBackend for NativeBackend {
    fn name(&self) -> &'static str {
        "native"
    }

    async fn sign(
        &self,
        algorithm: Algorithm,
        key: &[u8],
        message: &[u8],
    ) -> Result<Vec<u8>, JwtError> {
        let tag = hmac::sign(&Self::key(algorithm, key), message);
        Ok(tag.as_ref().to_vec())
    }

    fn constant_time_eq(&self, a: &[u8], b: &[u8]) -> bool {
        if a.len() != b.len() {
            return false;
        }
        // Accumulate every difference so the loop never exits early.
        let diff = a
            .iter()
            .zip(b.iter())
            .fold(0u8, |acc, (x, y)| acc | (x ^ y));
        std::hint::black_box(diff) == 0
    }

    fn base64url_encode(&self, bytes: &[u8]) -> String {
        base64_url::encode(bytes)
    }

    fn base64url_decode(&self, encoded: &str) -> Result<Vec<u8>, JwtError> {
        if encoded.contains('=') {
            return Err(JwtError::malformed("padded base64url segment"));
        }
        base64_url::decode(encoded)
            .map_err(|e| JwtError::malformed(format!("invalid base64url segment: {}", e)))
    }
}
