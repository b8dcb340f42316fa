//! Pure-Rust backend on the RustCrypto stack

use super::backend::CryptoBackend;
use super::jwt::{Algorithm, JwtError};
use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha512};
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;
type HmacSha512 = Hmac<Sha512>;

/// Backend using `hmac`/`sha2` for signing and `subtle` for comparison
#[derive(Debug, Clone, Copy, Default)]
pub struct PortableBackend;

#[async_trait]
impl CryptoBackend for PortableBackend {
    fn name(&self) -> &'static str {
        "portable"
    }

    async fn sign(
        &self,
        algorithm: Algorithm,
        key: &[u8],
        message: &[u8],
    ) -> Result<Vec<u8>, JwtError> {
        let signature = match algorithm {
            Algorithm::HS256 => {
                let mut mac =
                    HmacSha256::new_from_slice(key).map_err(|_| JwtError::InvalidKey)?;
                mac.update(message);
                mac.finalize().into_bytes().to_vec()
            }
            Algorithm::HS512 => {
                let mut mac =
                    HmacSha512::new_from_slice(key).map_err(|_| JwtError::InvalidKey)?;
                mac.update(message);
                mac.finalize().into_bytes().to_vec()
            }
        };
        Ok(signature)
    }

    fn constant_time_eq(&self, a: &[u8], b: &[u8]) -> bool {
        if a.len() != b.len() {
            return false;
        }
        a.ct_eq(b).into()
    }

    fn base64url_encode(&self, bytes: &[u8]) -> String {
        URL_SAFE_NO_PAD.encode(bytes)
    }

    fn base64url_decode(&self, encoded: &str) -> Result<Vec<u8>, JwtError> {
        URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|e| JwtError::malformed(format!("invalid base64url segment: {}", e)))
    }
}
