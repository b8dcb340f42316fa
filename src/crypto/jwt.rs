//! Compact JWT verification for Paylink webhook notifications
//!
//! Only the two HMAC algorithms the platform signs with are understood. The
//! caller's allow-list decides which of them a token may use; the `alg` found
//! in a token header can only narrow that choice, never widen it.

use super::backend::{BackendKind, CryptoBackend};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Decoded JWT claim set
pub type Claims = Map<String, Value>;

/// Errors produced while decoding or verifying a token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// Token structure, encoding or JSON is invalid
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// Header names an algorithm outside the allow-list
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Signature does not match the header and payload
    #[error("Invalid signature")]
    InvalidSignature,

    /// `exp` claim is at or before the current time
    #[error("Token has expired")]
    Expired,

    /// `nbf` claim is after the current time
    #[error("Token is not yet valid")]
    NotYetValid,

    /// Secret was rejected by the HMAC implementation
    #[error("Invalid HMAC key")]
    InvalidKey,
}

impl JwtError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedToken(message.into())
    }
}

/// HMAC algorithms accepted for webhook tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// HMAC with SHA-256
    HS256,
    /// HMAC with SHA-512
    HS512,
}

impl Algorithm {
    /// Name used in the JWT `alg` header
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::HS256 => "HS256",
            Algorithm::HS512 => "HS512",
        }
    }

    /// Length of the raw signature in bytes
    pub fn signature_len(&self) -> usize {
        match self {
            Algorithm::HS256 => 32,
            Algorithm::HS512 => 64,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HS256" => Ok(Algorithm::HS256),
            "HS512" => Ok(Algorithm::HS512),
            other => Err(JwtError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// JOSE header of a compact token
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// Signing algorithm named by the issuer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,
    /// Media type, normally `JWT`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    /// Any other header parameters
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Header {
    /// Header for a token signed with `algorithm`
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            alg: Some(algorithm.as_str().to_string()),
            typ: Some("JWT".to_string()),
            extra: Map::new(),
        }
    }
}

/// Header and payload of a token, decoded without any signature check
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedToken {
    pub header: Header,
    pub payload: Claims,
}

/// Options controlling verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyOptions {
    /// Algorithms a token is allowed to declare
    pub algorithms: Vec<Algorithm>,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            algorithms: vec![Algorithm::HS256, Algorithm::HS512],
        }
    }
}

impl VerifyOptions {
    /// Create options with the default allow-list
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the allow-list
    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// Resolve the header's `alg` against the allow-list
    pub fn permitted(&self, alg: Option<&str>) -> Result<Algorithm, JwtError> {
        let name = alg.unwrap_or_default();
        self.algorithms
            .iter()
            .copied()
            .find(|algorithm| algorithm.as_str() == name)
            .ok_or_else(|| {
                if name.is_empty() {
                    JwtError::UnsupportedAlgorithm("<missing>".to_string())
                } else {
                    JwtError::UnsupportedAlgorithm(name.to_string())
                }
            })
    }
}

/// The three segments of a compact token
struct Segments<'a> {
    header: &'a str,
    payload: &'a str,
    signing_input: &'a str,
    signature: &'a str,
}

impl<'a> Segments<'a> {
    fn split(token: &'a str) -> Result<Self, JwtError> {
        let count = token.split('.').count();
        if count != 3 {
            return Err(JwtError::malformed(format!(
                "expected 3 segments, found {}",
                count
            )));
        }

        let (signing_input, signature) = token
            .rsplit_once('.')
            .ok_or_else(|| JwtError::malformed("missing signature segment"))?;
        let (header, payload) = signing_input
            .split_once('.')
            .ok_or_else(|| JwtError::malformed("missing payload segment"))?;

        Ok(Self {
            header,
            payload,
            signing_input,
            signature,
        })
    }
}

/// Verifies compact HMAC-signed JWTs against a shared secret
#[derive(Debug, Clone)]
pub struct Verifier {
    backend: Arc<dyn CryptoBackend>,
}

impl Default for Verifier {
    fn default() -> Self {
        Self::with_backend(BackendKind::default())
    }
}

impl Verifier {
    /// Create a verifier over an explicit backend
    pub fn new(backend: Arc<dyn CryptoBackend>) -> Self {
        Self { backend }
    }

    /// Create a verifier over one of the bundled backends
    pub fn with_backend(kind: BackendKind) -> Self {
        Self::new(kind.build())
    }

    /// Backend in use
    pub fn backend(&self) -> &dyn CryptoBackend {
        self.backend.as_ref()
    }

    /// Decode header and payload without checking the signature.
    ///
    /// The result is attacker-controlled until [`Verifier::verify`] has
    /// accepted the same token.
    pub fn decode(&self, token: &str) -> Result<DecodedToken, JwtError> {
        let segments = Segments::split(token)?;
        Ok(DecodedToken {
            header: self.decode_segment(segments.header, "header")?,
            payload: self.decode_segment(segments.payload, "payload")?,
        })
    }

    /// Verify `token` against `secret` at the current time
    pub async fn verify(
        &self,
        token: &str,
        secret: &[u8],
        options: &VerifyOptions,
    ) -> Result<Claims, JwtError> {
        let now = chrono::Utc::now().timestamp();
        self.verify_at(token, secret, options, now).await
    }

    /// Verify `token` against `secret` as of `now` (Unix seconds)
    pub async fn verify_at(
        &self,
        token: &str,
        secret: &[u8],
        options: &VerifyOptions,
        now: i64,
    ) -> Result<Claims, JwtError> {
        let segments = Segments::split(token)?;

        let header: Header = self.decode_segment(segments.header, "header")?;
        let algorithm = options.permitted(header.alg.as_deref())?;

        let expected = self
            .backend
            .sign(algorithm, secret, segments.signing_input.as_bytes())
            .await?;
        let supplied = self.backend.base64url_decode(segments.signature)?;

        if !self.backend.constant_time_eq(&expected, &supplied) {
            return Err(JwtError::InvalidSignature);
        }

        let claims: Claims = self.decode_segment(segments.payload, "payload")?;
        check_time_claims(&claims, now)?;

        Ok(claims)
    }

    /// Verify and deserialize the claim set into `T`
    pub async fn verify_as<T: DeserializeOwned>(
        &self,
        token: &str,
        secret: &[u8],
        options: &VerifyOptions,
    ) -> Result<T, JwtError> {
        let claims = self.verify(token, secret, options).await?;
        serde_json::from_value(Value::Object(claims))
            .map_err(|e| JwtError::malformed(format!("unexpected claim set: {}", e)))
    }

    /// Sign `claims` into a compact token
    pub async fn sign<T>(
        &self,
        claims: &T,
        secret: &[u8],
        algorithm: Algorithm,
    ) -> Result<String, JwtError>
    where
        T: Serialize + ?Sized + Sync,
    {
        let header = serde_json::to_vec(&Header::new(algorithm))
            .map_err(|e| JwtError::malformed(format!("header encoding failed: {}", e)))?;
        let payload = serde_json::to_vec(claims)
            .map_err(|e| JwtError::malformed(format!("claims encoding failed: {}", e)))?;

        let signing_input = format!(
            "{}.{}",
            self.backend.base64url_encode(&header),
            self.backend.base64url_encode(&payload)
        );
        let signature = self
            .backend
            .sign(algorithm, secret, signing_input.as_bytes())
            .await?;

        Ok(format!(
            "{}.{}",
            signing_input,
            self.backend.base64url_encode(&signature)
        ))
    }

    fn decode_segment<T: DeserializeOwned>(
        &self,
        segment: &str,
        name: &str,
    ) -> Result<T, JwtError> {
        let bytes = self.backend.base64url_decode(segment)?;
        serde_json::from_slice(&bytes)
            .map_err(|e| JwtError::malformed(format!("{} is not a JSON object: {}", name, e)))
    }
}

fn numeric_claim(claims: &Claims, name: &str) -> Result<Option<f64>, JwtError> {
    match claims.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(_) => Err(JwtError::malformed(format!(
            "`{}` claim must be a number",
            name
        ))),
    }
}

fn check_time_claims(claims: &Claims, now: i64) -> Result<(), JwtError> {
    let now = now as f64;

    if let Some(exp) = numeric_claim(claims, "exp")? {
        if now >= exp {
            return Err(JwtError::Expired);
        }
    }

    if let Some(nbf) = numeric_claim(claims, "nbf")? {
        if now < nbf {
            return Err(JwtError::NotYetValid);
        }
    }

    // iat is only type-checked
    numeric_claim(claims, "iat")?;

    Ok(())
}
