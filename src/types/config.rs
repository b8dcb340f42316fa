//! Client configuration types

use super::constants::{LIVE_BASE_URL, TEST_BASE_URL};
use crate::crypto::BackendKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Platform environment the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Live,
    Test,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Live => "live",
            Environment::Test => "test",
        }
    }

    /// Order API base URL for this environment
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Live => LIVE_BASE_URL,
            Environment::Test => TEST_BASE_URL,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = crate::PaylinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(Environment::Live),
            "test" => Ok(Environment::Test),
            other => Err(crate::PaylinkError::config(format!(
                "Unknown environment '{}', expected 'live' or 'test'",
                other
            ))),
        }
    }
}

/// Paylink client configuration
#[derive(Clone)]
pub struct ClientConfig {
    /// API token sent as a bearer credential
    pub token: String,
    /// Merchant client key
    pub client_key: Option<String>,
    /// Environment selecting the default base URL
    pub environment: Environment,
    /// Explicit base URL, overriding the environment's
    pub base_url: Option<String>,
    /// Crypto backend for webhook verification
    pub backend: BackendKind,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"<redacted>")
            .field("client_key", &self.client_key.as_ref().map(|_| "<redacted>"))
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("backend", &self.backend)
            .finish()
    }
}

impl ClientConfig {
    /// Create a new config for the live environment
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            client_key: None,
            environment: Environment::default(),
            base_url: None,
            backend: BackendKind::default(),
        }
    }

    /// Set the client key
    pub fn with_client_key(mut self, client_key: impl Into<String>) -> Self {
        self.client_key = Some(client_key.into());
        self
    }

    /// Set the environment
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Override the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the crypto backend
    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    /// Base URL requests go to
    pub fn resolved_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
    }

    /// Validate the configuration
    pub fn validate(&self) -> crate::Result<()> {
        let base_url = self.resolved_base_url();
        if base_url.is_empty() {
            return Err(crate::PaylinkError::config("Base URL cannot be empty"));
        }

        let parsed = url::Url::parse(base_url)
            .map_err(|e| crate::PaylinkError::config(format!("Invalid base URL: {}", e)))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(crate::PaylinkError::config(
                "Base URL must start with http:// or https://",
            ));
        }

        if parsed.host_str().is_none() {
            return Err(crate::PaylinkError::config("Base URL must include a host"));
        }

        Ok(())
    }
}
