//! Configuration types for the Seller Center client.
//!
//! This module provides the `SellerCenterConfig` type: the API endpoint, the
//! seller credentials used for signing, the API version and transport timeouts.

use crate::error::{ConfigurationError, SellerCenterError};
use crate::parameters::ParameterSet;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

/// Default API version sent with every request.
pub const DEFAULT_VERSION: &str = "1.0";
/// Response format requested from the API.
pub const RESPONSE_FORMAT: &str = "XML";

/// Configuration for the Seller Center client.
#[derive(Clone)]
pub struct SellerCenterConfig {
    /// API endpoint (e.g., "https://sellercenter-api.example.com/").
    pub endpoint: Url,

    /// Seller account (the `UserID` parameter).
    pub user_id: String,

    /// API key used to sign requests.
    pub api_key: SecretString,

    /// API version.
    pub version: String,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Read timeout for a single request.
    pub read_timeout: Duration,

    /// Verify SSL certificates.
    pub verify_ssl: bool,

    /// User-Agent header, when overriding the default one.
    pub user_agent: Option<String>,
}

impl std::fmt::Debug for SellerCenterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SellerCenterConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("user_id", &self.user_id)
            .field("version", &self.version)
            .field("connect_timeout", &self.connect_timeout)
            .field("read_timeout", &self.read_timeout)
            .field("verify_ssl", &self.verify_ssl)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl SellerCenterConfig {
    /// Create a new configuration builder.
    pub fn builder() -> SellerCenterConfigBuilder {
        SellerCenterConfigBuilder::default()
    }

    /// The API key used for signing.
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Parameters shared by every request: `UserID`, `Version` and `Format`.
    pub fn base_parameters(&self) -> ParameterSet {
        ParameterSet::new()
            .with("UserID", &self.user_id)
            .with("Version", &self.version)
            .with("Format", RESPONSE_FORMAT)
    }
}

/// Builder for Seller Center configuration.
#[derive(Default)]
pub struct SellerCenterConfigBuilder {
    endpoint: Option<Url>,
    user_id: Option<String>,
    api_key: Option<SecretString>,
    version: Option<String>,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    verify_ssl: Option<bool>,
    user_agent: Option<String>,
}

impl SellerCenterConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Result<Self, SellerCenterError> {
        let url_str = endpoint.into();
        let url = Url::parse(&url_str).map_err(|e| {
            SellerCenterError::Configuration(ConfigurationError::InvalidEndpoint {
                url: url_str,
                details: e.to_string(),
            })
        })?;
        self.endpoint = Some(url);
        Ok(self)
    }

    /// Set the endpoint URL (infallible version).
    pub fn endpoint_url(mut self, endpoint: Url) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Set the seller user id.
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::new(api_key.into()));
        self
    }

    /// Set the API version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the read timeout.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Enable or disable SSL verification.
    pub fn verify_ssl(mut self, verify: bool) -> Self {
        self.verify_ssl = Some(verify);
        self
    }

    /// Override the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `SELLER_CENTER_ENDPOINT`, `SELLER_CENTER_USER_ID`,
    /// `SELLER_CENTER_API_KEY`, `SELLER_CENTER_VERSION` and
    /// `SELLER_CENTER_TIMEOUT_MS`. Values already set on the builder are
    /// overwritten by the ones present in the environment.
    pub fn from_env(mut self) -> Result<Self, SellerCenterError> {
        if let Ok(endpoint) = std::env::var("SELLER_CENTER_ENDPOINT") {
            self = self.endpoint(endpoint)?;
        }
        if let Ok(user_id) = std::env::var("SELLER_CENTER_USER_ID") {
            self.user_id = Some(user_id);
        }
        if let Ok(api_key) = std::env::var("SELLER_CENTER_API_KEY") {
            self.api_key = Some(SecretString::new(api_key));
        }
        if let Ok(version) = std::env::var("SELLER_CENTER_VERSION") {
            self.version = Some(version);
        }
        if let Ok(val) = std::env::var("SELLER_CENTER_TIMEOUT_MS") {
            let ms: u64 = val.parse().map_err(|_| {
                SellerCenterError::Configuration(ConfigurationError::InvalidConfiguration {
                    field: "SELLER_CENTER_TIMEOUT_MS".to_string(),
                    message: format!("'{}' is not a number of milliseconds", val),
                })
            })?;
            self.read_timeout = Some(Duration::from_millis(ms));
        }

        Ok(self)
    }

    /// Build the configuration.
    pub fn build(self) -> Result<SellerCenterConfig, SellerCenterError> {
        let endpoint = self.endpoint.ok_or(ConfigurationError::MissingEndpoint)?;

        let user_id = self
            .user_id
            .filter(|u| !u.trim().is_empty())
            .ok_or(ConfigurationError::MissingUserId)?;

        let api_key = self
            .api_key
            .filter(|k| !k.expose_secret().is_empty())
            .ok_or(ConfigurationError::MissingApiKey)?;

        let version = self.version.unwrap_or_else(|| DEFAULT_VERSION.to_string());
        if version.trim().is_empty() {
            return Err(SellerCenterError::Configuration(
                ConfigurationError::InvalidConfiguration {
                    field: "version".to_string(),
                    message: "Version must not be empty".to_string(),
                },
            ));
        }

        let read_timeout = self.read_timeout.unwrap_or(Duration::from_secs(30));
        if read_timeout.is_zero() {
            return Err(SellerCenterError::Configuration(
                ConfigurationError::InvalidConfiguration {
                    field: "read_timeout".to_string(),
                    message: "Timeout must be greater than zero".to_string(),
                },
            ));
        }

        Ok(SellerCenterConfig {
            endpoint,
            user_id,
            api_key,
            version,
            connect_timeout: self.connect_timeout.unwrap_or(Duration::from_secs(5)),
            read_timeout,
            verify_ssl: self.verify_ssl.unwrap_or(true),
            user_agent: self.user_agent,
        })
    }
}
