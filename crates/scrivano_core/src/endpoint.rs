//! Endpoint configuration for the chat-completion transport.

use scrivano_error::{ConfigError, ScrivanoResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 90;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Connection settings for one chat-completion endpoint.
///
/// Immutable for the lifetime of a transport instance; build it explicitly
/// or load it from a TOML file. There are no implicit global defaults beyond
/// the request timeout.
///
/// # Examples
///
/// ```
/// use scrivano_core::EndpointConfig;
///
/// let config = EndpointConfig::builder()
///     .base_url("https://llm.example.com:57987")
///     .username("root")
///     .password("secret")
///     .build()
///     .unwrap();
///
/// assert_eq!(*config.timeout_secs(), 90);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct EndpointConfig {
    /// Base URL of the endpoint, e.g. `https://llm.example.com:57987`
    base_url: String,
    /// Basic-auth username
    username: String,
    /// Basic-auth password
    password: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    #[builder(default = "DEFAULT_TIMEOUT_SECS")]
    timeout_secs: u64,
}

impl EndpointConfig {
    /// Returns a builder for constructing an EndpointConfig.
    pub fn builder() -> EndpointConfigBuilder {
        EndpointConfigBuilder::default()
    }

    /// Load endpoint configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> ScrivanoResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)).into())
    }
}
