//! Configuration types for the Vogue API client.
//!
//! This module replaces process-wide settings with an explicit, immutable
//! configuration object that is built once and shared by every client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`VogueConfig`]: The configuration holding endpoint, headers and timeout
//! - [`VogueConfigBuilder`]: A builder for constructing [`VogueConfig`] instances
//! - [`BaseUrl`]: A validated endpoint base URL
//! - [`Slug`]: A validated brand or season slug
//! - [`FullSlug`]: A validated `{season-slug}/{brand-slug}` show identifier
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use vogue_api::VogueConfig;
//!
//! let config = VogueConfig::builder()
//!     .timeout(Duration::from_secs(10))
//!     .header("Accept-Language", "en-US")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.timeout(), Duration::from_secs(10));
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, FullSlug, Slug};

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue};

use crate::error::ConfigError;

/// Default endpoint base URL.
pub const DEFAULT_BASE_URL: &str = "https://graphql.vogue.com";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(6);

/// Default `User-Agent`, a desktop Chrome string the endpoint accepts.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36";

/// Configuration for the Vogue API client.
///
/// # Thread Safety
///
/// `VogueConfig` is `Clone`, `Send`, and `Sync`. It is read-only once built,
/// so it can be shared freely across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use vogue_api::{VogueConfig, DEFAULT_TIMEOUT};
///
/// let config = VogueConfig::default();
/// assert_eq!(config.base_url().as_ref(), "https://graphql.vogue.com");
/// assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
/// ```
#[derive(Clone, Debug)]
pub struct VogueConfig {
    base_url: BaseUrl,
    timeout: Duration,
    user_agent: String,
    headers: BTreeMap<String, String>,
}

impl VogueConfig {
    /// Creates a new builder for constructing a `VogueConfig`.
    #[must_use]
    pub fn builder() -> VogueConfigBuilder {
        VogueConfigBuilder::new()
    }

    /// Returns the endpoint base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the `User-Agent` sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the complete header set sent with every request.
    ///
    /// `Host` is derived from the base URL, followed by `User-Agent` and
    /// `Content-Type: application/json`. Headers set through
    /// [`VogueConfigBuilder::header`] override any of these.
    #[must_use]
    pub fn default_headers(&self) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();
        headers.insert(
            "Host".to_string(),
            self.base_url.host_header().to_string(),
        );
        headers.insert("User-Agent".to_string(), self.user_agent.clone());
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        for (name, value) in &self.headers {
            headers.retain(|existing: &String, _| !existing.eq_ignore_ascii_case(name));
            headers.insert(name.clone(), value.clone());
        }
        headers
    }
}

impl Default for VogueConfig {
    fn default() -> Self {
        Self {
            base_url: BaseUrl::default(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: BTreeMap::new(),
        }
    }
}

// Verify VogueConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<VogueConfig>();
};

/// Builder for constructing [`VogueConfig`] instances.
///
/// Every field is optional.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `timeout`: [`DEFAULT_TIMEOUT`] (6 seconds)
/// - `user_agent`: [`DEFAULT_USER_AGENT`]
/// - extra headers: none
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use vogue_api::{BaseUrl, VogueConfig};
///
/// let config = VogueConfig::builder()
///     .base_url(BaseUrl::new("http://127.0.0.1:9000").unwrap())
///     .timeout(Duration::from_millis(500))
///     .user_agent("vogue-cli/0.1")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.user_agent(), "vogue-cli/0.1");
/// ```
#[derive(Debug, Default)]
pub struct VogueConfigBuilder {
    base_url: Option<BaseUrl>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    headers: Vec<(String, String)>,
}

impl VogueConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the endpoint base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Adds or overrides a header sent with every request.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Builds the [`VogueConfig`], validating timeout and headers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] for a zero timeout and
    /// [`ConfigError::InvalidHeader`] if a header name or value (including the
    /// user agent) cannot be sent over HTTP.
    pub fn build(self) -> Result<VogueConfig, ConfigError> {
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        validate_header("User-Agent", &user_agent)?;

        let mut headers = BTreeMap::new();
        for (name, value) in self.headers {
            validate_header(&name, &value)?;
            headers.insert(name, value);
        }

        Ok(VogueConfig {
            base_url: self.base_url.unwrap_or_default(),
            timeout,
            user_agent,
            headers,
        })
    }
}

fn validate_header(name: &str, value: &str) -> Result<(), ConfigError> {
    HeaderName::from_bytes(name.as_bytes()).map_err(|e| ConfigError::InvalidHeader {
        name: name.to_string(),
        reason: e.to_string(),
    })?;
    HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidHeader {
        name: name.to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}
