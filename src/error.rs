//! Error types for the Vogue API client.
//!
//! This module contains the configuration and validation errors raised before
//! any request leaves the process. Transport and decoding errors live next to
//! the clients that produce them (see [`crate::clients`]).
//!
//! # Example
//!
//! ```rust
//! use vogue_api::{ConfigError, Slug};
//!
//! let result = Slug::new("");
//! assert!(matches!(result, Err(ConfigError::InvalidSlug { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building configuration or validated values.
///
/// Each variant carries the offending input so that callers (and the CLI)
/// can print an actionable message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL is not an absolute `http`/`https` URL.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The URL that was provided.
        url: String,
        /// Why the URL was rejected.
        reason: String,
    },

    /// A header name or value cannot be sent over HTTP.
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader {
        /// The header name that was provided.
        name: String,
        /// Why the header was rejected.
        reason: String,
    },

    /// The request timeout must be greater than zero.
    #[error("Invalid timeout: the request timeout must be greater than zero.")]
    InvalidTimeout,

    /// A slug cannot be placed inside a GraphQL string literal.
    #[error("Invalid slug '{slug}': {reason}")]
    InvalidSlug {
        /// The slug that was provided.
        slug: String,
        /// Why the slug was rejected.
        reason: &'static str,
    },

    /// A full show slug is not of the form `{season-slug}/{brand-slug}`.
    #[error("Invalid show slug '{slug}'. Expected format: '{{season-slug}}/{{brand-slug}}' (e.g., 'fall-2023-ready-to-wear/chanel').")]
    InvalidFullSlug {
        /// The full slug that was provided.
        slug: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_slug_error_message() {
        let error = ConfigError::InvalidSlug {
            slug: "bad\"slug".to_string(),
            reason: "contains a double quote",
        };
        let message = error.to_string();
        assert!(message.contains("bad\"slug"));
        assert!(message.contains("double quote"));
    }

    #[test]
    fn test_invalid_full_slug_error_message() {
        let error = ConfigError::InvalidFullSlug {
            slug: "chanel".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("'chanel'"));
        assert!(message.contains("{season-slug}/{brand-slug}"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "ftp://example.com".to_string(),
            reason: "scheme must be http or https".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp://example.com"));
        assert!(message.contains("http or https"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::InvalidTimeout;
        let _: &dyn std::error::Error = &error;
    }
}
