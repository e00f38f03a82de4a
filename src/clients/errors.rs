//! HTTP-specific error types for the Vogue API client.
//!
//! This module contains error types for the transport layer: request
//! construction failures, timeouts, network failures and empty responses.
//!
//! # Error Handling
//!
//! - [`InvalidHttpRequestError`]: The request could not be built
//! - [`HttpError`]: Unified error type encompassing all transport errors
//!
//! HTTP status codes are not treated as errors here. A non-2xx response with
//! a body is handed to the decoder like any other response.
//!
//! # Example
//!
//! ```rust,ignore
//! use vogue_api::clients::{HttpClient, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("{} bytes", response.body.len()),
//!     Err(HttpError::Timeout { timeout }) => println!("gave up after {timeout:?}"),
//!     Err(HttpError::NoData) => println!("empty response"),
//!     Err(HttpError::InvalidRequest(e)) => println!("bad request: {e}"),
//!     Err(HttpError::Network(e)) => println!("network error: {e}"),
//! }
//! ```

use std::time::Duration;

use thiserror::Error;

/// Error returned when a request cannot be constructed.
///
/// With a validated [`BaseUrl`](crate::BaseUrl) this is effectively
/// unreachable, but it is kept distinct from transport failures.
///
/// # Example
///
/// ```rust
/// use vogue_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::InvalidUrl {
///     url: "not a url/graphql".to_string(),
///     reason: "relative URL without a base".to_string(),
/// };
///
/// assert!(error.to_string().contains("not a url/graphql"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request URL could not be parsed.
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
        /// The parser's reason.
        reason: String,
    },
}

/// Unified error type for all transport errors.
///
/// # Example
///
/// ```rust,ignore
/// use vogue_api::HttpError;
///
/// match client.request(request).await {
///     Ok(response) => { /* decode */ }
///     Err(HttpError::InvalidRequest(e)) => { /* malformed URL */ }
///     Err(HttpError::Timeout { .. }) => { /* request exceeded the timeout */ }
///     Err(HttpError::NoData) => { /* server answered with an empty body */ }
///     Err(HttpError::Network(e)) => { /* connection or protocol failure */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request construction failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out after {timeout:?}")]
    Timeout {
        /// The timeout that was exceeded.
        timeout: Duration,
    },

    /// The response carried no body.
    #[error("No data returned")]
    NoData,

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
