//! HTTP client for Vogue API communication.
//!
//! This module provides the [`HttpClient`] type, which turns an
//! [`HttpRequest`] into a single `GET` round trip bounded by the configured
//! timeout.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use crate::clients::errors::{HttpError, InvalidHttpRequestError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::VogueConfig;

/// HTTP client for making requests to the Vogue endpoint.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers (`Host`, `User-Agent`, `Content-Type`)
/// - The request timeout
/// - Reading the whole body into memory
///
/// There is no retry logic and HTTP status codes are not validated: a
/// non-2xx response is logged and returned like any other.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use vogue_api::VogueConfig;
/// use vogue_api::clients::{HttpClient, HttpRequest};
///
/// let client = HttpClient::new(&VogueConfig::default())?;
///
/// let request = HttpRequest::builder("graphql")
///     .query_param("query", "query{allSeasons{Season{name slug}}}")
///     .build();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://graphql.vogue.com`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: BTreeMap<String, String>,
    /// Whole-request timeout.
    timeout: Duration,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &VogueConfig) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url().as_ref().to_string(),
            default_headers: config.default_headers(),
            timeout: config.timeout(),
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &BTreeMap<String, String> {
        &self.default_headers
    }

    /// Returns the request timeout for this client.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the full URL for a request: `{base_url}/{path}?{query}`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidUrl`] if the result does not
    /// parse as a URL.
    pub fn url_for(&self, request: &HttpRequest) -> Result<reqwest::Url, InvalidHttpRequestError> {
        let mut url = format!("{}/{}", self.base_url, request.path.trim_start_matches('/'));
        if !request.query.is_empty() {
            url.push('?');
            url.push_str(&request.query_string());
        }

        reqwest::Url::parse(&url).map_err(|e| InvalidHttpRequestError::InvalidUrl {
            url,
            reason: e.to_string(),
        })
    }

    /// Sends a `GET` request to the Vogue endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - The URL cannot be constructed (`InvalidRequest`)
    /// - The configured timeout elapses (`Timeout`)
    /// - A network error occurs (`Network`)
    /// - The response body is empty (`NoData`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = self.url_for(&request)?;

        // Merge headers
        let mut headers = self.default_headers.clone();
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.retain(|existing: &String, _| !existing.eq_ignore_ascii_case(key));
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = self.client.get(url);
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        tracing::debug!(path = %request.path, "Sending request to Vogue API");

        let res = req_builder.send().await.map_err(|e| self.map_error(e))?;

        let code = res.status().as_u16();
        if !res.status().is_success() {
            // Status is not validated; the body is still decoded by the caller
            tracing::warn!(
                "Vogue API at {} responded with status {}",
                request.path,
                code
            );
        }

        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.bytes().await.map_err(|e| self.map_error(e))?;
        if body.is_empty() {
            return Err(HttpError::NoData);
        }

        Ok(HttpResponse::new(code, res_headers, body.to_vec()))
    }

    fn map_error(&self, error: reqwest::Error) -> HttpError {
        if error.is_timeout() {
            HttpError::Timeout {
                timeout: self.timeout,
            }
        } else {
            HttpError::Network(error)
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
