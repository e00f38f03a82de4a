//! HTTP request types for the Vogue API client.
//!
//! This module provides the [`HttpRequest`] type and its builder. The Vogue
//! endpoint is only ever queried with `GET`, so a request is a path, a set of
//! query parameters and optional extra headers.

use std::collections::BTreeMap;

/// A `GET` request to be sent to the Vogue endpoint.
///
/// Query parameters are percent-encoded with path-segment style escaping when
/// the URL is built: spaces become `%20` rather than `+`, which keeps GraphQL
/// documents intact on the server side.
///
/// # Example
///
/// ```rust
/// use vogue_api::clients::HttpRequest;
///
/// let request = HttpRequest::builder("graphql")
///     .query_param("query", "query{allBrands{Brand{name slug}}}")
///     .build();
///
/// assert_eq!(
///     request.query_string(),
///     "query=query%7BallBrands%7BBrand%7Bname%20slug%7D%7D%7D"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The path (relative to the base URL) for this request.
    pub path: String,
    /// Query parameters, in insertion order.
    pub query: Vec<(String, String)>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<BTreeMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for a request to `path`.
    #[must_use]
    pub fn builder(path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(path)
    }

    /// Returns the encoded query string (without the leading `?`).
    #[must_use]
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    path: String,
    query: Vec<(String, String)>,
    extra_headers: Option<BTreeMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
            extra_headers: None,
        }
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Sets all extra headers at once.
    #[must_use]
    pub fn extra_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.extra_headers = Some(headers);
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            path: self.path,
            query: self.query,
            extra_headers: self.extra_headers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_creates_request_with_path() {
        let request = HttpRequest::builder("graphql").build();

        assert_eq!(request.path, "graphql");
        assert!(request.query.is_empty());
        assert!(request.extra_headers.is_none());
    }

    #[test]
    fn test_query_string_uses_path_style_escaping() {
        let request = HttpRequest::builder("graphql")
            .query_param("query", "a b+c&d=e/f")
            .build();

        // Spaces are %20 (never '+'), and reserved characters are escaped
        assert_eq!(request.query_string(), "query=a%20b%2Bc%26d%3De%2Ff");
    }

    #[test]
    fn test_query_string_preserves_parameter_order() {
        let request = HttpRequest::builder("graphql")
            .query_param("query", "q")
            .query_param("operationName", "op")
            .build();

        assert_eq!(request.query_string(), "query=q&operationName=op");
    }

    #[test]
    fn test_builder_with_extra_headers() {
        let request = HttpRequest::builder("graphql")
            .header("X-Custom-Header", "custom-value")
            .build();

        let headers = request.extra_headers.unwrap();
        assert_eq!(
            headers.get("X-Custom-Header"),
            Some(&"custom-value".to_string())
        );
    }
}
