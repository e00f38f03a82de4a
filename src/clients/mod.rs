//! HTTP client types for Vogue API communication.
//!
//! This module provides the transport layer for the Vogue GraphQL endpoint.
//! It builds `GET` requests, applies the default headers and the timeout,
//! and reads responses fully into memory.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for endpoint communication
//! - [`HttpRequest`]: A request to be sent to the endpoint
//! - [`HttpResponse`]: A fully read response
//! - [`HttpError`]: Transport-level error type
//! - [`graphql::GraphqlClient`]: Higher-level GraphQL client
//! - [`graphql::GraphqlError`]: GraphQL-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use vogue_api::VogueConfig;
//! use vogue_api::clients::{HttpClient, HttpRequest};
//!
//! let client = HttpClient::new(&VogueConfig::default())?;
//!
//! let request = HttpRequest::builder("graphql")
//!     .query_param("query", "query{allBrands{Brand{name slug}}}")
//!     .build();
//!
//! let response = client.request(request).await?;
//! println!("{}", response.text());
//! ```
//!
//! # Retry Behavior
//!
//! There is none. Each call is a single attempt bounded by the configured
//! timeout.

mod errors;
pub mod graphql;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::HttpClient;
pub use http_request::{HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

// Re-export GraphQL client types at the clients module level
pub use graphql::{GraphqlClient, GraphqlError, GraphqlErrorMessage, GraphqlResponse};
