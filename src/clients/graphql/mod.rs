//! GraphQL client for the Vogue endpoint.
//!
//! This module provides a higher-level client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that sends a
//! [`Query`](crate::queries::Query) and decodes the standard GraphQL
//! response envelope.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`GraphqlClient`]: The client with `raw()` and `query()` methods
//! - [`GraphqlResponse`]: The `{"data": ..., "errors": [...]}` envelope
//! - [`GraphqlError`]: Error type for GraphQL operations
//! - [`GraphqlErrorMessage`]: One entry of the `errors` array
//!
//! # Transport
//!
//! The endpoint only takes queries on the URL: every request is a
//! `GET /graphql?query=<document>` with the document percent-encoded as a
//! path-style component (space is `%20`, never `+`). GraphQL variables are
//! not used.
//!
//! # Response Handling
//!
//! - A non-empty `errors` array yields [`GraphqlError::Api`]
//! - A missing or `null` `data` member yields the default value of the target type
//! - A body that is not valid JSON for the target type yields [`GraphqlError::Decode`]
//!
//! # Example
//!
//! ```rust,ignore
//! use vogue_api::{GraphqlClient, Query, VogueConfig};
//! use vogue_api::models::Brand;
//!
//! let client = GraphqlClient::new(&VogueConfig::default())?;
//!
//! let data: serde_json::Value = client.query(&Query::brands()).await?;
//! println!("{}", data["allBrands"]["Brand"][0]["name"]);
//! ```

mod client;
mod errors;

pub use client::{GraphqlClient, GraphqlResponse, GRAPHQL_PATH};
pub use errors::{GraphqlError, GraphqlErrorMessage};
