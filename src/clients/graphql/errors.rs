//! GraphQL-specific error types for the Vogue API client.
//!
//! # Error Handling
//!
//! - [`GraphqlError::Http`]: Wraps transport errors
//! - [`GraphqlError::Decode`]: The body is not valid JSON for the expected shape
//! - [`GraphqlError::Api`]: The server answered with a GraphQL `errors` array
//!
//! # Example
//!
//! ```rust,ignore
//! use vogue_api::GraphqlError;
//!
//! match client.get_seasons().await {
//!     Ok(seasons) => println!("{} seasons", seasons.len()),
//!     Err(GraphqlError::Api { errors }) => {
//!         for error in errors {
//!             println!("GraphQL error: {}", error.message);
//!         }
//!     }
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clients::HttpError;
use crate::models::nullable;

/// One entry of a GraphQL response's `errors` array.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GraphqlErrorMessage {
    /// Human-readable description.
    #[serde(default, deserialize_with = "nullable")]
    pub message: String,

    /// Response path the error applies to, e.g. `["fashionShowV2", "galleries"]`.
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub path: Vec<serde_json::Value>,

    /// Server-specific details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
}

/// Error type for GraphQL operations.
///
/// # Example
///
/// ```rust
/// use vogue_api::clients::graphql::{GraphqlError, GraphqlErrorMessage};
///
/// let error = GraphqlError::Api {
///     errors: vec![GraphqlErrorMessage {
///         message: "Cannot query field \"foo\"".to_string(),
///         ..Default::default()
///     }],
/// };
/// assert!(error.to_string().contains("Cannot query field"));
/// ```
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// A transport-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body could not be decoded.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server reported GraphQL errors.
    #[error("GraphQL error: {}", join_messages(.errors))]
    Api {
        /// The reported errors, in response order.
        errors: Vec<GraphqlErrorMessage>,
    },
}

fn join_messages(errors: &[GraphqlErrorMessage]) -> String {
    errors
        .iter()
        .map(|error| error.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
