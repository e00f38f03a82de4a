//! GraphQL client implementation for the Vogue endpoint.
//!
//! This module provides the [`GraphqlClient`] type, which sends a [`Query`]
//! as a `GET /graphql?query=...` request and decodes the response envelope.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::clients::graphql::{GraphqlError, GraphqlErrorMessage};
use crate::clients::{HttpClient, HttpError, HttpRequest, HttpResponse};
use crate::config::VogueConfig;
use crate::queries::Query;

/// Path of the GraphQL endpoint, relative to the base URL.
pub const GRAPHQL_PATH: &str = "graphql";

/// The standard GraphQL response envelope.
///
/// `data` is `None` when the server omits it or sends `null`.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct GraphqlResponse<T> {
    /// The query result.
    #[serde(default = "Option::default")]
    pub data: Option<T>,

    /// GraphQL-level errors, if any.
    #[serde(default)]
    pub errors: Option<Vec<GraphqlErrorMessage>>,
}

impl<T: Default> GraphqlResponse<T> {
    /// Converts the envelope into its data.
    ///
    /// A non-empty `errors` array becomes [`GraphqlError::Api`], even when
    /// partial data is present. A missing `data` without errors yields
    /// `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Api`] if the server reported errors.
    pub fn into_data(self) -> Result<T, GraphqlError> {
        match self.errors {
            Some(errors) if !errors.is_empty() => Err(GraphqlError::Api { errors }),
            _ => Ok(self.data.unwrap_or_default()),
        }
    }
}

/// GraphQL client for the Vogue endpoint.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use vogue_api::{GraphqlClient, Query, VogueConfig};
///
/// let client = GraphqlClient::new(&VogueConfig::default())?;
///
/// let response = client.raw(&Query::seasons()).await?;
/// println!("{}", response.text());
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the underlying HTTP client cannot be created.
    pub fn new(config: &VogueConfig) -> Result<Self, HttpError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Builds the `GET` request for a query.
    #[must_use]
    pub fn request_for(query: &Query) -> HttpRequest {
        HttpRequest::builder(GRAPHQL_PATH)
            .query_param("query", query.as_str())
            .build()
    }

    /// Sends a query and returns the undecoded response.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] for transport errors.
    pub async fn raw(&self, query: &Query) -> Result<HttpResponse, GraphqlError> {
        tracing::debug!(query = query.name(), "Executing GraphQL query");
        self.http_client
            .request(Self::request_for(query))
            .await
            .map_err(Into::into)
    }

    /// Sends a query and decodes the `data` member of the response into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] for transport errors,
    /// [`GraphqlError::Decode`] if the body is not valid JSON for `T`, and
    /// [`GraphqlError::Api`] if the response carries GraphQL errors.
    pub async fn query<T>(&self, query: &Query) -> Result<T, GraphqlError>
    where
        T: DeserializeOwned + Default,
    {
        let response = self.raw(query).await?;
        Self::decode(&response.body)
    }

    /// Decodes a raw response body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Decode`] or [`GraphqlError::Api`].
    pub fn decode<T>(body: &[u8]) -> Result<T, GraphqlError>
    where
        T: DeserializeOwned + Default,
    {
        let envelope: GraphqlResponse<T> = serde_json::from_slice(body)?;
        envelope.into_data()
    }
}
