//! Typed accessors for the Vogue runway catalogue.
//!
//! [`VogueClient`] wraps a [`GraphqlClient`] and exposes one method per
//! query. Each method renders its document, sends it, decodes the envelope
//! and returns the relevant part of the payload.
//!
//! # Example
//!
//! ```rust,ignore
//! use vogue_api::{FullSlug, VogueClient, VogueConfig};
//! use vogue_api::models::GalleryKind;
//!
//! let client = VogueClient::new(&VogueConfig::default())?;
//!
//! for season in client.get_seasons().await? {
//!     println!("{}\t{}", season.slug, season.name);
//! }
//!
//! let show = client.get_show(&"fall-2023-ready-to-wear/chanel".parse()?).await?;
//! if let Some(gallery) = show.gallery(GalleryKind::Collection) {
//!     for url in gallery.image_urls() {
//!         println!("{url}");
//!     }
//! }
//! ```

use crate::clients::{GraphqlClient, GraphqlError, HttpError};
use crate::config::{FullSlug, Slug, VogueConfig};
use crate::models::{Brand, BrandsData, ContentData, Season, SeasonsData, Show, ShowData};
use crate::queries::Query;

/// Client for the Vogue runway GraphQL endpoint.
///
/// # Thread Safety
///
/// `VogueClient` is `Send + Sync`. Calls share no mutable state, so one client
/// can serve any number of concurrent tasks.
#[derive(Debug)]
pub struct VogueClient {
    graphql: GraphqlClient,
}

// Verify VogueClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<VogueClient>();
};

impl VogueClient {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the underlying HTTP client cannot be created.
    pub fn new(config: &VogueConfig) -> Result<Self, HttpError> {
        Ok(Self {
            graphql: GraphqlClient::new(config)?,
        })
    }

    /// Creates a client against the public endpoint with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the underlying HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, HttpError> {
        Self::new(&VogueConfig::default())
    }

    /// Returns the underlying GraphQL client.
    #[must_use]
    pub const fn graphql(&self) -> &GraphqlClient {
        &self.graphql
    }

    /// Lists every brand, in the order the endpoint returns them.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the response cannot be
    /// decoded.
    pub async fn get_brands(&self) -> Result<Vec<Brand>, GraphqlError> {
        let data: BrandsData = self.graphql.query(&Query::brands()).await?;
        Ok(data.all_brands.brands)
    }

    /// Lists every season, in the order the endpoint returns them.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the response cannot be
    /// decoded.
    pub async fn get_seasons(&self) -> Result<Vec<Season>, GraphqlError> {
        let data: SeasonsData = self.graphql.query(&Query::seasons()).await?;
        Ok(data.all_seasons.seasons)
    }

    /// Fetches one show, galleries included.
    ///
    /// An unknown slug is not an error: the endpoint answers with a `null`
    /// show, which decodes as [`Show::default`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the response cannot be
    /// decoded.
    pub async fn get_show(&self, full_slug: &FullSlug) -> Result<Show, GraphqlError> {
        let data: ShowData = self.graphql.query(&Query::fashion_show(full_slug)).await?;
        Ok(data.fashion_show)
    }

    /// Lists the shows of a season. The shows carry no galleries.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the response cannot be
    /// decoded.
    pub async fn get_season_shows(&self, season: &Slug) -> Result<Vec<Show>, GraphqlError> {
        let data: ContentData = self.graphql.query(&Query::season_shows(season)).await?;
        Ok(data.all_content.content)
    }

    /// Lists the shows of a brand. The shows carry no galleries.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the response cannot be
    /// decoded.
    pub async fn get_brand_shows(&self, brand: &Slug) -> Result<Vec<Show>, GraphqlError> {
        let data: ContentData = self.graphql.query(&Query::brand_shows(brand)).await?;
        Ok(data.all_content.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_uses_configured_endpoint() {
        let config = VogueConfig::builder()
            .base_url("http://127.0.0.1:9999".parse().unwrap())
            .build()
            .unwrap();
        let client = VogueClient::new(&config).unwrap();

        assert_eq!(client.graphql().http_client().base_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_with_defaults_targets_public_endpoint() {
        let client = VogueClient::with_defaults().unwrap();
        assert_eq!(
            client.graphql().http_client().base_url(),
            "https://graphql.vogue.com"
        );
    }

    #[test]
    fn test_vogue_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<VogueClient>();
    }
}
