//! # Vogue Runway API client
//!
//! A Rust client for the public Vogue GraphQL endpoint, giving typed access
//! to the runway catalogue: brands, seasons and fashion shows with their
//! image galleries.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`VogueConfig`] and [`VogueConfigBuilder`]
//! - Validated newtypes for slugs and the endpoint URL
//! - Fixed GraphQL documents with safe slug interpolation via [`Query`]
//! - An async HTTP transport with a configurable timeout
//! - Decoding of the GraphQL envelope into the types in [`models`]
//! - Typed accessors on [`VogueClient`]
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use vogue_api::{BaseUrl, VogueConfig};
//!
//! let config = VogueConfig::builder()
//!     .base_url(BaseUrl::new("https://graphql.vogue.com").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.timeout(), Duration::from_secs(10));
//! ```
//!
//! ## Fetching Data
//!
//! ```rust,ignore
//! use vogue_api::{FullSlug, Slug, VogueClient, VogueConfig};
//! use vogue_api::models::GalleryKind;
//!
//! let client = VogueClient::new(&VogueConfig::default())?;
//!
//! // Every brand, then every show of one of them
//! let brands = client.get_brands().await?;
//! let shows = client.get_brand_shows(&Slug::new("chanel")?).await?;
//!
//! // One show with its galleries
//! let show = client
//!     .get_show(&FullSlug::new("fall-2023-ready-to-wear/chanel")?)
//!     .await?;
//!
//! if let Some(gallery) = show.gallery(GalleryKind::Collection) {
//!     for url in gallery.image_urls() {
//!         println!("{url}");
//!     }
//! }
//! ```
//!
//! ## Lower-Level Access
//!
//! ```rust,ignore
//! use vogue_api::{GraphqlClient, Query, VogueConfig};
//!
//! let client = GraphqlClient::new(&VogueConfig::default())?;
//!
//! // Decode into any type, or keep the raw body
//! let data: serde_json::Value = client.query(&Query::seasons()).await?;
//! let response = client.raw(&Query::brands()).await?;
//! println!("{} bytes", response.body.len());
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All clients are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Lenient decoding**: Missing or `null` fields decode to empty values

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod queries;

// Re-export public types at crate root for convenience
pub use api::VogueClient;
pub use config::{
    BaseUrl, FullSlug, Slug, VogueConfig, VogueConfigBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT,
    DEFAULT_USER_AGENT,
};
pub use error::ConfigError;
pub use queries::Query;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpRequest, HttpRequestBuilder, HttpResponse, InvalidHttpRequestError,
};

// Re-export GraphQL client types
pub use clients::{GraphqlClient, GraphqlError, GraphqlErrorMessage, GraphqlResponse};

// Re-export model types
pub use models::{
    Brand, CollectionSlide, GalleryKind, Season, Show, ShowGalleries, ShowGallery, ShowImage,
    ShowSlide, Slide,
};
