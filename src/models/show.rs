//! Fashion shows.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::{nullable, Brand, GalleryKind, Season, ShowGalleries, ShowGallery, ShowImage};
use crate::config::FullSlug;

/// A single runway show.
///
/// Listings by season or brand return shows without galleries; fetch a show
/// by its full slug to get them.
///
/// # Example
///
/// ```rust
/// use vogue_api::models::{GalleryKind, Show};
///
/// let show: Show = serde_json::from_str(r#"{
///     "GMTPubDate": "2023-03-07T10:30:00.000Z",
///     "title": "Chanel Fall 2023 Ready-to-Wear",
///     "slug": "fall-2023-ready-to-wear/chanel",
///     "brand": {"name": "Chanel", "slug": "chanel"},
///     "galleries": {"collection": {"title": "Collection", "slidesV2": {"slide": []}}}
/// }"#).unwrap();
///
/// assert_eq!(show.season_slug(), Some("fall-2023-ready-to-wear"));
/// assert!(show.gallery(GalleryKind::Collection).is_some());
/// assert!(show.gallery(GalleryKind::Beauty).is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Show {
    /// Publication time of the show review.
    #[serde(rename = "GMTPubDate", default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// Canonical vogue.com URL (path) of the show.
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,

    /// Show title.
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,

    /// `{season-slug}/{brand-slug}`.
    #[serde(rename = "slug", default, deserialize_with = "nullable")]
    pub full_slug: String,

    /// Show identifier.
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,

    /// City fields, e.g. `{"name": "Paris"}`.
    #[serde(default, deserialize_with = "city", skip_serializing_if = "Option::is_none")]
    pub city: Option<BTreeMap<String, String>>,

    /// The brand that showed.
    #[serde(default, deserialize_with = "nullable")]
    pub brand: Brand,

    /// The season the show belongs to.
    #[serde(default, deserialize_with = "nullable")]
    pub season: Season,

    /// Lead image.
    #[serde(rename = "photosTout", default, deserialize_with = "nullable")]
    pub hero_image: ShowImage,

    /// Gallery slots; absent on listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub galleries: Option<ShowGalleries>,

    /// Video payload, passed through undecoded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<serde_json::Value>,
}

impl Show {
    /// Returns the season part of the full slug.
    #[must_use]
    pub fn season_slug(&self) -> Option<&str> {
        self.full_slug.split_once('/').map(|(season, _)| season)
    }

    /// Returns the brand part of the full slug.
    #[must_use]
    pub fn brand_slug(&self) -> Option<&str> {
        self.full_slug.split_once('/').map(|(_, brand)| brand)
    }

    /// Parses the full slug, for passing back to
    /// [`VogueClient::get_show`](crate::VogueClient::get_show).
    #[must_use]
    pub fn parsed_full_slug(&self) -> Option<FullSlug> {
        FullSlug::new(self.full_slug.as_str()).ok()
    }

    /// Returns the gallery in the given slot, if the show has it.
    #[must_use]
    pub fn gallery(&self, kind: GalleryKind) -> Option<&ShowGallery> {
        self.galleries.as_ref().and_then(|galleries| galleries.get(kind))
    }
}

/// Decodes the `city` object, mapping `null` values to empty strings.
fn city<'de, D>(deserializer: D) -> Result<Option<BTreeMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, Option<String>>>::deserialize(deserializer)?;
    Ok(raw.map(|fields| {
        fields
            .into_iter()
            .map(|(key, value)| (key, value.unwrap_or_default()))
            .collect()
    }))
}
