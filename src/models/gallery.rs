//! Show galleries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{nullable, ShowSlide};

/// The named gallery slots a show can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GalleryKind {
    /// The runway looks.
    Collection,
    /// Venue and set.
    Atmosphere,
    /// Hair and makeup.
    Beauty,
    /// Close-ups of garments and accessories.
    Detail,
    /// Guests in the front row.
    FrontRow,
}

impl GalleryKind {
    /// Every slot, in the order the API lists them.
    pub const ALL: [Self; 5] = [
        Self::Collection,
        Self::Atmosphere,
        Self::Beauty,
        Self::Detail,
        Self::FrontRow,
    ];

    /// Returns the GraphQL field name for this slot.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Collection => "collection",
            Self::Atmosphere => "atmosphere",
            Self::Beauty => "beauty",
            Self::Detail => "detail",
            Self::FrontRow => "frontRow",
        }
    }
}

impl fmt::Display for GalleryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GalleryKind {
    type Err = String;

    /// Accepts the GraphQL name as well as `front-row` / `front_row`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "collection" => Ok(Self::Collection),
            "atmosphere" => Ok(Self::Atmosphere),
            "beauty" => Ok(Self::Beauty),
            "detail" => Ok(Self::Detail),
            "frontrow" => Ok(Self::FrontRow),
            _ => Err(format!(
                "unknown gallery '{s}', expected one of: collection, atmosphere, beauty, detail, front-row"
            )),
        }
    }
}

/// An ordered, titled set of slides.
///
/// On the wire the slides sit inside a `slidesV2 { slide [...] }`
/// connection; a missing or `null` connection decodes to no slides.
///
/// # Example
///
/// ```rust
/// use vogue_api::models::ShowGallery;
///
/// let gallery: ShowGallery = serde_json::from_str(r#"{
///     "title": "Collection",
///     "slidesV2": {"slide": [{"__typename": "Slide", "id": "1"}]}
/// }"#).unwrap();
///
/// assert_eq!(gallery.slides.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ShowGallery {
    /// Gallery title.
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,

    /// Slides in display order.
    #[serde(rename = "slidesV2", default, with = "slide_connection")]
    pub slides: Vec<ShowSlide>,
}

impl ShowGallery {
    /// Returns the image URL of every slide, in order.
    pub fn image_urls(&self) -> impl Iterator<Item = &str> {
        self.slides.iter().map(|slide| slide.image().url.as_str())
    }
}

mod slide_connection {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::models::{nullable, ShowSlide};

    #[derive(Deserialize)]
    struct Connection {
        #[serde(default, deserialize_with = "nullable")]
        slide: Vec<ShowSlide>,
    }

    #[derive(Serialize)]
    struct ConnectionRef<'a> {
        slide: &'a [ShowSlide],
    }

    pub fn serialize<S>(slides: &[ShowSlide], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ConnectionRef { slide: slides }.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<ShowSlide>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Connection>::deserialize(deserializer)?
            .map(|connection| connection.slide)
            .unwrap_or_default())
    }
}

/// The gallery slots of a show.
///
/// Each slot is independently present or absent. A slot the API did not
/// return is `None`, never an empty gallery.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShowGalleries {
    /// Runway looks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<ShowGallery>,

    /// Venue and set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atmosphere: Option<ShowGallery>,

    /// Hair and makeup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beauty: Option<ShowGallery>,

    /// Garment and accessory close-ups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<ShowGallery>,

    /// Front-row guests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_row: Option<ShowGallery>,
}

impl ShowGalleries {
    /// Returns the gallery in the given slot, if present.
    #[must_use]
    pub const fn get(&self, kind: GalleryKind) -> Option<&ShowGallery> {
        match kind {
            GalleryKind::Collection => self.collection.as_ref(),
            GalleryKind::Atmosphere => self.atmosphere.as_ref(),
            GalleryKind::Beauty => self.beauty.as_ref(),
            GalleryKind::Detail => self.detail.as_ref(),
            GalleryKind::FrontRow => self.front_row.as_ref(),
        }
    }

    /// Iterates over the present slots in [`GalleryKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (GalleryKind, &ShowGallery)> {
        GalleryKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|gallery| (kind, gallery)))
    }

    /// Returns `true` if no slot is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_gallery_kind_parsing() {
        assert_eq!("collection".parse(), Ok(GalleryKind::Collection));
        assert_eq!("frontRow".parse(), Ok(GalleryKind::FrontRow));
        assert_eq!("front-row".parse(), Ok(GalleryKind::FrontRow));
        assert_eq!("FRONT_ROW".parse(), Ok(GalleryKind::FrontRow));
        assert!("backstage".parse::<GalleryKind>().is_err());
    }

    #[test]
    fn test_gallery_kind_display_matches_field_name() {
        assert_eq!(GalleryKind::FrontRow.to_string(), "frontRow");
        assert_eq!(
            serde_json::to_string(&GalleryKind::FrontRow).unwrap(),
            r#""frontRow""#
        );
    }

    #[test]
    fn test_gallery_null_connection_decodes_to_no_slides() {
        let gallery: ShowGallery =
            serde_json::from_value(json!({"title": "Beauty", "slidesV2": null})).unwrap();
        assert_eq!(gallery.title, "Beauty");
        assert!(gallery.slides.is_empty());
    }

    #[test]
    fn test_gallery_preserves_slide_order() {
        let gallery: ShowGallery = serde_json::from_value(json!({
            "title": "Collection",
            "slidesV2": {"slide": [
                {"__typename": "CollectionSlide", "id": "1", "photosTout": {"url": "u1"}},
                {"__typename": "CollectionSlide", "id": "2", "photosTout": {"url": "u2"}},
                {"__typename": "CollectionSlide", "id": "3", "photosTout": {"url": "u3"}}
            ]}
        }))
        .unwrap();

        let urls: Vec<&str> = gallery.image_urls().collect();
        assert_eq!(urls, ["u1", "u2", "u3"]);
    }

    #[test]
    fn test_missing_slots_are_absent_not_empty() {
        let galleries: ShowGalleries = serde_json::from_value(json!({
            "collection": {"title": "Collection", "slidesV2": {"slide": []}},
            "frontRow": null
        }))
        .unwrap();

        assert!(galleries.collection.is_some());
        assert!(galleries.beauty.is_none());
        assert!(galleries.front_row.is_none());
        assert_eq!(
            galleries.iter().map(|(kind, _)| kind).collect::<Vec<_>>(),
            [GalleryKind::Collection]
        );
        assert!(!galleries.is_empty());
    }

    #[test]
    fn test_gallery_serialization_round_trips_connection_shape() {
        let gallery = ShowGallery {
            title: "Detail".to_string(),
            slides: Vec::new(),
        };
        let value = serde_json::to_value(&gallery).unwrap();
        assert_eq!(value, json!({"title": "Detail", "slidesV2": {"slide": []}}));
    }
}
