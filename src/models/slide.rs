//! Gallery slides.
//!
//! A gallery slide comes in two shapes, told apart by the GraphQL
//! `__typename` discriminator: a plain `Slide`, and a `CollectionSlide` that
//! additionally carries a `type` and a `title`.

use serde::{Deserialize, Serialize};

use super::{nullable, ShowImage};

/// A plain gallery slide (`__typename: "Slide"`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Slide {
    /// Slide identifier.
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,

    /// Photographer credit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit: Option<String>,

    /// The slide's photo.
    #[serde(rename = "photosTout", default, deserialize_with = "nullable")]
    pub image: ShowImage,
}

/// A runway-collection slide (`__typename: "CollectionSlide"`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CollectionSlide {
    /// Slide identifier.
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,

    /// Slide type as reported by the API.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub slide_type: Option<String>,

    /// Slide title, e.g. `Look 12`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Photographer credit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit: Option<String>,

    /// The slide's photo.
    #[serde(rename = "photosTout", default, deserialize_with = "nullable")]
    pub image: ShowImage,
}

/// One item in a [`ShowGallery`](super::ShowGallery).
///
/// Serializes with the `__typename` tag so the variant survives a round
/// trip through JSON.
///
/// # Example
///
/// ```rust
/// use vogue_api::models::ShowSlide;
///
/// let slide: ShowSlide = serde_json::from_str(r#"{
///     "__typename": "CollectionSlide",
///     "id": "s1",
///     "type": "CollectionSlide",
///     "title": "Look 1",
///     "photosTout": {"url": "https://assets.vogue.com/photos/look-1.jpg"}
/// }"#).unwrap();
///
/// assert!(matches!(slide, ShowSlide::Collection(_)));
/// assert_eq!(slide.title(), Some("Look 1"));
/// assert_eq!(slide.image().url, "https://assets.vogue.com/photos/look-1.jpg");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "__typename", from = "RawSlide")]
pub enum ShowSlide {
    /// A plain slide.
    #[serde(rename = "Slide")]
    Slide(Slide),
    /// A runway-collection slide.
    #[serde(rename = "CollectionSlide")]
    Collection(CollectionSlide),
}

impl ShowSlide {
    /// Returns the GraphQL type name of this variant.
    #[must_use]
    pub const fn typename(&self) -> &'static str {
        match self {
            Self::Slide(_) => "Slide",
            Self::Collection(_) => "CollectionSlide",
        }
    }

    /// Returns the slide identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Slide(slide) => &slide.id,
            Self::Collection(slide) => &slide.id,
        }
    }

    /// Returns the slide's photo.
    #[must_use]
    pub const fn image(&self) -> &ShowImage {
        match self {
            Self::Slide(slide) => &slide.image,
            Self::Collection(slide) => &slide.image,
        }
    }

    /// Returns the photographer credit, if any.
    #[must_use]
    pub fn credit(&self) -> Option<&str> {
        match self {
            Self::Slide(slide) => slide.credit.as_deref(),
            Self::Collection(slide) => slide.credit.as_deref(),
        }
    }

    /// Returns the title; only collection slides have one.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Slide(_) => None,
            Self::Collection(slide) => slide.title.as_deref(),
        }
    }
}

/// Wire shape of a slide before the variant is chosen.
#[derive(Deserialize)]
struct RawSlide {
    #[serde(rename = "__typename", default)]
    typename: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    id: String,
    #[serde(rename = "type", default)]
    slide_type: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    credit: Option<String>,
    #[serde(rename = "photosTout", default, deserialize_with = "nullable")]
    image: ShowImage,
}

impl From<RawSlide> for ShowSlide {
    fn from(raw: RawSlide) -> Self {
        let is_collection = match raw.typename.as_deref() {
            Some("CollectionSlide") => true,
            Some("Slide") => false,
            other => {
                if let Some(typename) = other {
                    tracing::debug!(typename, "Unknown slide type, inferring variant from fields");
                }
                raw.slide_type.is_some()
            }
        };

        if is_collection {
            Self::Collection(CollectionSlide {
                id: raw.id,
                slide_type: raw.slide_type,
                title: raw.title,
                credit: raw.credit,
                image: raw.image,
            })
        } else {
            Self::Slide(Slide {
                id: raw.id,
                credit: raw.credit,
                image: raw.image,
            })
        }
    }
}
