//! Typed fashion-show data returned by the Vogue GraphQL API.
//!
//! Every type here is an immutable snapshot decoded from a single response.
//! Decoding is lenient in the same way throughout:
//!
//! - unknown fields are ignored
//! - optional fields that are missing or `null` decode to `None`
//! - required fields that are missing or `null` decode to an empty value
//!
//! Only structurally invalid JSON (or a value of the wrong JSON type) fails.
//!
//! # Example
//!
//! ```rust
//! use vogue_api::models::Show;
//!
//! let show: Show = serde_json::from_str(
//!     r#"{"slug": "fall-2023-ready-to-wear/chanel", "galleries": {}}"#,
//! ).unwrap();
//!
//! assert_eq!(show.brand_slug(), Some("chanel"));
//! assert!(show.galleries.unwrap().is_empty());
//! ```

mod brand;
mod envelope;
mod gallery;
mod image;
mod season;
mod show;
mod slide;

pub use brand::Brand;
pub(crate) use envelope::{BrandsData, ContentData, SeasonsData, ShowData};
pub use gallery::{GalleryKind, ShowGalleries, ShowGallery};
pub use image::ShowImage;
pub use season::Season;
pub use show::Show;
pub use slide::{CollectionSlide, ShowSlide, Slide};

use serde::{Deserialize, Deserializer};

/// Deserializes `null` as the type's default value.
///
/// Used together with `#[serde(default)]` so that a required field decodes
/// to an empty value whether it is missing or explicitly `null`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "nullable")]
        name: String,
        #[serde(default, deserialize_with = "nullable")]
        tags: Vec<String>,
    }

    #[test]
    fn test_nullable_maps_null_and_missing_to_default() {
        let probe: Probe = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(probe.name, "");
        assert!(probe.tags.is_empty());
    }

    #[test]
    fn test_nullable_keeps_present_values() {
        let probe: Probe = serde_json::from_str(r#"{"name": "Dior", "tags": ["a"]}"#).unwrap();
        assert_eq!(probe.name, "Dior");
        assert_eq!(probe.tags, vec!["a".to_string()]);
    }

    #[test]
    fn test_nullable_still_rejects_wrong_types() {
        assert!(serde_json::from_str::<Probe>(r#"{"name": 42}"#).is_err());
    }
}
