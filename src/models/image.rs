//! Show photography.

use serde::{Deserialize, Serialize};

use super::nullable;

/// A photo attached to a show or a gallery slide (`photosTout` on the wire).
///
/// Only `url` is always requested; the remaining fields are present on
/// gallery slides and absent on show hero images.
///
/// # Example
///
/// ```rust
/// use vogue_api::models::ShowImage;
///
/// let image: ShowImage = serde_json::from_str(
///     r#"{"url": "https://assets.vogue.com/photos/look-1.jpg", "width": 1280}"#,
/// ).unwrap();
///
/// assert_eq!(image.width, Some(1280));
/// assert!(image.caption.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ShowImage {
    /// Image identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Image URL; empty if the API omitted it.
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,

    /// Caption text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Photographer credit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit: Option<String>,

    /// Width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_with_all_fields() {
        let image: ShowImage = serde_json::from_str(
            r#"{
                "id": "64f0c",
                "url": "https://assets.vogue.com/photos/64f0c.jpg",
                "caption": "Look 1",
                "credit": "Photo: Filippo Fior / Gorunway.com",
                "width": 1280,
                "height": 1920
            }"#,
        )
        .unwrap();

        assert_eq!(image.id.as_deref(), Some("64f0c"));
        assert_eq!(image.caption.as_deref(), Some("Look 1"));
        assert_eq!(
            image.credit.as_deref(),
            Some("Photo: Filippo Fior / Gorunway.com")
        );
        assert_eq!((image.width, image.height), (Some(1280), Some(1920)));
    }

    #[test]
    fn test_image_missing_url_is_empty_not_error() {
        let image: ShowImage = serde_json::from_str(r#"{"caption": null}"#).unwrap();
        assert_eq!(image, ShowImage::default());
    }
}
