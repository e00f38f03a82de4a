//! Fashion brands.

use serde::{Deserialize, Serialize};

use super::nullable;

/// A fashion brand (designer or house) known to Vogue Runway.
///
/// The slug is the brand's stable identifier.
///
/// # Example
///
/// ```rust
/// use vogue_api::models::Brand;
///
/// let brand: Brand = serde_json::from_str(r#"{"name": "Chanel", "slug": "chanel"}"#).unwrap();
/// assert_eq!(brand.slug, "chanel");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
pub struct Brand {
    /// Display name, e.g. `Maison Margiela`.
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    /// Identifier, e.g. `maison-martin-margiela`.
    #[serde(default, deserialize_with = "nullable")]
    pub slug: String,
}
