//! Fashion seasons.

use serde::{Deserialize, Serialize};

use super::nullable;

/// A fashion season, e.g. `Fall 2023 Ready-to-Wear`.
///
/// The slug is the season's stable identifier. `year` is absent for seasons
/// the API does not date.
///
/// # Example
///
/// ```rust
/// use vogue_api::models::Season;
///
/// let season: Season = serde_json::from_str(
///     r#"{"name": "Fall 2023", "slug": "fall-2023", "year": 2023}"#,
/// ).unwrap();
/// assert_eq!(season.year, Some(2023));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
pub struct Season {
    /// Display name.
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    /// Identifier, e.g. `fall-2023-ready-to-wear`.
    #[serde(default, deserialize_with = "nullable")]
    pub slug: String,

    /// Calendar year of the season, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_without_year() {
        let season: Season =
            serde_json::from_str(r#"{"name": "Resort 2024", "slug": "resort-2024"}"#).unwrap();
        assert_eq!(season.name, "Resort 2024");
        assert!(season.year.is_none());
    }

    #[test]
    fn test_season_serialization_omits_missing_year() {
        let season = Season {
            name: "Pre-Fall 2022".to_string(),
            slug: "pre-fall-2022".to_string(),
            year: None,
        };
        let json = serde_json::to_value(&season).unwrap();
        assert!(json.get("year").is_none());
    }
}
