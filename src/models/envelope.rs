//! The `data` payloads of each query, as returned inside the GraphQL envelope.

use serde::Deserialize;

use super::{nullable, Brand, Season, Show};

/// `{"allBrands": {"Brand": [...]}}`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct BrandsData {
    #[serde(rename = "allBrands", default, deserialize_with = "nullable")]
    pub all_brands: BrandCollection,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct BrandCollection {
    #[serde(rename = "Brand", default, deserialize_with = "nullable")]
    pub brands: Vec<Brand>,
}

/// `{"allSeasons": {"Season": [...]}}`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SeasonsData {
    #[serde(rename = "allSeasons", default, deserialize_with = "nullable")]
    pub all_seasons: SeasonCollection,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SeasonCollection {
    #[serde(rename = "Season", default, deserialize_with = "nullable")]
    pub seasons: Vec<Season>,
}

/// `{"fashionShowV2": {...}}`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ShowData {
    #[serde(rename = "fashionShowV2", default, deserialize_with = "nullable")]
    pub fashion_show: Show,
}

/// `{"allContent": {"Content": [...]}}`, shared by the season and brand listings.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ContentData {
    #[serde(rename = "allContent", default, deserialize_with = "nullable")]
    pub all_content: ContentCollection,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ContentCollection {
    #[serde(rename = "Content", default, deserialize_with = "nullable")]
    pub content: Vec<Show>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brands_data_preserves_order() {
        let data: BrandsData = serde_json::from_str(
            r#"{"allBrands": {"Brand": [
                {"name": "Prada", "slug": "prada"},
                {"name": "Chanel", "slug": "chanel"},
                {"name": "Dior", "slug": "christian-dior"}
            ]}}"#,
        )
        .unwrap();

        let slugs: Vec<&str> = data
            .all_brands
            .brands
            .iter()
            .map(|brand| brand.slug.as_str())
            .collect();
        assert_eq!(slugs, ["prada", "chanel", "christian-dior"]);
    }

    #[test]
    fn test_null_collections_decode_empty() {
        let data: ContentData = serde_json::from_str(r#"{"allContent": null}"#).unwrap();
        assert!(data.all_content.content.is_empty());

        let data: SeasonsData = serde_json::from_str(r#"{"allSeasons": {"Season": null}}"#).unwrap();
        assert!(data.all_seasons.seasons.is_empty());
    }

    #[test]
    fn test_show_data_missing_show_is_default() {
        let data: ShowData = serde_json::from_str(r#"{"fashionShowV2": null}"#).unwrap();
        assert_eq!(data.fashion_show, Show::default());
    }
}
