//! GraphQL documents sent to the Vogue endpoint.
//!
//! Every query is a fixed document. The three parameterised ones take a
//! single slug, which is substituted verbatim into a string literal. Because
//! [`Slug`] and [`FullSlug`] reject quotes, backslashes and control
//! characters on construction, a substituted slug can never escape that
//! literal. The endpoint does not use GraphQL variables.
//!
//! # Example
//!
//! ```rust
//! use vogue_api::{FullSlug, Query};
//!
//! let slug = FullSlug::new("fall-2023-ready-to-wear/chanel").unwrap();
//! let query = Query::fashion_show(&slug);
//!
//! assert_eq!(query.name(), "fashionShowV2");
//! assert!(query.as_str().contains(r#"fashionShowV2(slug: "fall-2023-ready-to-wear/chanel")"#));
//! ```

use std::fmt;

use crate::config::{FullSlug, Slug};

/// Marker replaced by the slug in parameterised templates.
const SLUG_PLACEHOLDER: &str = "__SLUG__";

pub(crate) const BRANDS: &str = "query{allBrands{Brand{name slug}}}";

pub(crate) const SEASONS: &str = "query{allSeasons{Season{name slug year}}}";

pub(crate) const FASHION_SHOW: &str = r#"query {
  fashionShowV2(slug: "__SLUG__") {
    GMTPubDate
    url
    title
    slug
    id
    city {
      name
    }
    brand {
      name
      slug
    }
    season {
      name
      slug
      year
    }
    photosTout {
      ... on Image {
        url
      }
    }
    galleries {
      collection {
        ...GalleryFragment
      }
      atmosphere {
        ...GalleryFragment
      }
      beauty {
        ...GalleryFragment
      }
      detail {
        ...GalleryFragment
      }
      frontRow {
        ...GalleryFragment
      }
    }
    video {
      url
      cneId
      title
    }
  }
}
fragment GalleryFragment on FashionShowGallery {
  title
  slidesV2 {
    ... on GallerySlidesConnection {
      slide {
        ... on Slide {
          id
          credit
          photosTout {
            ...imageFields
          }
        }
        ... on CollectionSlide {
          id
          type
          credit
          title
          photosTout {
            ...imageFields
          }
        }
        __typename
      }
    }
  }
}
fragment imageFields on Image {
  id
  url
  caption
  credit
  width
  height
}
"#;

pub(crate) const SEASON_SHOWS: &str = r#"query {
  allContent(type: ["FashionShowV2"], first: 1000, filter: { season: { slug: "__SLUG__" } }) {
    Content {
      ...ShowListingFragment
    }
  }
}
fragment ShowListingFragment on FashionShowV2 {
  GMTPubDate
  url
  title
  slug
  id
  city {
    name
  }
  brand {
    name
    slug
  }
  season {
    name
    slug
    year
  }
  photosTout {
    ... on Image {
      url
    }
  }
}
"#;

pub(crate) const BRAND_SHOWS: &str = r#"query {
  allContent(type: ["FashionShowV2"], first: 1000, filter: { brand: { slug: "__SLUG__" } }) {
    Content {
      ...ShowListingFragment
    }
  }
}
fragment ShowListingFragment on FashionShowV2 {
  GMTPubDate
  url
  title
  slug
  id
  city {
    name
  }
  brand {
    name
    slug
  }
  season {
    name
    slug
    year
  }
  photosTout {
    ... on Image {
      url
    }
  }
}
"#;

/// A ready-to-send GraphQL document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    name: &'static str,
    document: String,
}

impl Query {
    /// All brands.
    #[must_use]
    pub fn brands() -> Self {
        Self::fixed("allBrands", BRANDS)
    }

    /// All seasons.
    #[must_use]
    pub fn seasons() -> Self {
        Self::fixed("allSeasons", SEASONS)
    }

    /// A single show with its galleries.
    #[must_use]
    pub fn fashion_show(full_slug: &FullSlug) -> Self {
        Self::with_slug("fashionShowV2", FASHION_SHOW, &full_slug.to_string())
    }

    /// Every show of a season.
    #[must_use]
    pub fn season_shows(season: &Slug) -> Self {
        Self::with_slug("allContent", SEASON_SHOWS, season.as_ref())
    }

    /// Every show of a brand.
    #[must_use]
    pub fn brand_shows(brand: &Slug) -> Self {
        Self::with_slug("allContent", BRAND_SHOWS, brand.as_ref())
    }

    /// Returns the root field this document selects, for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the document text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.document
    }

    fn fixed(name: &'static str, template: &str) -> Self {
        Self {
            name,
            document: template.to_string(),
        }
    }

    fn with_slug(name: &'static str, template: &str, slug: &str) -> Self {
        Self {
            name,
            document: template.replacen(SLUG_PLACEHOLDER, slug, 1),
        }
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.document
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameterised_templates_have_exactly_one_placeholder() {
        for template in [FASHION_SHOW, SEASON_SHOWS, BRAND_SHOWS] {
            assert_eq!(template.matches(SLUG_PLACEHOLDER).count(), 1);
        }
        for template in [BRANDS, SEASONS] {
            assert!(!template.contains(SLUG_PLACEHOLDER));
        }
    }

    #[test]
    fn test_fixed_queries_are_unchanged() {
        assert_eq!(Query::brands().as_str(), BRANDS);
        assert_eq!(Query::seasons().as_str(), SEASONS);
        assert_eq!(Query::brands().name(), "allBrands");
    }

    #[test]
    fn test_slug_is_interpolated_once_in_place() {
        let slug = Slug::new("fall-2023 ready&to?wear#1").unwrap();
        let query = Query::season_shows(&slug);

        assert_eq!(query.as_str().matches("fall-2023 ready&to?wear#1").count(), 1);
        assert!(query
            .as_str()
            .contains(r#"filter: { season: { slug: "fall-2023 ready&to?wear#1" } }"#));
        assert!(!query.as_str().contains(SLUG_PLACEHOLDER));
        assert_eq!(
            query.as_str(),
            SEASON_SHOWS.replace(SLUG_PLACEHOLDER, "fall-2023 ready&to?wear#1")
        );
    }

    #[test]
    fn test_brand_shows_filters_by_brand() {
        let query = Query::brand_shows(&Slug::new("chanel").unwrap());
        assert!(query
            .as_str()
            .contains(r#"filter: { brand: { slug: "chanel" } }"#));
    }

    #[test]
    fn test_fashion_show_uses_full_slug() {
        let slug = FullSlug::new("spring-2024-couture/schiaparelli").unwrap();
        let query = Query::fashion_show(&slug);

        assert!(query
            .as_str()
            .starts_with("query {\n  fashionShowV2(slug: \"spring-2024-couture/schiaparelli\")"));
        assert!(query.as_str().contains("fragment GalleryFragment on FashionShowGallery"));
    }
}
