//! Validated newtype wrappers for configuration and query values.
//!
//! Slugs end up inside GraphQL string literals, so they are validated on
//! construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A validated brand or season slug (e.g. `chanel`, `fall-2023-ready-to-wear`).
///
/// The slug is substituted verbatim into a GraphQL document, so it must not
/// contain anything that would terminate or escape the surrounding string
/// literal: double quotes, backslashes and control characters are rejected.
/// No other format rules are applied; an unknown slug simply yields an
/// empty result from the API.
///
/// # Example
///
/// ```rust
/// use vogue_api::Slug;
///
/// let slug = Slug::new("chanel").unwrap();
/// assert_eq!(slug.as_ref(), "chanel");
///
/// assert!(Slug::new("chanel\") { id }").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Creates a new validated slug.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSlug`] if the slug is empty or contains
    /// a double quote, a backslash or a control character.
    pub fn new(slug: impl Into<String>) -> Result<Self, ConfigError> {
        let slug = slug.into();
        if let Some(reason) = Self::rejection(&slug) {
            return Err(ConfigError::InvalidSlug { slug, reason });
        }
        Ok(Self(slug))
    }

    fn rejection(slug: &str) -> Option<&'static str> {
        if slug.is_empty() {
            return Some("slug cannot be empty");
        }
        slug.chars().find_map(|c| match c {
            '"' => Some("contains a double quote"),
            '\\' => Some("contains a backslash"),
            c if c.is_control() => Some("contains a control character"),
            _ => None,
        })
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Slug {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Slug {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Slug {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated fashion-show slug of the form `{season-slug}/{brand-slug}`.
///
/// # Example
///
/// ```rust
/// use vogue_api::FullSlug;
///
/// let slug = FullSlug::new("fall-2023-ready-to-wear/chanel").unwrap();
/// assert_eq!(slug.season().as_ref(), "fall-2023-ready-to-wear");
/// assert_eq!(slug.brand().as_ref(), "chanel");
/// assert_eq!(slug.to_string(), "fall-2023-ready-to-wear/chanel");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FullSlug {
    season: Slug,
    brand: Slug,
}

impl FullSlug {
    /// Creates a new validated full slug.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFullSlug`] if the value is not two
    /// non-empty segments separated by a single `/`, or
    /// [`ConfigError::InvalidSlug`] if either segment is not a valid slug.
    pub fn new(full_slug: impl Into<String>) -> Result<Self, ConfigError> {
        let full_slug = full_slug.into();
        let Some((season, brand)) = full_slug.split_once('/') else {
            return Err(ConfigError::InvalidFullSlug { slug: full_slug });
        };
        if season.is_empty() || brand.is_empty() || brand.contains('/') {
            return Err(ConfigError::InvalidFullSlug { slug: full_slug });
        }

        Ok(Self {
            season: Slug::new(season)?,
            brand: Slug::new(brand)?,
        })
    }

    /// Builds a full slug from its season and brand parts.
    #[must_use]
    pub const fn from_parts(season: Slug, brand: Slug) -> Self {
        Self { season, brand }
    }

    /// Returns the season part.
    #[must_use]
    pub const fn season(&self) -> &Slug {
        &self.season
    }

    /// Returns the brand part.
    #[must_use]
    pub const fn brand(&self) -> &Slug {
        &self.brand
    }
}

impl fmt::Display for FullSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.season, self.brand)
    }
}

impl FromStr for FullSlug {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for FullSlug {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FullSlug {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated base URL for the GraphQL endpoint.
///
/// Must be an absolute `http` or `https` URL with a host. The `/graphql`
/// path is appended by the client; any trailing slash is dropped here.
///
/// # Example
///
/// ```rust
/// use vogue_api::BaseUrl;
///
/// let url = BaseUrl::new("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
/// assert_eq!(url.host_header(), "127.0.0.1:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    host: String,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL cannot be parsed,
    /// uses a scheme other than `http`/`https`, carries a query or fragment,
    /// or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let raw = raw.trim().trim_end_matches('/').to_string();

        let parsed = reqwest::Url::parse(&raw).map_err(|e| ConfigError::InvalidBaseUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: raw,
                reason: "scheme must be http or https".to_string(),
            });
        }

        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ConfigError::InvalidBaseUrl {
                url: raw,
                reason: "URL must not have a query or fragment".to_string(),
            });
        }

        let Some(host_name) = parsed.host_str() else {
            return Err(ConfigError::InvalidBaseUrl {
                url: raw,
                reason: "URL has no host".to_string(),
            });
        };
        let host = parsed
            .port()
            .map_or_else(|| host_name.to_string(), |port| format!("{host_name}:{port}"));

        Ok(Self { url: raw, host })
    }

    /// Returns the value for the `Host` header (`host` or `host:port`).
    #[must_use]
    pub fn host_header(&self) -> &str {
        &self.host
    }
}

impl Default for BaseUrl {
    /// The public Vogue endpoint, `https://graphql.vogue.com`.
    fn default() -> Self {
        Self {
            url: "https://graphql.vogue.com".to_string(),
            host: "graphql.vogue.com".to_string(),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl FromStr for BaseUrl {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
