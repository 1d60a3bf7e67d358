//! Compact shapes the API embeds when one resource points at another.

use super::lenient::{opt_text, opt_u32, text_or_empty};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CountryRef {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub slug: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "opt_u32")]
    pub regions_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegionRef {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub slug: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub name: String,
    #[serde(default)]
    pub country: Option<CountryRef>,
}

impl RegionRef {
    pub fn country_name(&self) -> Option<&str> {
        self.country.as_ref().map(|c| c.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WineryRef {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub slug: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub description: Option<String>,
    #[serde(default)]
    pub region: Option<RegionRef>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GrapeRef {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub slug: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub name: String,
}

/// Minimal row used when only the slug matters (sitemap)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlugOnly {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub slug: String,
}
