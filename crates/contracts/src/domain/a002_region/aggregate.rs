use crate::domain::a003_winery::aggregate::Winery;
use crate::domain::common::lenient::{opt_text, opt_u32, vec_or_null};
use crate::domain::common::{CatalogResource, CountryRef};
use serde::{Deserialize, Serialize};

/// Wine region inside a country
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Region {
    pub slug: String,
    pub name: String,

    #[serde(default, deserialize_with = "opt_text")]
    pub description: Option<String>,

    #[serde(default)]
    pub country: Option<CountryRef>,

    #[serde(default, deserialize_with = "opt_u32")]
    pub wineries_count: Option<u32>,

    #[serde(default, deserialize_with = "opt_u32")]
    pub wines_count: Option<u32>,

    /// List endpoint spelling of `wineries_count`
    #[serde(default, deserialize_with = "opt_u32")]
    pub winery_count: Option<u32>,

    /// List endpoint spelling of `wines_count`
    #[serde(default, deserialize_with = "opt_u32")]
    pub wine_count: Option<u32>,

    #[serde(default, deserialize_with = "opt_text")]
    pub vivino_url: Option<String>,

    /// Embedded only in the detail payload
    #[serde(default, deserialize_with = "vec_or_null")]
    pub wineries: Vec<Winery>,
}

impl Region {
    pub const RESOURCE: CatalogResource = CatalogResource::Regions;

    pub fn route(&self) -> String {
        Self::RESOURCE.detail_route(&self.slug)
    }

    pub fn country_name(&self) -> Option<&str> {
        self.country.as_ref().map(|c| c.name.as_str())
    }

    /// Winery counter as reported by the API, whichever key it used
    pub fn winery_total(&self) -> Option<u32> {
        self.wineries_count.or(self.winery_count)
    }

    /// Wine counter as reported by the API, whichever key it used
    pub fn wine_total(&self) -> Option<u32> {
        self.wines_count.or(self.wine_count)
    }
}
