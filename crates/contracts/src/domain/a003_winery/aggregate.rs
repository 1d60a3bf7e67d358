use crate::domain::a004_wine::aggregate::Wine;
use crate::domain::common::lenient::{opt_f64, opt_i32, opt_text, opt_u32, vec_or_null};
use crate::domain::common::{CatalogResource, RegionRef};
use serde::{Deserialize, Serialize};

/// Wine producer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Winery {
    pub slug: String,
    pub name: String,

    #[serde(default, deserialize_with = "opt_text")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "opt_i32")]
    pub established_year: Option<i32>,

    #[serde(default, deserialize_with = "opt_f64")]
    pub latitude: Option<f64>,

    #[serde(default, deserialize_with = "opt_f64")]
    pub longitude: Option<f64>,

    #[serde(default, deserialize_with = "opt_u32")]
    pub wines_count: Option<u32>,

    #[serde(default)]
    pub region: Option<RegionRef>,

    /// Embedded only in the detail payload
    #[serde(default, deserialize_with = "vec_or_null")]
    pub wines: Vec<Wine>,
}

impl Winery {
    pub const RESOURCE: CatalogResource = CatalogResource::Wineries;

    pub fn route(&self) -> String {
        Self::RESOURCE.detail_route(&self.slug)
    }

    pub fn region_name(&self) -> Option<&str> {
        self.region.as_ref().map(|r| r.name.as_str())
    }

    pub fn country_name(&self) -> Option<&str> {
        self.region.as_ref().and_then(|r| r.country_name())
    }

    /// Both coordinates, or nothing
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_region_and_country_resolve() {
        let winery: Winery = serde_json::from_str(
            r#"{
                "slug": "quinta-do-crasto",
                "name": "Quinta do Crasto",
                "established_year": 1615,
                "latitude": "41.16",
                "longitude": null,
                "region": {"slug": "douro", "name": "Douro",
                           "country": {"slug": "portugal", "name": "Portugal"}},
                "wines": [{"slug": "crasto-tinto", "name": "Crasto Tinto"}]
            }"#,
        )
        .unwrap();
        assert_eq!(winery.region_name(), Some("Douro"));
        assert_eq!(winery.country_name(), Some("Portugal"));
        assert_eq!(winery.latitude, Some(41.16));
        assert_eq!(winery.coordinates(), None);
        assert_eq!(winery.wines.len(), 1);
        assert_eq!(winery.route(), "/vinicolas/quinta-do-crasto");
    }
}
