use crate::domain::a002_region::aggregate::Region;
use crate::domain::common::lenient::{opt_text, opt_u32, vec_or_null};
use crate::domain::common::CatalogResource;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Wine-producing country
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Country {
    pub slug: String,
    pub name: String,

    #[serde(default, deserialize_with = "opt_text")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "opt_u32")]
    pub regions_count: Option<u32>,

    #[serde(default, deserialize_with = "opt_u32")]
    pub wineries_count: Option<u32>,

    #[serde(default, deserialize_with = "opt_u32")]
    pub wines_count: Option<u32>,

    #[serde(default, deserialize_with = "opt_text")]
    pub vivino_url: Option<String>,

    /// Embedded only in the detail payload
    #[serde(default, deserialize_with = "vec_or_null")]
    pub regions: Vec<Region>,
}

impl Country {
    pub const RESOURCE: CatalogResource = CatalogResource::Countries;

    pub fn route(&self) -> String {
        Self::RESOURCE.detail_route(&self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_payload_embeds_regions() {
        let json = r#"{
            "slug": "portugal",
            "name": "Portugal",
            "regions_count": 14,
            "wines_count": "311",
            "vivino_url": "https://www.vivino.com/pt",
            "regions": [
                {"slug": "douro", "name": "Douro", "wineries_count": 40},
                {"slug": "alentejo", "name": "Alentejo"}
            ]
        }"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.regions_count, Some(14));
        assert_eq!(country.wines_count, Some(311));
        assert_eq!(country.wineries_count, None);
        assert_eq!(country.regions.len(), 2);
        assert_eq!(country.regions[0].slug, "douro");
        assert_eq!(country.route(), "/paises/portugal");
    }
}
