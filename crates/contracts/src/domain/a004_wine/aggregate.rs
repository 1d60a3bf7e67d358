use crate::domain::common::lenient::{
    opt_f64, opt_i32, opt_text, opt_u32, text_or_empty, vec_or_null,
};
use crate::domain::common::{CatalogResource, GrapeRef, WineryRef};
use crate::shared::text::format_price;
use serde::{Deserialize, Serialize};

/// Wine types offered by the list filter, in display order
pub const WINE_TYPES: [&str; 7] = [
    "Vinho Tinto",
    "Vinho Branco",
    "Vinho Rosé",
    "Champagne",
    "Vinho Espumante",
    "Vinho Doce",
    "Vinho Fortificado",
];

/// One step of the location trail the API attaches to a wine
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Breadcrumb {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub slug: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub name: String,
}

/// A single wine label
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Wine {
    pub slug: String,
    pub name: String,

    #[serde(default, deserialize_with = "opt_text")]
    pub wine_type: Option<String>,

    #[serde(default, deserialize_with = "opt_text")]
    pub wine_style: Option<String>,

    /// 0 to 5
    #[serde(default, deserialize_with = "opt_f64")]
    pub rating: Option<f64>,

    #[serde(default, deserialize_with = "opt_f64")]
    pub price: Option<f64>,

    #[serde(default, deserialize_with = "opt_i32")]
    pub vintage: Option<i32>,

    #[serde(default, deserialize_with = "opt_f64")]
    pub alcohol_content: Option<f64>,

    /// Millilitres
    #[serde(default, deserialize_with = "opt_u32")]
    pub volume: Option<u32>,

    #[serde(default, deserialize_with = "opt_text")]
    pub serving_temperature: Option<String>,

    #[serde(default, deserialize_with = "opt_text")]
    pub description: Option<String>,

    /// External image reference, only used to build the label URL
    #[serde(default, deserialize_with = "opt_text")]
    pub vivino_id: Option<String>,

    #[serde(default)]
    pub winery: Option<WineryRef>,

    #[serde(default, deserialize_with = "vec_or_null")]
    pub grapes: Vec<GrapeRef>,

    #[serde(default, deserialize_with = "vec_or_null")]
    pub breadcrumbs: Vec<Breadcrumb>,
}

impl Wine {
    pub const RESOURCE: CatalogResource = CatalogResource::Wines;

    pub fn route(&self) -> String {
        Self::RESOURCE.detail_route(&self.slug)
    }

    pub fn winery_slug(&self) -> Option<&str> {
        self.winery
            .as_ref()
            .map(|w| w.slug.as_str())
            .filter(|s| !s.is_empty())
    }

    /// Rating for display; a zero rating counts as "not rated"
    pub fn rating_label(&self) -> Option<String> {
        self.rating.filter(|r| *r > 0.0).map(|r| format!("{:.1}", r))
    }

    pub fn price_label(&self) -> Option<String> {
        self.price.filter(|p| *p > 0.0).map(format_price)
    }

    pub fn alcohol_label(&self) -> Option<String> {
        self.alcohol_content.map(|a| format!("{}%", a))
    }

    pub fn volume_label(&self) -> Option<String> {
        self.volume.map(|v| format!("{}ml", v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_detail_payload() {
        let wine: Wine = serde_json::from_str(
            r#"{
                "slug": "catena-malbec",
                "name": "Catena Malbec",
                "wine_type": "Vinho Tinto",
                "rating": "4.1",
                "price": "129.90",
                "vintage": 2020,
                "volume": 750,
                "vivino_id": 1188,
                "winery": {"slug": "catena-zapata", "name": "Catena Zapata"},
                "grapes": [{"slug": "malbec", "name": "Malbec"}],
                "breadcrumbs": [{"type": "country", "slug": "argentina", "name": "Argentina"}]
            }"#,
        )
        .unwrap();
        assert_eq!(wine.rating_label().as_deref(), Some("4.1"));
        assert_eq!(wine.price_label().as_deref(), Some("R$ 129,90"));
        assert_eq!(wine.volume_label().as_deref(), Some("750ml"));
        assert_eq!(wine.vivino_id.as_deref(), Some("1188"));
        assert_eq!(wine.winery_slug(), Some("catena-zapata"));
        assert_eq!(wine.breadcrumbs[0].kind, "country");
    }

    #[test]
    fn test_zero_rating_is_not_shown() {
        let wine = Wine {
            rating: Some(0.0),
            ..Default::default()
        };
        assert_eq!(wine.rating_label(), None);
        assert_eq!(wine.winery_slug(), None);
    }
}
