use serde::{Deserialize, Serialize};

/// One of the five catalog resources exposed by the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogResource {
    Countries,
    Regions,
    Wineries,
    Wines,
    Grapes,
}

impl CatalogResource {
    pub const ALL: [CatalogResource; 5] = [
        CatalogResource::Wines,
        CatalogResource::Wineries,
        CatalogResource::Regions,
        CatalogResource::Countries,
        CatalogResource::Grapes,
    ];

    /// Path segment on the remote API (`/countries/`, `/wines/`, ...)
    pub fn api_path(&self) -> &'static str {
        match self {
            CatalogResource::Countries => "countries",
            CatalogResource::Regions => "regions",
            CatalogResource::Wineries => "wineries",
            CatalogResource::Wines => "wines",
            CatalogResource::Grapes => "grapes",
        }
    }

    /// Path segment of the public site routes
    pub fn route_segment(&self) -> &'static str {
        match self {
            CatalogResource::Countries => "paises",
            CatalogResource::Regions => "regioes",
            CatalogResource::Wineries => "vinicolas",
            CatalogResource::Wines => "vinhos",
            CatalogResource::Grapes => "uvas",
        }
    }

    /// Section title shown in navigation and breadcrumbs
    pub fn title(&self) -> &'static str {
        match self {
            CatalogResource::Countries => "Países",
            CatalogResource::Regions => "Regiões",
            CatalogResource::Wineries => "Vinícolas",
            CatalogResource::Wines => "Vinhos",
            CatalogResource::Grapes => "Uvas",
        }
    }

    pub fn list_route(&self) -> String {
        format!("/{}", self.route_segment())
    }

    pub fn detail_route(&self, slug: &str) -> String {
        format!("/{}/{}", self.route_segment(), slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_use_public_segments() {
        assert_eq!(CatalogResource::Wineries.list_route(), "/vinicolas");
        assert_eq!(
            CatalogResource::Countries.detail_route("franca"),
            "/paises/franca"
        );
        assert_eq!(CatalogResource::Grapes.api_path(), "grapes");
    }
}
