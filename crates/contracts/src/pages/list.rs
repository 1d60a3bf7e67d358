//! List page contract: query state, sort options and the list loader.

use super::view_state::ViewState;
use crate::api::{CatalogClient, CatalogTransport, ListParams};
use crate::domain::common::CatalogResource;
use serde::de::DeserializeOwned;

/// One entry of a list page's sort selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOption {
    /// Value sent as `ordering`
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> SortOption {
    SortOption { value, label }
}

const WINE_SORTS: &[SortOption] = &[
    opt("-rating", "Maior Avaliação"),
    opt("rating", "Menor Avaliação"),
    opt("name", "Nome A-Z"),
    opt("-name", "Nome Z-A"),
    opt("-price", "Maior Preço"),
    opt("price", "Menor Preço"),
];

const WINERY_SORTS: &[SortOption] = &[
    opt("name", "Nome A-Z"),
    opt("-name", "Nome Z-A"),
    opt("-wine_count", "Mais Vinhos"),
    opt("wine_count", "Menos Vinhos"),
];

const REGION_SORTS: &[SortOption] = &[
    opt("name", "Nome A-Z"),
    opt("-name", "Nome Z-A"),
    opt("country__name", "País A-Z"),
    opt("-country__name", "País Z-A"),
];

// Region-count ordering is forwarded as-is; the API decides what it means
const COUNTRY_SORTS: &[SortOption] = &[
    opt("name", "Nome A-Z"),
    opt("-name", "Nome Z-A"),
    opt("-regions_count", "Mais Regiões"),
    opt("regions_count", "Menos Regiões"),
];

const GRAPE_SORTS: &[SortOption] = &[
    opt("name", "Nome A-Z"),
    opt("-name", "Nome Z-A"),
    opt("color", "Cor"),
    opt("-wine_count", "Mais Vinhos"),
];

pub fn sort_options(resource: CatalogResource) -> &'static [SortOption] {
    match resource {
        CatalogResource::Wines => WINE_SORTS,
        CatalogResource::Wineries => WINERY_SORTS,
        CatalogResource::Regions => REGION_SORTS,
        CatalogResource::Countries => COUNTRY_SORTS,
        CatalogResource::Grapes => GRAPE_SORTS,
    }
}

/// First option of the selector
pub fn default_sort(resource: CatalogResource) -> &'static str {
    sort_options(resource)[0].value
}

/// Filter inputs of a list page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub resource: CatalogResource,
    pub search_term: String,
    pub sort_key: String,
    /// Wine list only; empty means every type
    pub wine_type: String,
}

impl ListQuery {
    pub fn new(resource: CatalogResource) -> Self {
        Self {
            resource,
            search_term: String::new(),
            sort_key: default_sort(resource).to_string(),
            wine_type: String::new(),
        }
    }

    /// `{ordering, search?, wine_type?}` in that order
    pub fn to_params(&self) -> ListParams {
        ListParams::new()
            .ordering(&self.sort_key)
            .search(&self.search_term)
            .wine_type(&self.wine_type)
    }

    /// Back to the defaults ("clear filters")
    pub fn cleared(&self) -> Self {
        Self::new(self.resource)
    }

    pub fn is_default(&self) -> bool {
        *self == self.cleared()
    }
}

/// Fetch one list page. Every failure becomes [`ViewState::Empty`].
pub async fn load_list<E, T>(client: &CatalogClient<T>, query: &ListQuery) -> ViewState<Vec<E>>
where
    E: DeserializeOwned,
    T: CatalogTransport,
{
    match client.list(query.resource, &query.to_params()).await {
        Ok(items) => ViewState::from_items(items),
        Err(e) => {
            log::warn!("failed to load {} list: {}", query.resource.api_path(), e);
            ViewState::Empty
        }
    }
}
