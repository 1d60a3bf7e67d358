//! Detail page loaders.
//!
//! Each loader fetches the entity by slug and takes its related collection
//! from the embedded relation. Secondary requests, where a page has one, run
//! only after the primary fetch succeeded.

use super::view_state::ViewState;
use crate::api::{ApiError, CatalogClient, CatalogTransport, ListParams};
use crate::domain::a001_country::aggregate::Country;
use crate::domain::a002_region::aggregate::Region;
use crate::domain::a003_winery::aggregate::Winery;
use crate::domain::a004_wine::aggregate::Wine;
use crate::domain::a005_grape::aggregate::Grape;
use crate::domain::common::CatalogResource;

/// Wines listed on a grape page
pub const GRAPE_WINES_LIMIT: u32 = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct CountryDetail {
    pub country: Country,
    pub regions: Vec<Region>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionDetail {
    pub region: Region,
    pub wineries: Vec<Winery>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WineryDetail {
    pub winery: Winery,
    pub wines: Vec<Wine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WineDetail {
    pub wine: Wine,
    /// Other wines from the same winery, current wine excluded
    pub related: Vec<Wine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GrapeDetail {
    pub grape: Grape,
    pub wines: Vec<Wine>,
}

fn settle<T>(resource: CatalogResource, slug: &str, result: Result<T, ApiError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) if e.is_not_found() => {
            log::info!("{} '{}' not found", resource.api_path(), slug);
            None
        }
        Err(e) => {
            log::warn!(
                "failed to load {} '{}': {}",
                resource.api_path(),
                slug,
                e
            );
            None
        }
    }
}

pub async fn load_country<T: CatalogTransport>(
    client: &CatalogClient<T>,
    slug: &str,
) -> ViewState<CountryDetail> {
    let Some(mut country) = settle(CatalogResource::Countries, slug, client.country(slug).await)
    else {
        return ViewState::Empty;
    };
    let regions = std::mem::take(&mut country.regions);
    ViewState::Ready(CountryDetail { country, regions })
}

pub async fn load_region<T: CatalogTransport>(
    client: &CatalogClient<T>,
    slug: &str,
) -> ViewState<RegionDetail> {
    let Some(mut region) = settle(CatalogResource::Regions, slug, client.region(slug).await)
    else {
        return ViewState::Empty;
    };
    let wineries = std::mem::take(&mut region.wineries);
    ViewState::Ready(RegionDetail { region, wineries })
}

pub async fn load_winery<T: CatalogTransport>(
    client: &CatalogClient<T>,
    slug: &str,
) -> ViewState<WineryDetail> {
    let Some(mut winery) = settle(CatalogResource::Wineries, slug, client.winery(slug).await)
    else {
        return ViewState::Empty;
    };
    let wines = std::mem::take(&mut winery.wines);
    ViewState::Ready(WineryDetail { winery, wines })
}

/// Wine page: the wine, then one request for the rest of its winery's wines
pub async fn load_wine<T: CatalogTransport>(
    client: &CatalogClient<T>,
    slug: &str,
) -> ViewState<WineDetail> {
    let Some(wine) = settle(CatalogResource::Wines, slug, client.wine(slug).await) else {
        return ViewState::Empty;
    };
    let related = match wine.winery_slug() {
        Some(winery_slug) => client
            .wines_by_winery(winery_slug)
            .await
            .into_iter()
            .filter(|w| w.slug != slug)
            .collect(),
        None => Vec::new(),
    };
    ViewState::Ready(WineDetail { wine, related })
}

/// Grape page: the grape, then its best rated wines
pub async fn load_grape<T: CatalogTransport>(
    client: &CatalogClient<T>,
    slug: &str,
) -> ViewState<GrapeDetail> {
    let Some(grape) = settle(CatalogResource::Grapes, slug, client.grape(slug).await) else {
        return ViewState::Empty;
    };
    let params = ListParams::new()
        .ordering("-rating")
        .limit(GRAPE_WINES_LIMIT);
    let wines = settle(
        CatalogResource::Wines,
        slug,
        client.wines_by_grape(slug, &params).await,
    )
    .unwrap_or_default();
    ViewState::Ready(GrapeDetail { grape, wines })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockTransport;
    use crate::api::CatalogConfig;

    const API: &str = "http://api.test/api";

    fn client(mock: &MockTransport) -> CatalogClient<MockTransport> {
        CatalogClient::new(CatalogConfig::new(API, "http://api.test/media"), mock.clone())
    }

    #[tokio::test]
    async fn test_failed_winery_shows_not_found_without_secondary_requests() {
        let mock = MockTransport::new();
        mock.respond(&format!("{}/wineries/crasto/", API), 500, "Server Error");
        let state = load_winery(&client(&mock), "crasto").await;
        assert!(state.is_empty());
        assert_eq!(mock.requests(), vec![format!("{}/wineries/crasto/", API)]);
    }

    #[tokio::test]
    async fn test_failed_wine_issues_no_related_request() {
        let mock = MockTransport::new();
        mock.fail(&format!("{}/wines/", API), "offline");
        let state = load_wine(&client(&mock), "x").await;
        assert!(state.is_empty());
        assert_eq!(mock.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_related_collections_come_from_embedded_relations() {
        let mock = MockTransport::new();
        mock.respond(
            &format!("{}/countries/portugal/", API),
            200,
            r#"{"slug": "portugal", "name": "Portugal", "regions_count": 40,
                "regions": [{"slug": "douro", "name": "Douro"}]}"#,
        );
        mock.respond(
            &format!("{}/regions/douro/", API),
            200,
            r#"{"slug": "douro", "name": "Douro",
                "wineries": [{"slug": "crasto", "name": "Crasto"}, {"slug": "vallado", "name": "Vallado"}]}"#,
        );
        let c = client(&mock);

        let country = load_country(&c, "portugal").await;
        let country = country.ready().unwrap();
        assert_eq!(country.country.slug, "portugal");
        assert_eq!(country.regions.len(), 1);
        // the API counter is kept even though only one region was embedded
        assert_eq!(country.country.regions_count, Some(40));

        let region = load_region(&c, "douro").await;
        assert_eq!(region.ready().unwrap().wineries.len(), 2);
        assert_eq!(mock.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_wine_detail_drops_itself_from_related() {
        let mock = MockTransport::new();
        mock.respond(
            &format!("{}/wines/crasto-tinto/", API),
            200,
            r#"{"slug": "crasto-tinto", "name": "Crasto Tinto",
                "winery": {"slug": "crasto", "name": "Crasto"}}"#,
        );
        mock.respond(
            &format!("{}/wineries/crasto/", API),
            200,
            r#"{"slug": "crasto", "name": "Crasto", "wines": [
                {"slug": "crasto-branco", "name": "Crasto Branco"},
                {"slug": "crasto-tinto", "name": "Crasto Tinto"},
                {"slug": "crasto-reserva", "name": "Crasto Reserva"}
            ]}"#,
        );
        let state = load_wine(&client(&mock), "crasto-tinto").await;
        let detail = state.ready().unwrap();
        let related: Vec<&str> = detail.related.iter().map(|w| w.slug.as_str()).collect();
        assert_eq!(related, vec!["crasto-branco", "crasto-reserva"]);
        assert_eq!(
            mock.requests(),
            vec![
                format!("{}/wines/crasto-tinto/", API),
                format!("{}/wineries/crasto/", API)
            ]
        );
    }

    #[tokio::test]
    async fn test_wine_without_winery_skips_related_request() {
        let mock = MockTransport::new();
        mock.respond(
            &format!("{}/wines/solo/", API),
            200,
            r#"{"slug": "solo", "name": "Solo"}"#,
        );
        let state = load_wine(&client(&mock), "solo").await;
        assert!(state.ready().unwrap().related.is_empty());
        assert_eq!(mock.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_grape_detail_lists_wines_by_grape() {
        let mock = MockTransport::new();
        mock.respond(
            &format!("{}/grapes/baga/", API),
            200,
            r#"{"slug": "baga", "name": "Baga", "color": "Tinta"}"#,
        );
        mock.respond(
            &format!("{}/wines/?", API),
            200,
            r#"[{"slug": "bairrada", "name": "Bairrada"}]"#,
        );
        let state = load_grape(&client(&mock), "baga").await;
        assert_eq!(state.ready().unwrap().wines.len(), 1);
        assert_eq!(
            mock.requests()[1],
            format!("{}/wines/?grapes__slug=baga&ordering=-rating&limit=12", API)
        );
    }

    #[tokio::test]
    async fn test_wine_with_null_crumb_slug_still_loads() {
        let mock = MockTransport::new();
        mock.respond(
            &format!("{}/wines/quinta-nova/", API),
            200,
            r#"{"slug": "quinta-nova", "name": "Quinta Nova",
                "grapes": [{"slug": "touriga", "name": null}],
                "breadcrumbs": [
                    {"type": "country", "slug": "portugal", "name": "Portugal"},
                    {"type": "wine", "slug": null, "name": "Quinta Nova"}
                ]}"#,
        );
        let state = load_wine(&client(&mock), "quinta-nova").await;
        let detail = state.ready().unwrap();
        assert_eq!(detail.wine.breadcrumbs[1].slug, "");
        assert_eq!(detail.wine.grapes[0].name, "");
    }
}
