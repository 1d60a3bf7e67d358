use super::envelope::ListEnvelope;
use super::error::ApiError;
use super::params::ListParams;
use super::transport::CatalogTransport;
use crate::domain::a001_country::aggregate::Country;
use crate::domain::a002_region::aggregate::Region;
use crate::domain::a003_winery::aggregate::Winery;
use crate::domain::a004_wine::aggregate::Wine;
use crate::domain::a005_grape::aggregate::Grape;
use crate::domain::common::CatalogResource;
use crate::shared::media;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";
pub const DEFAULT_MEDIA_BASE_URL: &str = "http://127.0.0.1:8000/media";

/// Where the catalog API and its media live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub api_base_url: String,
    pub media_base_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            media_base_url: DEFAULT_MEDIA_BASE_URL.to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn new(api_base_url: impl Into<String>, media_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            media_base_url: media_base_url.into(),
        }
    }

    pub fn image_url_for(&self, vivino_id: Option<&str>) -> Option<String> {
        media::image_url_for(&self.media_base_url, vivino_id)
    }
}

/// Catalog API client: one GET per call, no retries, no caching
#[derive(Debug, Clone)]
pub struct CatalogClient<T> {
    config: CatalogConfig,
    transport: T,
}

impl<T: CatalogTransport> CatalogClient<T> {
    pub fn new(config: CatalogConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn image_url_for(&self, vivino_id: Option<&str>) -> Option<String> {
        self.config.image_url_for(vivino_id)
    }

    fn base(&self) -> &str {
        self.config.api_base_url.trim_end_matches('/')
    }

    pub fn list_url(&self, resource: CatalogResource, params: &ListParams) -> String {
        format!(
            "{}/{}/?{}",
            self.base(),
            resource.api_path(),
            params.to_query_string()
        )
    }

    pub fn detail_url(&self, resource: CatalogResource, slug: &str) -> String {
        format!(
            "{}/{}/{}/",
            self.base(),
            resource.api_path(),
            urlencoding::encode(slug)
        )
    }

    async fn fetch_json(&self, url: &str) -> Result<Value, ApiError> {
        log::debug!("Fetching from: {}", url);
        let response = self.transport.get(url).await.map_err(|e| {
            log::warn!("catalog request failed: {} ({})", url, e);
            e
        })?;

        if response.status == 404 {
            return Err(ApiError::NotFound);
        }
        if !response.is_success() {
            log::warn!("catalog request {} answered {}", url, response.status);
            return Err(ApiError::Status(response.status));
        }

        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    // ------------------------------------------------------------------------
    // Generic operations
    // ------------------------------------------------------------------------

    /// `GET /{resource}/?{params}`, normalized to a sequence in API order
    pub async fn list<E: DeserializeOwned>(
        &self,
        resource: CatalogResource,
        params: &ListParams,
    ) -> Result<Vec<E>, ApiError> {
        let json = self.fetch_json(&self.list_url(resource, params)).await?;
        let envelope: ListEnvelope<E> =
            serde_json::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(envelope.into_items())
    }

    /// `GET /{resource}/{slug}/`; an empty body counts as not found
    pub async fn get<E: DeserializeOwned>(
        &self,
        resource: CatalogResource,
        slug: &str,
    ) -> Result<E, ApiError> {
        let json = self.fetch_json(&self.detail_url(resource, slug)).await?;
        let is_empty = match &json {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            _ => false,
        };
        if is_empty {
            return Err(ApiError::NotFound);
        }
        serde_json::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
    }

    // ------------------------------------------------------------------------
    // Resources
    // ------------------------------------------------------------------------

    pub async fn countries(&self, params: &ListParams) -> Result<Vec<Country>, ApiError> {
        self.list(CatalogResource::Countries, params).await
    }

    pub async fn country(&self, slug: &str) -> Result<Country, ApiError> {
        self.get(CatalogResource::Countries, slug).await
    }

    pub async fn regions(&self, params: &ListParams) -> Result<Vec<Region>, ApiError> {
        self.list(CatalogResource::Regions, params).await
    }

    pub async fn region(&self, slug: &str) -> Result<Region, ApiError> {
        self.get(CatalogResource::Regions, slug).await
    }

    pub async fn wineries(&self, params: &ListParams) -> Result<Vec<Winery>, ApiError> {
        self.list(CatalogResource::Wineries, params).await
    }

    pub async fn winery(&self, slug: &str) -> Result<Winery, ApiError> {
        self.get(CatalogResource::Wineries, slug).await
    }

    pub async fn wines(&self, params: &ListParams) -> Result<Vec<Wine>, ApiError> {
        self.list(CatalogResource::Wines, params).await
    }

    pub async fn wine(&self, slug: &str) -> Result<Wine, ApiError> {
        self.get(CatalogResource::Wines, slug).await
    }

    pub async fn grapes(&self, params: &ListParams) -> Result<Vec<Grape>, ApiError> {
        self.list(CatalogResource::Grapes, params).await
    }

    pub async fn grape(&self, slug: &str) -> Result<Grape, ApiError> {
        self.get(CatalogResource::Grapes, slug).await
    }

    // ------------------------------------------------------------------------
    // Derived queries
    // ------------------------------------------------------------------------

    pub async fn search_wines(
        &self,
        query: &str,
        filters: &ListParams,
    ) -> Result<Vec<Wine>, ApiError> {
        self.wines(&ListParams::new().search(query).merge(filters))
            .await
    }

    /// Wines embedded in the winery detail payload.
    ///
    /// Reads the detail endpoint instead of a filtered list since it already
    /// carries the wines. A failure yields an empty list.
    pub async fn wines_by_winery(&self, winery_slug: &str) -> Vec<Wine> {
        match self.winery(winery_slug).await {
            Ok(winery) => winery.wines,
            Err(e) => {
                log::warn!("Error fetching winery wines for {}: {}", winery_slug, e);
                Vec::new()
            }
        }
    }

    pub async fn wines_by_region(
        &self,
        region_slug: &str,
        params: &ListParams,
    ) -> Result<Vec<Wine>, ApiError> {
        let query = ListParams::new()
            .filter("winery__region__slug", region_slug)
            .merge(params);
        self.wines(&query).await
    }

    pub async fn wines_by_country(
        &self,
        country_slug: &str,
        params: &ListParams,
    ) -> Result<Vec<Wine>, ApiError> {
        let query = ListParams::new()
            .filter("winery__region__country__slug", country_slug)
            .merge(params);
        self.wines(&query).await
    }

    pub async fn wines_by_grape(
        &self,
        grape_slug: &str,
        params: &ListParams,
    ) -> Result<Vec<Wine>, ApiError> {
        let query = ListParams::new()
            .filter("grapes__slug", grape_slug)
            .merge(params);
        self.wines(&query).await
    }

    pub async fn wines_by_type(
        &self,
        wine_type: &str,
        params: &ListParams,
    ) -> Result<Vec<Wine>, ApiError> {
        self.wines(&ListParams::new().wine_type(wine_type).merge(params))
            .await
    }

    pub async fn top_rated_wines(&self, limit: u32) -> Result<Vec<Wine>, ApiError> {
        self.wines(&ListParams::new().ordering("-rating").limit(limit))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockTransport;

    const API: &str = "http://api.test/api";

    fn client(mock: &MockTransport) -> CatalogClient<MockTransport> {
        CatalogClient::new(
            CatalogConfig::new(format!("{}/", API), "http://api.test/media"),
            mock.clone(),
        )
    }

    #[tokio::test]
    async fn test_detail_returns_requested_slug() {
        let mock = MockTransport::new();
        mock.respond(
            &format!("{}/regions/douro/", API),
            200,
            r#"{"slug": "douro", "name": "Douro"}"#,
        );
        mock.respond(
            &format!("{}/grapes/baga/", API),
            200,
            r#"{"slug": "baga", "name": "Baga", "color": "Tinta"}"#,
        );
        let c = client(&mock);
        assert_eq!(c.region("douro").await.unwrap().slug, "douro");
        assert_eq!(c.grape("baga").await.unwrap().slug, "baga");
        assert_eq!(
            mock.requests(),
            vec![
                format!("{}/regions/douro/", API),
                format!("{}/grapes/baga/", API)
            ]
        );
    }

    #[tokio::test]
    async fn test_list_accepts_both_envelopes_in_api_order() {
        let mock = MockTransport::new();
        mock.respond(
            &format!("{}/countries/", API),
            200,
            r#"{"count": 2, "results": [{"slug": "chile", "name": "Chile"}, {"slug": "brasil", "name": "Brasil"}]}"#,
        );
        mock.respond(
            &format!("{}/grapes/", API),
            200,
            r#"[{"slug": "syrah", "name": "Syrah"}, {"slug": "alvarinho", "name": "Alvarinho"}]"#,
        );
        let c = client(&mock);
        let countries = c.countries(&ListParams::new()).await.unwrap();
        let grapes = c.grapes(&ListParams::new()).await.unwrap();
        assert_eq!(countries[0].slug, "chile");
        assert_eq!(countries[1].slug, "brasil");
        assert_eq!(grapes[0].slug, "syrah");
        assert_eq!(grapes[1].slug, "alvarinho");
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let mock = MockTransport::new();
        mock.respond(&format!("{}/wines/broken/", API), 500, "oops");
        mock.respond(&format!("{}/wines/empty/", API), 200, "{}");
        mock.respond(&format!("{}/wines/garbled/", API), 200, "<html>");
        mock.fail(&format!("{}/wines/offline/", API), "connection refused");
        let c = client(&mock);

        assert_eq!(c.wine("broken").await.unwrap_err(), ApiError::Status(500));
        assert_eq!(c.wine("missing").await.unwrap_err(), ApiError::NotFound);
        assert_eq!(c.wine("empty").await.unwrap_err(), ApiError::NotFound);
        assert!(matches!(
            c.wine("garbled").await.unwrap_err(),
            ApiError::Decode(_)
        ));
        assert!(matches!(
            c.wine("offline").await.unwrap_err(),
            ApiError::Transport(_)
        ));
    }

    #[tokio::test]
    async fn test_derived_queries_build_filtered_list_urls() {
        let mock = MockTransport::new();
        mock.respond(&format!("{}/wines/?", API), 200, "[]");
        let c = client(&mock);

        c.wines_by_region("douro", &ListParams::new()).await.unwrap();
        c.wines_by_country("portugal", &ListParams::new().limit(5))
            .await
            .unwrap();
        c.wines_by_grape("baga", &ListParams::new()).await.unwrap();
        c.top_rated_wines(10).await.unwrap();

        assert_eq!(
            mock.requests(),
            vec![
                format!("{}/wines/?winery__region__slug=douro", API),
                format!("{}/wines/?winery__region__country__slug=portugal&limit=5", API),
                format!("{}/wines/?grapes__slug=baga", API),
                format!("{}/wines/?ordering=-rating&limit=10", API),
            ]
        );
    }

    #[tokio::test]
    async fn test_wines_by_winery_reads_the_detail_payload() {
        let mock = MockTransport::new();
        mock.respond(
            &format!("{}/wineries/crasto/", API),
            200,
            r#"{"slug": "crasto", "name": "Crasto", "wines": [{"slug": "a", "name": "A"}, {"slug": "b", "name": "B"}]}"#,
        );
        let c = client(&mock);
        let wines = c.wines_by_winery("crasto").await;
        assert_eq!(wines.len(), 2);
        assert_eq!(mock.requests(), vec![format!("{}/wineries/crasto/", API)]);

        // Failures degrade to an empty list
        assert!(c.wines_by_winery("gone").await.is_empty());
    }

    #[test]
    fn test_image_url_uses_media_base() {
        let mock = MockTransport::new();
        let c = client(&mock);
        assert_eq!(
            c.image_url_for(Some("12345")).as_deref(),
            Some("http://api.test/media/12345.png")
        );
        assert_eq!(c.image_url_for(None), None);
    }
}
