use contracts::api::{
    ApiError, CatalogClient, CatalogConfig, CatalogTransport, TransportResponse,
};
use std::time::Duration;

use super::config::CatalogSection;

/// `reqwest`-backed transport for server-side calls to the catalog API
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl CatalogTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, ApiError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(TransportResponse { status, body })
    }
}

pub type ServerCatalogClient = CatalogClient<ReqwestTransport>;

pub fn build_client(section: &CatalogSection) -> anyhow::Result<ServerCatalogClient> {
    let transport = ReqwestTransport::new(Duration::from_secs(section.timeout_secs))?;
    let config = CatalogConfig::new(&section.api_base_url, &section.media_base_url);
    Ok(CatalogClient::new(config, transport))
}
