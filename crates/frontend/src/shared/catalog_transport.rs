use contracts::api::{ApiError, CatalogTransport, TransportResponse};
use gloo_net::http::Request;

/// Browser `fetch` via gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl CatalogTransport for GlooTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, ApiError> {
        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(TransportResponse { status, body })
    }
}
