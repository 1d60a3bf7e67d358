use super::error::ApiError;

/// Raw HTTP answer handed back by a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP GET seam of the catalog client.
///
/// Implementations send `Accept: application/json` and map network failures
/// to [`ApiError::Transport`]. Status handling is left to the client.
#[allow(async_fn_in_trait)]
pub trait CatalogTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, ApiError>;
}
