use std::sync::Arc;

use crate::shared::catalog_http::ServerCatalogClient;

/// Shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ServerCatalogClient>,
    pub site_url: Arc<str>,
}

impl AppState {
    pub fn new(catalog: ServerCatalogClient, site_url: &str) -> Self {
        Self {
            catalog: Arc::new(catalog),
            site_url: Arc::from(site_url.trim_end_matches('/')),
        }
    }
}
