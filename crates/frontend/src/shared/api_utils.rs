//! Catalog API configuration for the browser build.
//!
//! Base URLs are fixed at compile time: set `CATALOG_API_URL` and
//! `CATALOG_MEDIA_URL` when running `trunk build` to point at another API.

use contracts::api::client::{DEFAULT_API_BASE_URL, DEFAULT_MEDIA_BASE_URL};
use contracts::api::{CatalogClient, CatalogConfig};

use super::catalog_transport::GlooTransport;

pub fn api_base() -> &'static str {
    option_env!("CATALOG_API_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

pub fn media_base() -> &'static str {
    option_env!("CATALOG_MEDIA_URL").unwrap_or(DEFAULT_MEDIA_BASE_URL)
}

pub fn catalog_config() -> CatalogConfig {
    CatalogConfig::new(api_base(), media_base())
}

/// Client for one page load; cheap to build
pub fn catalog_client() -> CatalogClient<GlooTransport> {
    CatalogClient::new(catalog_config(), GlooTransport)
}

/// `{media}/{vivino_id}.png`, or `None` when the wine has no id
pub fn image_url_for(vivino_id: Option<&str>) -> Option<String> {
    contracts::shared::media::image_url_for(media_base(), vivino_id)
}
