use axum::{routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers;
use crate::state::AppState;

/// All application routes.
///
/// Anything not matched here is served from `static_dir`; unknown paths get
/// `index.html` so the client-side router can resolve them.
pub fn configure_routes(state: AppState, static_dir: &str) -> Router {
    let index = std::path::Path::new(static_dir).join("index.html");
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/sitemap.xml", get(handlers::seo::sitemap_xml))
        .route("/robots.txt", get(handlers::seo::robots_txt))
        .fallback_service(spa)
        .with_state(state)
}
