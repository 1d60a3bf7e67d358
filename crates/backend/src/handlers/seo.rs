use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use contracts::seo::sitemap::{build_sitemap, render_sitemap_xml};

use crate::state::AppState;

/// GET /sitemap.xml
///
/// Always 200: a failed catalog fetch degrades to the static routes.
pub async fn sitemap_xml(State(state): State<AppState>) -> impl IntoResponse {
    let today = chrono::Local::now().date_naive();
    let entries = build_sitemap(state.catalog.as_ref(), &state.site_url, today).await;
    tracing::info!("sitemap generated with {} entries", entries.len());
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        render_sitemap_xml(&entries),
    )
}

/// GET /robots.txt
pub async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots_body(&state.site_url),
    )
}

fn robots_body(site_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        site_url.trim_end_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_robots_points_to_sitemap() {
        let body = robots_body("https://vinho.example/");
        assert!(body.starts_with("User-agent: *"));
        assert!(body.ends_with("Sitemap: https://vinho.example/sitemap.xml\n"));
    }
}
