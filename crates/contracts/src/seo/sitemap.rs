//! sitemaps.org 0.9 generation.
//!
//! Static routes are always present. Entity routes are added from one list
//! call per resource; if any of those calls fails the sitemap degrades to the
//! static routes only, it never fails as a whole.

use crate::api::{ApiError, CatalogClient, CatalogTransport, ListParams};
use crate::domain::common::{CatalogResource, SlugOnly};
use chrono::NaiveDate;

/// Upper bound of entities requested per resource
pub const SITEMAP_LIST_LIMIT: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: NaiveDate,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

fn entry(url: String, today: NaiveDate, freq: ChangeFrequency, priority: f32) -> SitemapEntry {
    SitemapEntry {
        url,
        last_modified: today,
        change_frequency: freq,
        priority,
    }
}

/// Weight of a resource's detail pages
fn detail_weight(resource: CatalogResource) -> (ChangeFrequency, f32) {
    match resource {
        CatalogResource::Wines => (ChangeFrequency::Weekly, 0.7),
        CatalogResource::Wineries | CatalogResource::Regions | CatalogResource::Countries => {
            (ChangeFrequency::Monthly, 0.6)
        }
        CatalogResource::Grapes => (ChangeFrequency::Monthly, 0.5),
    }
}

/// Weight of a resource's list page
fn list_weight(resource: CatalogResource) -> (ChangeFrequency, f32) {
    match resource {
        CatalogResource::Wines | CatalogResource::Wineries => (ChangeFrequency::Daily, 0.9),
        _ => (ChangeFrequency::Weekly, 0.8),
    }
}

pub fn static_entries(site_url: &str, today: NaiveDate) -> Vec<SitemapEntry> {
    let base = site_url.trim_end_matches('/');
    let mut entries = vec![entry(base.to_string(), today, ChangeFrequency::Daily, 1.0)];
    entries.extend(CatalogResource::ALL.iter().map(|resource| {
        let (freq, priority) = list_weight(*resource);
        entry(
            format!("{}{}", base, resource.list_route()),
            today,
            freq,
            priority,
        )
    }));
    entries
}

async fn entity_entries<T: CatalogTransport>(
    client: &CatalogClient<T>,
    base: &str,
    today: NaiveDate,
) -> Result<Vec<SitemapEntry>, ApiError> {
    let params = ListParams::new().limit(SITEMAP_LIST_LIMIT);
    let mut entries = Vec::new();
    for resource in CatalogResource::ALL {
        let rows: Vec<SlugOnly> = client.list(resource, &params).await?;
        let (freq, priority) = detail_weight(resource);
        entries.extend(rows.into_iter().filter(|row| !row.slug.is_empty()).map(|row| {
            let slug = urlencoding::encode(&row.slug);
            entry(
                format!("{}{}", base, resource.detail_route(&slug)),
                today,
                freq,
                priority,
            )
        }));
    }
    Ok(entries)
}

/// Static routes followed by wines, wineries, regions, countries and grapes
pub async fn build_sitemap<T: CatalogTransport>(
    client: &CatalogClient<T>,
    site_url: &str,
    today: NaiveDate,
) -> Vec<SitemapEntry> {
    let mut entries = static_entries(site_url, today);
    match entity_entries(client, site_url.trim_end_matches('/'), today).await {
        Ok(dynamic) => entries.extend(dynamic),
        Err(e) => log::error!("Error generating sitemap: {}", e),
    }
    entries
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for e in entries {
        xml.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            escape_xml(&e.url),
            e.last_modified.format("%Y-%m-%d"),
            e.change_frequency.as_str(),
            e.priority
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockTransport;
    use crate::api::CatalogConfig;

    const API: &str = "http://api.test/api";
    const SITE: &str = "https://vinho.app/";

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn client(mock: &MockTransport) -> CatalogClient<MockTransport> {
        CatalogClient::new(CatalogConfig::new(API, "http://api.test/media"), mock.clone())
    }

    #[test]
    fn test_static_routes() {
        let entries = static_entries(SITE, today());
        let urls: Vec<&str> = entries.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://vinho.app",
                "https://vinho.app/vinhos",
                "https://vinho.app/vinicolas",
                "https://vinho.app/regioes",
                "https://vinho.app/paises",
                "https://vinho.app/uvas",
            ]
        );
        assert_eq!(entries[0].priority, 1.0);
        assert_eq!(entries[2].change_frequency, ChangeFrequency::Daily);
        assert_eq!(entries[3].change_frequency, ChangeFrequency::Weekly);
    }

    #[tokio::test]
    async fn test_entities_follow_static_routes() {
        let mock = MockTransport::new();
        for resource in CatalogResource::ALL {
            mock.respond(&format!("{}/{}/?", API, resource.api_path()), 200, "[]");
        }
        mock.respond(
            &format!("{}/wines/?", API),
            200,
            r#"{"results": [{"slug": "catena"}]}"#,
        );
        mock.respond(&format!("{}/grapes/?", API), 200, r#"[{"slug": "baga"}]"#);

        let entries = build_sitemap(&client(&mock), SITE, today()).await;
        assert_eq!(entries.len(), 8);
        assert_eq!(entries[6].url, "https://vinho.app/vinhos/catena");
        assert_eq!(entries[6].priority, 0.7);
        assert_eq!(entries[7].url, "https://vinho.app/uvas/baga");
        assert_eq!(entries[7].change_frequency, ChangeFrequency::Monthly);
        assert!(mock.requests()[0].ends_with("/wines/?limit=1000"));
    }

    #[tokio::test]
    async fn test_any_failure_falls_back_to_static_routes() {
        let mock = MockTransport::new();
        mock.respond(&format!("{}/wines/?", API), 200, r#"[{"slug": "catena"}]"#);
        mock.respond(&format!("{}/wineries/?", API), 503, "down");
        let entries = build_sitemap(&client(&mock), SITE, today()).await;
        assert_eq!(entries, static_entries(SITE, today()));
    }

    #[tokio::test]
    async fn test_entity_slugs_are_percent_encoded_and_blank_rows_skipped() {
        let mock = MockTransport::new();
        for resource in CatalogResource::ALL {
            mock.respond(&format!("{}/{}/?", API, resource.api_path()), 200, "[]");
        }
        mock.respond(
            &format!("{}/wines/?", API),
            200,
            r#"[{"slug": "rosé & cia"}, {"slug": null}, {"name": "sem slug"}]"#,
        );
        let entries = build_sitemap(&client(&mock), SITE, today()).await;
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[6].url, "https://vinho.app/vinhos/ros%C3%A9%20%26%20cia");
    }

    #[test]
    fn test_xml_rendering_escapes_urls() {
        let entries = vec![entry(
            "https://vinho.app/vinhos/a&b".into(),
            today(),
            ChangeFrequency::Weekly,
            0.7,
        )];
        let xml = render_sitemap_xml(&entries);
        assert!(xml.contains("<loc>https://vinho.app/vinhos/a&amp;b</loc>"));
        assert!(xml.contains("<lastmod>2026-10-16</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>0.7</priority>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }
}
