//! `<head>` metadata for catalog pages

use crate::domain::a003_winery::aggregate::Winery;
use crate::domain::a004_wine::aggregate::Wine;
use crate::domain::common::CatalogResource;
use crate::shared::text::truncate_chars;

pub const SITE_NAME: &str = "VinhoApp";
pub const DESCRIPTION_MAX_CHARS: usize = 160;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical: String,
}

impl PageMetadata {
    /// Title as shown in the browser tab
    pub fn document_title(&self) -> String {
        format!("{} | {}", self.title, SITE_NAME)
    }

    pub fn keywords_line(&self) -> String {
        self.keywords.join(", ")
    }

    /// `<meta name="...">` pairs for the document head; blank values are left out
    pub fn meta_tags(&self) -> Vec<(&'static str, String)> {
        [
            ("description", self.description.clone()),
            ("keywords", self.keywords_line()),
        ]
        .into_iter()
        .filter(|(_, content)| !content.trim().is_empty())
        .collect()
    }

    /// Canonical link resolved against the site origin
    pub fn canonical_url(&self, origin: &str) -> String {
        format!("{}{}", origin.trim_end_matches('/'), self.canonical)
    }
}

fn description_or(text: Option<&str>, generated: impl FnOnce() -> String) -> String {
    match text.map(str::trim).filter(|t| !t.is_empty()) {
        Some(t) => truncate_chars(t, DESCRIPTION_MAX_CHARS),
        None => generated(),
    }
}

pub fn winery_metadata(winery: Option<&Winery>) -> PageMetadata {
    let Some(winery) = winery else {
        return PageMetadata {
            title: "Vinícola não encontrada".into(),
            description: "A vinícola solicitada não foi encontrada.".into(),
            keywords: Vec::new(),
            canonical: CatalogResource::Wineries.list_route(),
        };
    };

    let region = winery.region_name();
    let title = match region {
        Some(r) => format!("{} - Vinícola em {}", winery.name, r),
        None => format!("{} - Vinícola", winery.name),
    };
    let description = description_or(winery.description.as_deref(), || {
        let mut sentence = format!("Conheça a vinícola {}", winery.name);
        if let Some(r) = region {
            sentence.push_str(&format!(", localizada em {}", r));
            if let Some(c) = winery.country_name() {
                sentence.push_str(&format!(", {}", c));
            }
        }
        sentence.push_str(". Descubra seus vinhos, avaliações e preços.");
        sentence
    });

    let mut keywords = vec![winery.name.clone(), "vinícola".to_string(), "vinhos".to_string()];
    keywords.extend(region.map(str::to_string));
    keywords.extend(winery.country_name().map(str::to_string));

    PageMetadata {
        title,
        description,
        keywords,
        canonical: winery.route(),
    }
}

pub fn wine_metadata(wine: Option<&Wine>) -> PageMetadata {
    let Some(wine) = wine else {
        return PageMetadata {
            title: "Vinho não encontrado".into(),
            description: "O vinho solicitado não foi encontrado.".into(),
            keywords: Vec::new(),
            canonical: CatalogResource::Wines.list_route(),
        };
    };

    let winery = wine.winery.as_ref().map(|w| w.name.as_str());
    let title = match winery {
        Some(w) => format!("{} - {}", wine.name, w),
        None => wine.name.clone(),
    };
    let description = description_or(wine.description.as_deref(), || {
        let kind = wine.wine_type.as_deref().unwrap_or("Vinho");
        match winery {
            Some(w) => format!("{} {} da vinícola {}.", kind, wine.name, w),
            None => format!("{} {}.", kind, wine.name),
        }
    });

    let mut keywords = vec![wine.name.clone(), "vinho".to_string()];
    keywords.extend(wine.wine_type.clone());
    keywords.extend(winery.map(str::to_string));
    keywords.extend(wine.grapes.iter().map(|g| g.name.clone()));

    PageMetadata {
        title,
        description,
        keywords,
        canonical: wine.route(),
    }
}

pub fn list_metadata(resource: CatalogResource) -> PageMetadata {
    PageMetadata {
        title: resource.title().to_string(),
        description: format!("Explore {} do catálogo {}.", resource.title().to_lowercase(), SITE_NAME),
        keywords: vec![resource.title().to_lowercase(), "vinhos".to_string()],
        canonical: resource.list_route(),
    }
}

/// Title for pages with no dedicated metadata (home, grape, region, country)
pub fn simple_title(title: &str) -> String {
    if title.is_empty() {
        SITE_NAME.to_string()
    } else {
        format!("{} | {}", title, SITE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::RegionRef;

    #[test]
    fn test_winery_title_and_canonical() {
        let winery = Winery {
            slug: "catena-zapata".into(),
            name: "Catena Zapata".into(),
            region: Some(RegionRef {
                slug: "mendoza".into(),
                name: "Mendoza".into(),
                country: None,
            }),
            ..Default::default()
        };
        let meta = winery_metadata(Some(&winery));
        assert_eq!(meta.title, "Catena Zapata - Vinícola em Mendoza");
        assert_eq!(meta.canonical, "/vinicolas/catena-zapata");
        assert!(meta.description.starts_with("Conheça a vinícola Catena Zapata, localizada em Mendoza"));
        assert!(meta.keywords.contains(&"Mendoza".to_string()));
        assert_eq!(meta.document_title(), "Catena Zapata - Vinícola em Mendoza | VinhoApp");
    }

    #[test]
    fn test_long_description_is_truncated() {
        let winery = Winery {
            slug: "x".into(),
            name: "X".into(),
            description: Some("á".repeat(300)),
            ..Default::default()
        };
        let meta = winery_metadata(Some(&winery));
        assert_eq!(meta.title, "X - Vinícola");
        assert_eq!(meta.description.chars().count(), DESCRIPTION_MAX_CHARS + 3);
        assert!(meta.description.ends_with("..."));
    }

    #[test]
    fn test_missing_winery() {
        assert_eq!(winery_metadata(None).title, "Vinícola não encontrada");
        assert_eq!(wine_metadata(None).canonical, "/vinhos");
    }

    #[test]
    fn test_list_and_simple_titles() {
        assert_eq!(list_metadata(CatalogResource::Grapes).canonical, "/uvas");
        assert_eq!(simple_title(""), "VinhoApp");
        assert_eq!(simple_title("Uvas"), "Uvas | VinhoApp");
    }

    #[test]
    fn test_head_tags_skip_blank_values() {
        let meta = winery_metadata(None);
        let tags = meta.meta_tags();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].0, "description");
        assert_eq!(
            meta.canonical_url("https://vinho.app/"),
            "https://vinho.app/vinicolas"
        );

        let names: Vec<&str> = list_metadata(CatalogResource::Wines)
            .meta_tags()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["description", "keywords"]);
    }
}
