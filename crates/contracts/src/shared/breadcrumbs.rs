//! Breadcrumb trails for detail and list pages

use crate::domain::a004_wine::aggregate::{Breadcrumb, Wine};
use crate::domain::common::CatalogResource;

pub const HOME_LABEL: &str = "Início";

/// One rendered step; `href == None` renders plain text (the current page, or
/// an API crumb that came without a slug)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailItem {
    pub label: String,
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Trail {
    items: Vec<TrailItem>,
}

impl Trail {
    /// Trail starting at the home page
    pub fn home() -> Self {
        Self::default().link(HOME_LABEL, "/")
    }

    pub fn link(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.items.push(TrailItem {
            label: label.into(),
            href: Some(href.into()),
        });
        self
    }

    pub fn current(mut self, label: impl Into<String>) -> Self {
        self.items.push(TrailItem {
            label: label.into(),
            href: None,
        });
        self
    }

    pub fn items(&self) -> &[TrailItem] {
        &self.items
    }

    /// `Início › {Section}`
    pub fn for_list(resource: CatalogResource) -> Self {
        Self::home().current(resource.title())
    }

    /// `Início › {Section} › {name}`
    pub fn for_detail(resource: CatalogResource, name: &str) -> Self {
        Self::home()
            .link(resource.title(), resource.list_route())
            .current(name)
    }
}

/// Route section for an API breadcrumb type; unknown types go to wines
pub fn crumb_resource(kind: &str) -> CatalogResource {
    match kind {
        "country" => CatalogResource::Countries,
        "region" => CatalogResource::Regions,
        "winery" => CatalogResource::Wineries,
        _ => CatalogResource::Wines,
    }
}

pub fn crumb_href(crumb: &Breadcrumb) -> String {
    crumb_resource(&crumb.kind).detail_route(&crumb.slug)
}

/// Trail for a wine page: the API breadcrumbs when present (last one is the
/// current page, slugless ones are not linked), otherwise `Início › Vinhos › {wine}`
pub fn wine_trail(wine: &Wine) -> Trail {
    if wine.breadcrumbs.is_empty() {
        return Trail::for_detail(CatalogResource::Wines, &wine.name);
    }
    let last = wine.breadcrumbs.len() - 1;
    wine.breadcrumbs
        .iter()
        .enumerate()
        .fold(Trail::home(), |trail, (index, crumb)| {
            if index == last || crumb.slug.is_empty() {
                trail.current(crumb.name.clone())
            } else {
                trail.link(crumb.name.clone(), crumb_href(crumb))
            }
        })
}
