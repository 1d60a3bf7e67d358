//! Search engine output: sitemap, JSON-LD structured data, page metadata

pub mod json_ld;
pub mod metadata;
pub mod sitemap;
