pub mod catalog_http;
pub mod config;
pub mod format;
