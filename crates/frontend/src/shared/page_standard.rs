//! Page category constants.
//!
//! Every page root carries an `id` of the form `{entity}--{category}`
//! (e.g. `"a004_wine--list"`) and a `data-page-category` attribute, so the
//! id copied from the DOM inspector leads straight to `domain/a004_wine/`.

/// List of records with search and sorting.
pub const PAGE_CAT_LIST: &str = "list";

/// Single record page.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Landing and other free-form pages.
pub const PAGE_CAT_CUSTOM: &str = "custom";
