pub mod breadcrumbs;
pub mod country_flag;
pub mod empty_state;
pub mod filter_panel;
pub mod json_ld;
pub mod not_found;
pub mod page_header;
pub mod spinner;
pub mod ui;
pub mod wine_image;
