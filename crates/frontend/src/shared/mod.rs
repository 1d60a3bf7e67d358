pub mod api_utils;
pub mod catalog_transport;
pub mod components;
pub mod document;
pub mod icons;
pub mod page_frame;
pub mod page_standard;
pub mod route_params;
pub mod view_loader;
