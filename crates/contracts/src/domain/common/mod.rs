//! Common types shared by all catalog aggregates

pub mod lenient;
pub mod resource;
pub mod summary;

// Re-exports
pub use resource::CatalogResource;
pub use summary::{CountryRef, GrapeRef, RegionRef, SlugOnly, WineryRef};
