//! Shared catalog contracts used by both the WASM frontend and the server.
//!
//! Everything in this crate is target-independent: entity types decoded from
//! the remote catalog API, the data access client behind a transport trait,
//! page loaders, lookup helpers and SEO builders.

pub mod api;
pub mod domain;
pub mod pages;
pub mod seo;
pub mod shared;
