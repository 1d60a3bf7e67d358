//! Data access layer for the remote catalog API.
//!
//! - `transport.rs`: the HTTP seam (`gloo-net` in the browser, `reqwest` on the server)
//! - `client.rs`: one method per resource plus derived queries
//! - `params.rs`: list query parameters
//! - `envelope.rs`: list response normalization

pub mod client;
pub mod envelope;
pub mod error;
pub mod params;
pub mod transport;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{CatalogClient, CatalogConfig};
pub use envelope::ListEnvelope;
pub use error::ApiError;
pub use params::ListParams;
pub use transport::{CatalogTransport, TransportResponse};
