//! File-backed attraction catalog for the Itinera engine.
//!
//! [`JsonCatalog`] implements [`CatalogProvider`](itinera_core::CatalogProvider)
//! over a JSON document on disk. The document is either a bare array of
//! attractions or an object holding an `attractions` array alongside other
//! collections, which are ignored.
//!
//! [`seed_attractions`] and [`write_seed_catalog`] provide the default
//! catalog used when no data has been prepared yet.
#![forbid(unsafe_code)]

mod error;
mod fs;
mod json;
mod seed;

pub use error::JsonCatalogError;
pub use json::JsonCatalog;
pub use seed::{seed_attractions, write_seed_catalog};
