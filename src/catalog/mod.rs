// src/catalog/mod.rs

pub mod apicall;
pub mod endpoints;
pub mod getitems;
pub mod signing;
pub mod types;

pub use getitems::CatalogLookup;
pub use types::{ItemRecord, LookupResult};
