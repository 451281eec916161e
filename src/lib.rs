
pub mod catalog;
pub mod configs;
pub mod core;
pub mod loggers;
pub mod retrieve;

pub use crate::core::error::CatalogError;
