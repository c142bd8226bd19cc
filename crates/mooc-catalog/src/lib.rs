pub mod catalog;
pub mod error;
mod tables;

pub use catalog::{Catalog, CatalogOverrides};
pub use error::CatalogError;
