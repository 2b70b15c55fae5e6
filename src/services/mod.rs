//! Catalog assembly and query services.

pub mod catalog;
pub mod lookup;

pub use catalog::{assemble_catalog, CatalogError};
pub use lookup::find_open;
