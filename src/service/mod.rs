//! CatalogService: travel-package operations over the in-memory store.

pub mod catalog;
mod validation;
pub use catalog::{CatalogService, NewPackage, PackagePatch};
pub use validation::PackageValidator;
