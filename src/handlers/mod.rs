//! HTTP handlers for the travel-package catalog.

pub mod package;
pub use package::*;
