//! case-bridge: snake_case rows in, camelCase JSON out, and back again for request bodies.
//!
//! The core is [`convert_to_camel`] / [`convert_to_snake`], pure recursive key renaming over any
//! [`ConvertKeys`] value. The rest wires it into an axum API for a travel-package catalog.

pub mod case;
pub mod config;
pub mod convert;
pub mod datum;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use case::{to_camel_case, to_snake_case, KeyCase};
pub use config::AppConfig;
pub use convert::{convert_to_camel, convert_to_snake, from_camel_json, snake_fields, to_camel_json, ConvertKeys};
pub use datum::Datum;
pub use error::{AppError, CaseError, ConfigError};
pub use extractors::SnakeJson;
pub use response::{error_body, success_many, success_one};
pub use routes::{app_router, common_routes, package_routes};
pub use service::CatalogService;
pub use state::AppState;
pub use store::{ListFilter, PackageStore};
