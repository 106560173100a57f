//! Request extractors.

pub mod snake_json;

pub use snake_json::SnakeJson;
