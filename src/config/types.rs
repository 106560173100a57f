//! Runtime settings for the API server.

use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_LOG_FILTER: &str = "case_bridge=info";
/// 1 MiB.
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// `tracing_subscriber::EnvFilter` directive string.
    pub log_filter: String,
    /// Max request body size, enforced by `DefaultBodyLimit` on the JSON extractors.
    pub body_limit_bytes: usize,
    /// Load the sample travel packages at startup.
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            seed_demo_data: true,
        }
    }
}
