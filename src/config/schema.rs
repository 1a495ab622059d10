//! Configuration schema definitions.
//!
//! This module defines the settings file structure for the client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root settings for an HTTP API client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientSettings {
    /// Base host URI (e.g., "https://api.example.com").
    /// When set, it wins over any host declared on an action.
    pub http_host: Option<String>,

    /// Transport construction settings.
    pub transport: TransportSettings,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Settings used by the default handler to build the transport.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct TransportSettings {
    /// Total request timeout in seconds.
    pub timeout_secs: u64,

    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,

    /// `User-Agent` sent with every request.
    pub user_agent: String,

    /// How long idle pooled connections are kept, in seconds.
    pub pool_idle_timeout_secs: u64,

    /// Maximum idle connections kept per host.
    pub pool_max_idle_per_host: usize,

    /// Redirects followed before giving up (0 disables redirects).
    pub max_redirects: usize,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 5,
            user_agent: concat!("webapi-client/", env!("CARGO_PKG_VERSION")).to_string(),
            pool_idle_timeout_secs: 90,
            pool_max_idle_per_host: 32,
            max_redirects: 10,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Record request metrics through the `metrics` facade.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
        }
    }
}
