//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! settings file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ClientSettings
//!     → api_config.rs (HttpApiConfig::from_settings)
//!     → shared via Arc by every call of the API surface
//! ```
//!
//! # Design Decisions
//! - All settings fields have defaults to allow minimal files
//! - Validation separates syntactic (serde) from semantic checks
//! - `HttpApiConfig` owns the long-lived resources; settings are plain data

pub mod api_config;
pub mod loader;
pub mod schema;
pub mod validation;

pub use api_config::HttpApiConfig;
pub use loader::{load_settings, parse_settings, ConfigError};
pub use schema::{ClientSettings, ObservabilityConfig, TransportSettings};
