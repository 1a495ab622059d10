//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for binaries
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` wins over the configured level
//! - Libraries never install a subscriber themselves; only binaries call this

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a fmt subscriber filtered by `RUST_LOG` or, failing that, `level`.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("webapi_client={level},webapi_cli={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        init_logging("debug");
        assert!(!init_logging("debug"));
    }
}
