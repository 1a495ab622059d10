//! Settings loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ClientSettings;
use crate::config::validation::{validate_settings, ValidationError};

/// Error type for settings loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate settings from a TOML file.
pub fn load_settings(path: &Path) -> Result<ClientSettings, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_settings(&content)
}

/// Parse and validate settings from TOML text.
pub fn parse_settings(content: &str) -> Result<ClientSettings, ConfigError> {
    let settings: ClientSettings = toml::from_str(content)?;
    validate_settings(&settings).map_err(ConfigError::Validation)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_partial_settings() {
        let settings = parse_settings(
            r#"
            http_host = "https://api.example.com"

            [transport]
            timeout_secs = 10
            "#,
        )
        .unwrap();

        assert_eq!(settings.http_host.as_deref(), Some("https://api.example.com"));
        assert_eq!(settings.transport.timeout_secs, 10);
        assert_eq!(settings.transport.connect_timeout_secs, 5);
        assert_eq!(settings.observability.log_level, "info");
    }

    #[test]
    fn test_parse_error() {
        let err = parse_settings("http_host = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error_display() {
        let err = parse_settings("[transport]\ntimeout_secs = 0\nconnect_timeout_secs = 0")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: transport.timeout_secs must be greater than zero, \
             transport.connect_timeout_secs must be greater than zero"
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "http_host = \"http://localhost:8080\"").unwrap();

        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.http_host.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn test_parse_error_display() {
        let err = parse_settings("http_host = ").unwrap_err();
        assert!(err.to_string().starts_with("Malformed settings: "));
    }

    #[test]
    fn test_missing_file() {
        let err = load_settings(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
