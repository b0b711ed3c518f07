//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AdapterConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
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

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AdapterConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AdapterConfig, ConfigError> {
    let config: AdapterConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
id = "servicenow-dev"

[properties]
url = "https://dev12345.service-now.com"
service_now_table = "change_request"

[properties.auth]
username = "admin"
password = "secret"

[timeouts]
request_secs = 10
"#;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(SAMPLE).unwrap();
        assert_eq!(config.id, "servicenow-dev");
        assert_eq!(config.properties.url, "https://dev12345.service-now.com");
        assert_eq!(config.properties.auth.username, "admin");
        assert_eq!(config.timeouts.request_secs, 10);
        assert_eq!(config.timeouts.connect_secs, 5);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_camel_case_table_alias() {
        let config = parse_config(
            r#"
[properties]
url = "http://localhost:8080"
serviceNowTable = "incident"
auth = { username = "admin", password = "" }
"#,
        )
        .unwrap();
        assert_eq!(config.properties.service_now_table, "incident");
    }

    #[test]
    fn test_invalid_toml() {
        let err = parse_config("id = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_errors_are_joined() {
        let err = parse_config("id = \"x\"").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Validation failed: "));
        assert!(message.contains("properties.url must not be empty"));
        assert!(message.contains("properties.auth.username must not be empty"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
