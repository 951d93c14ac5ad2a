//! Response configuration.

use fail_error::{ConfigError, ConfigErrorKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Body format for error responses.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum BodyFormat {
    /// `text/plain` body holding the client message
    #[default]
    #[display("plain_text")]
    PlainText,
    /// `application/json` body with status, message and details
    #[display("json")]
    Json,
}

/// How errors are written to responses.
///
/// # Examples
///
/// ```
/// use fail_response::{BodyFormat, ResponseConfig};
///
/// let config = ResponseConfig::from_toml_str(r#"format = "json""#).unwrap();
/// assert_eq!(*config.format(), BodyFormat::Json);
/// assert!(!*config.log_client_errors());
///
/// let defaults = ResponseConfig::default();
/// assert_eq!(*defaults.format(), BodyFormat::PlainText);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(deny_unknown_fields)]
pub struct ResponseConfig {
    /// Body format (default plain text).
    #[serde(default)]
    format: BodyFormat,

    /// Whether 4xx responses are logged (default false).
    #[serde(default)]
    log_client_errors: bool,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            format: BodyFormat::PlainText,
            log_client_errors: false,
        }
    }
}

impl ResponseConfig {
    /// Creates a new response config builder.
    pub fn builder() -> ResponseConfigBuilder {
        ResponseConfigBuilder::default()
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or has unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) => Err(ConfigError::new(ConfigErrorKind::Read {
                path: path.display().to_string(),
                reason: e.to_string(),
            })),
        }
    }
}

/// Builder for `ResponseConfig`.
#[derive(Debug, Default)]
pub struct ResponseConfigBuilder {
    format: Option<BodyFormat>,
    log_client_errors: Option<bool>,
}

impl ResponseConfigBuilder {
    /// Sets the body format.
    pub fn format(mut self, value: BodyFormat) -> Self {
        self.format = Some(value);
        self
    }

    /// Sets whether client errors are logged.
    pub fn log_client_errors(mut self, value: bool) -> Self {
        self.log_client_errors = Some(value);
        self
    }

    /// Builds the config, falling back to defaults for unset fields.
    pub fn build(self) -> ResponseConfig {
        let defaults = ResponseConfig::default();
        ResponseConfig {
            format: self.format.unwrap_or(defaults.format),
            log_client_errors: self.log_client_errors.unwrap_or(defaults.log_client_errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = ResponseConfig::from_toml_str("").expect("valid config");
        assert_eq!(config, ResponseConfig::default());
    }

    #[test]
    fn parses_all_fields() {
        let config = ResponseConfig::from_toml_str(
            r#"
            format = "json"
            log_client_errors = true
            "#,
        )
        .expect("valid config");
        assert_eq!(*config.format(), BodyFormat::Json);
        assert!(*config.log_client_errors());
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = ResponseConfig::from_toml_str("colour = \"red\"").unwrap_err();
        assert!(matches!(err.kind(), ConfigErrorKind::Parse(_)));
    }

    #[test]
    fn rejects_unknown_format() {
        let err = ResponseConfig::from_toml_str(r#"format = "xml""#).unwrap_err();
        assert!(matches!(err.kind(), ConfigErrorKind::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = ResponseConfig::from_file("/nonexistent/fail_response.toml").unwrap_err();
        match err.kind() {
            ConfigErrorKind::Read { path, .. } => {
                assert_eq!(path, "/nonexistent/fail_response.toml")
            }
            other => panic!("expected read error, got {other}"),
        }
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = ResponseConfig::builder().log_client_errors(true).build();
        assert_eq!(*config.format(), BodyFormat::PlainText);
        assert!(*config.log_client_errors());
    }
}
