//! Errors raised while loading response configuration.

/// What went wrong while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// The configuration file could not be read
    #[display("Failed to read config file '{}': {}", path, reason)]
    Read {
        /// Path that was read
        path: String,
        /// Underlying I/O failure
        reason: String,
    },
    /// The configuration text is not valid TOML for the expected shape
    #[display("Failed to parse config: {}", _0)]
    Parse(String),
}

/// Configuration error with location tracking.
///
/// # Examples
///
/// ```
/// use fail_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::Parse("unknown field `colour`".to_string()));
/// assert!(err.to_string().starts_with("Configuration Error: Failed to parse"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The kind of error that occurred
    pub kind: ConfigErrorKind,
    /// Line number where the error was created
    pub line: u32,
    /// File where the error was created
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }
}
