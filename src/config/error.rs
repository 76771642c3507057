//! Configuration loading errors.

/// Errors from loading or parsing the YAML configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    /// File could not be read.
    #[error("failed to read config file: {0}")]
    Io(String),

    /// YAML could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(String),
}
