use thiserror::Error;
use tracing::error;

/// Error types for the charts module
#[derive(Error, Debug)]
pub enum ChartError {
    /// Error while turning a figure into JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error while reading a theme definition
    #[error("Theme error: {0}")]
    Theme(String),
}

impl From<serde_yaml::Error> for ChartError {
    fn from(error: serde_yaml::Error) -> Self {
        let err = match error.location() {
            Some(location) => ChartError::Theme(format!(
                "{} (line {}, column {})",
                error,
                location.line(),
                location.column()
            )),
            None => ChartError::Theme(error.to_string()),
        };
        error!(?err, "Failed to parse chart theme");
        err
    }
}

/// Type alias for Result with ChartError
pub type Result<T> = std::result::Result<T, ChartError>;
