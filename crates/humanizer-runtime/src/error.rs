use std::fmt;

/// Result type for humanizer-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Settings rejected before dispatch
    Validation(humanizer_types::Error),

    /// The transformation service failed (timeout, network, service error)
    Transformation(String),

    /// History sink failed to record a result
    History(String),

    /// IO operation failed
    Io(std::io::Error),

    /// JSON encoding or decoding failed
    Json(serde_json::Error),

    /// Configuration error
    Config(String),

    /// Command not valid in the current phase
    InvalidOperation(String),
}

impl Error {
    /// Failures the user can retry without re-entering input
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Transformation(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(err) => write!(f, "{}", err),
            Error::Transformation(msg) => write!(f, "Transformation failed: {}", msg),
            Error::History(msg) => write!(f, "History error: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Validation(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Transformation(_)
            | Error::History(_)
            | Error::Config(_)
            | Error::InvalidOperation(_) => None,
        }
    }
}

impl From<humanizer_types::Error> for Error {
    fn from(err: humanizer_types::Error) -> Self {
        Error::Validation(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
