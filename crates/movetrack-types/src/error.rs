use std::fmt;

/// Result type for movetrack-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// JSON (de)serialization failed
    Json(serde_json::Error),

    /// Timestamp was not valid ISO-8601 / RFC 3339
    InvalidTimestamp { value: String, reason: String },

    /// Supplier key is not one of supplier1..supplier4
    UnknownSupplier(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::InvalidTimestamp { value, reason } => {
                write!(f, "Invalid timestamp '{}': {}", value, reason)
            }
            Error::UnknownSupplier(key) => write!(
                f,
                "Unknown supplier '{}' (expected supplier1, supplier2, supplier3 or supplier4)",
                key
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(err) => Some(err),
            Error::InvalidTimestamp { .. } | Error::UnknownSupplier(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
