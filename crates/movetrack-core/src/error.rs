use movetrack_types::MovementId;
use std::fmt;

use crate::validation::RequiredField;

/// Result type for movetrack-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error raised by a snapshot listener (display collaborator)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerError(String);

impl ListenerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListenerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ListenerError {}

/// Error types that can occur in the store layer.
///
/// None of these leave the store half-updated: the previous snapshot stays current.
#[derive(Debug)]
pub enum Error {
    /// Required fields missing while the require-fields policy is active.
    /// `row` is the 1-based position inside a batch (None for single adds).
    Validation {
        row: Option<usize>,
        missing: Vec<RequiredField>,
    },

    /// The id source produced an id that is already taken
    DuplicateId(MovementId),

    /// A listener refused the new snapshot
    Listener(ListenerError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation { row, missing } => {
                let names = missing
                    .iter()
                    .map(|field| field.name())
                    .collect::<Vec<_>>()
                    .join(", ");
                match row {
                    Some(row) => write!(f, "Row {}: missing required fields: {}", row, names),
                    None => write!(f, "Missing required fields: {}", names),
                }
            }
            Error::DuplicateId(id) => write!(f, "Duplicate movement id: {}", id),
            Error::Listener(err) => write!(f, "Display update failed: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Listener(err) => Some(err),
            Error::Validation { .. } | Error::DuplicateId(_) => None,
        }
    }
}

impl From<ListenerError> for Error {
    fn from(err: ListenerError) -> Self {
        Error::Listener(err)
    }
}
