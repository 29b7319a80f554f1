//! Error types for the flight log library.

use std::error::Error as StdError;
use std::path::PathBuf;

use thiserror::Error;

/// Boxed source carried by [`FlightLogError::StoreUnavailable`].
pub type StoreFault = Box<dyn StdError + Send + Sync + 'static>;

/// Every failure a flight log command can end in.
#[derive(Error, Debug)]
pub enum FlightLogError {
    /// A required field was missing, empty, or malformed
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// The owner has no flight records
    #[error("No flight records found for {owner}")]
    NoRecords { owner: String },
    /// A display index outside `[1, count]`
    #[error("Index {index} is out of range (1..={count})")]
    IndexOutOfRange { index: i64, count: usize },
    /// The record store could not complete the call
    #[error("Store unavailable: {message}")]
    StoreUnavailable {
        message: String,
        #[source]
        source: StoreFault,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for store errors with a contextual message.
pub struct StoreErrorBuilder {
    message: String,
}

impl StoreErrorBuilder {
    /// Create a new store error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source<E>(self, source: E) -> FlightLogError
    where
        E: StdError + Send + Sync + 'static,
    {
        FlightLogError::StoreUnavailable {
            message: self.message,
            source: Box::new(source),
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> FlightLogError {
        FlightLogError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl FlightLogError {
    /// Creates a builder for store errors.
    pub fn store(message: impl Into<String>) -> StoreErrorBuilder {
        StoreErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether the failure is an operational fault (storage or setup) rather
    /// than a rejected request. Operational faults are logged at `warn`.
    pub fn is_operational(&self) -> bool {
        matches!(
            self,
            FlightLogError::StoreUnavailable { .. }
                | FlightLogError::FileSystem { .. }
                | FlightLogError::XdgDirectory(_)
                | FlightLogError::Configuration { .. }
        )
    }

    /// The text shown to the person who issued the command.
    ///
    /// Store faults never leak their internals here; the full chain is left
    /// to the log.
    pub fn user_message(&self) -> String {
        match self {
            FlightLogError::InvalidInput { field, reason } => {
                format!("Invalid {field}: {reason}")
            }
            FlightLogError::NoRecords { owner } => {
                format!("No flight records found for {owner}.")
            }
            FlightLogError::IndexOutOfRange { index, count } => format!(
                "Invalid index {index}. Choose a number between 1 and {count}; use view to check the correct number."
            ),
            FlightLogError::StoreUnavailable { .. } => {
                "Flight log storage is unavailable. Please try again later.".to_string()
            }
            FlightLogError::FileSystem { .. }
            | FlightLogError::XdgDirectory(_)
            | FlightLogError::Configuration { .. } => {
                "Flight log is not configured correctly. Please contact an administrator."
                    .to_string()
            }
        }
    }
}

/// Extension trait mapping any persistence error into
/// [`FlightLogError::StoreUnavailable`].
pub trait StoreResultExt<T> {
    /// Map the error with a message describing the failed step.
    fn store_context(self, message: &str) -> Result<T>;
}

impl<T, E> StoreResultExt<T> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn store_context(self, message: &str) -> Result<T> {
        self.map_err(|e| FlightLogError::store(message).with_source(e))
    }
}

/// Result type alias for flight log operations
pub type Result<T> = std::result::Result<T, FlightLogError>;
