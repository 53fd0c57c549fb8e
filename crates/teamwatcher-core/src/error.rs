use thiserror::Error;

/// Errors shared by every layer of the feed server.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A caller-supplied value was rejected, e.g. a malformed ZIP code.
    /// Surfaces as `400 Bad Request`.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Wiring the server relies on is missing, such as a depot entry.
    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
