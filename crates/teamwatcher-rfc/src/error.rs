use thiserror::Error;

/// Errors raised while constructing calendar values.
///
/// Serialization itself cannot fail; only [`crate::rfc::ical::EventRecord::new`]
/// validates its input.
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Invalid time range: {0}")]
    InvalidTime(String),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
