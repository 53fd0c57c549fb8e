use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Schedule error: {0}")]
    ScheduleError(String),

    #[error("Local time does not exist in zone: {0}")]
    UnknownLocalTime(String),

    #[error(transparent)]
    RfcError(#[from] teamwatcher_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] teamwatcher_core::error::CoreError),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
