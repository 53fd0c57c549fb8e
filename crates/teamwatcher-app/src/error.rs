use salvo::http::StatusCode;
use teamwatcher_core::error::CoreError;
use teamwatcher_service::error::ServiceError;
use thiserror::Error;

/// Failures a request handler can run into.
#[derive(Error, Debug)]
pub enum AppError {
    /// Rendering the feed failed.
    #[error(transparent)]
    Feed(#[from] ServiceError),

    /// Depot wiring or request validation failed outside the feed service.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AppError {
    /// ## Summary
    /// Maps the error to the status the client sees.
    ///
    /// Rejected input is the client's fault; everything else is ours.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Feed(ServiceError::CoreError(CoreError::InvalidInput(_)))
            | Self::Core(CoreError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            Self::Feed(_) | Self::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_is_a_client_error() {
        let direct = AppError::from(CoreError::InvalidInput("zip".into()));
        let wrapped =
            AppError::from(ServiceError::CoreError(CoreError::InvalidInput("zip".into())));
        assert_eq!(direct.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(wrapped.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn other_failures_are_server_errors() {
        let missing =
            AppError::from(CoreError::InvariantViolation("Feed service not found in depot"));
        let schedule = AppError::from(ServiceError::UnknownLocalTime("2025-03-09 02:30".into()));
        assert_eq!(missing.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(schedule.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
