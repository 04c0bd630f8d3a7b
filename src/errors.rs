use axum::http::StatusCode;
use std::fmt;

/// Rejected input at the store boundary. Invalid samples are never stored.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    InvalidDate(String),
    InvalidWeight(f64),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::InvalidDate(input) => {
                write!(f, "'{input}' is not a valid date (expected YYYY-MM-DD)")
            }
            StoreError::InvalidWeight(value) => {
                write!(f, "weight must be a finite positive number, got {value}")
            }
        }
    }
}

impl std::error::Error for StoreError {}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// A failed write to the data directory. In-memory state is still correct,
    /// but the last change may not survive a restart.
    pub fn persistence(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("failed to persist data: {err}"),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
