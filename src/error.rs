use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Coarse classification of every failure the API can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    Conflict,
    InvalidInput,
    Unavailable,
    Internal,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("the customer does not exist and must be registered with a name and email")]
    InvalidCustomerReference,

    #[error("the customer does not exist and must be registered before buying a ticket")]
    UnregisteredCustomer,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("no seats available for this showtime")]
    SoldOut,

    #[error("ticket has already been cancelled")]
    AlreadyCancelled,

    #[error("email already registered")]
    DuplicateEmail,

    #[error("invalid request: {0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::AlreadyCancelled | AppError::DuplicateEmail => ErrorKind::Conflict,
            AppError::InvalidCustomerReference
            | AppError::UnregisteredCustomer
            | AppError::Validation(_) => ErrorKind::InvalidInput,
            AppError::SoldOut => ErrorKind::Unavailable,
            AppError::Database(_) => ErrorKind::Internal,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict | ErrorKind::InvalidInput | ErrorKind::Unavailable => {
                StatusCode::BAD_REQUEST
            }
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorKind,
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("request failed: {:?}", self);
        }
        let body = ErrorBody {
            error: self.kind(),
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_failures_map_to_taxonomy() {
        assert_eq!(AppError::NotFound("showtime").kind(), ErrorKind::NotFound);
        assert_eq!(AppError::AlreadyCancelled.kind(), ErrorKind::Conflict);
        assert_eq!(AppError::DuplicateEmail.kind(), ErrorKind::Conflict);
        assert_eq!(AppError::InvalidCustomerReference.kind(), ErrorKind::InvalidInput);
        assert_eq!(AppError::UnregisteredCustomer.kind(), ErrorKind::InvalidInput);
        assert_eq!(AppError::SoldOut.kind(), ErrorKind::Unavailable);
        assert_eq!(AppError::Database(sqlx::Error::PoolClosed).kind(), ErrorKind::Internal);
    }

    #[test]
    fn status_codes() {
        assert_eq!(AppError::NotFound("movie").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::DuplicateEmail.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::SoldOut.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_message_names_the_resource() {
        assert_eq!(AppError::NotFound("ticket").to_string(), "ticket not found");
    }
}
