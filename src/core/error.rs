use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::constants::{
    MSG_BAD_REQUEST, MSG_INTERNAL, MSG_METHOD_NOT_ALLOWED, MSG_NOT_FOUND, MSG_UNPROCESSABLE,
};
use crate::shared::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Fixed, user-facing message for the error kind
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::Database(_) | AppError::Internal(_) => MSG_INTERNAL,
            AppError::BadRequest(_) => MSG_BAD_REQUEST,
            AppError::NotFound(_) => MSG_NOT_FOUND,
            AppError::MethodNotAllowed => MSG_METHOD_NOT_ALLOWED,
            AppError::Unprocessable(_) => MSG_UNPROCESSABLE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(e) => tracing::error!("Database error: {:?}", e),
            AppError::Internal(msg) => tracing::error!("Internal error: {}", msg),
            other => tracing::debug!("Request failed: {}", other),
        }

        let status = self.status_code();
        let body = Json(ErrorResponse::new(status.as_u16(), self.public_message()));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::MethodNotAllowed, StatusCode::METHOD_NOT_ALLOWED),
            (
                AppError::Unprocessable("x".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::Internal("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::Database(sqlx::Error::RowNotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.status_code(), status, "{}", error);
        }
    }

    #[test]
    fn test_internal_detail_is_not_exposed() {
        let error = AppError::Internal("connection string postgres://secret".into());
        assert_eq!(error.public_message(), "Internal Server Error");
    }
}
