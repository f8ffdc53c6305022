//! JSON error responses.
//!
//! Every failing handler returns `ApiError`, rendered as
//! `{ "error": CODE, "message": ... }` with the status taken from the
//! `AppError` the domain error maps to.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use finapi_core::statement::StatementError;
use finapi_core::users::UserError;
use finapi_shared::{AppError, JwtError};
use serde_json::json;
use tracing::error;

/// An error ready to be sent to the client.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    fn from_app(app: &AppError, code: &'static str, message: String) -> Self {
        Self {
            status: StatusCode::from_u16(app.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            code,
            message,
        }
    }

    /// Returns the HTTP status.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        let message = err.to_string();
        Self::from_app(&err, err.error_code(), message)
    }
}

impl From<StatementError> for ApiError {
    fn from(err: StatementError) -> Self {
        let code = err.error_code();
        let message = err.to_string();
        Self::from_app(&AppError::from(err), code, message)
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        let code = err.error_code();
        let message = err.to_string();
        Self::from_app(&AppError::from(err), code, message)
    }
}

impl From<JwtError> for ApiError {
    fn from(err: JwtError) -> Self {
        AppError::Internal(err.to_string()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(code = self.code, message = %self.message, "request failed");
            let message = match self.status {
                StatusCode::SERVICE_UNAVAILABLE => "Service temporarily unavailable, retry later",
                _ => "An internal error occurred",
            };
            return (
                self.status,
                Json(json!({ "error": self.code, "message": message })),
            )
                .into_response();
        }

        (
            self.status,
            Json(json!({ "error": self.code, "message": self.message })),
        )
            .into_response()
    }
}
