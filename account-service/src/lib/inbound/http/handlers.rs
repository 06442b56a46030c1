use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::account::errors::AccountError;

pub mod get_account;
pub mod list_accounts;
pub mod login;
pub mod register;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// User input malformed; carries every violation, not just the first.
    Validation(Vec<String>),
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(violations) => {
                let status = StatusCode::BAD_REQUEST;
                let body = ApiResponseBody::new_validation_error(status, violations);
                (status, Json(body)).into_response()
            }
            ApiError::BadRequest(message) => error_response(StatusCode::BAD_REQUEST, message),
            ApiError::Unauthorized(message) => error_response(StatusCode::UNAUTHORIZED, message),
            ApiError::NotFound(message) => error_response(StatusCode::NOT_FOUND, message),
            ApiError::Conflict(message) => error_response(StatusCode::CONFLICT, message),
            ApiError::InternalServerError(detail) => {
                // Detail stays server-side; the caller gets a generic body.
                tracing::error!(error = %detail, "Internal server error");
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        }
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ApiResponseBody::new_error(status, message))).into_response()
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::NotFound(_) => ApiError::NotFound(err.to_string()),
            AccountError::DuplicateEmail(_) => ApiError::Conflict(err.to_string()),
            AccountError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            AccountError::InvalidName(_)
            | AccountError::InvalidEmail(_)
            | AccountError::Directory(_)
            | AccountError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// Collected input violations from request parsing.
///
/// Parsing checks every field before failing so the caller sees the full
/// list in one round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailures(pub Vec<String>);

impl From<ValidationFailures> for ApiError {
    fn from(failures: ValidationFailures) -> Self {
        ApiError::Validation(failures.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData {
                message,
                violations: None,
            },
        }
    }

    pub fn new_validation_error(status_code: StatusCode, violations: Vec<String>) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData {
                message: "Validation failed".to_string(),
                violations: Some(violations),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<String>>,
}
