//! The application error surface, mapped onto HTTP status codes.
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Everything a handler can fail with.
///
/// Internal errors deliberately serialize to a generic message; the
/// underlying cause is logged, not leaked to the client.
#[derive(Error, Debug)]
pub enum SipsError {
    /// The request was well-formed but carried invalid values.
    #[error("{0}")]
    Validation(String),
    /// No valid session accompanied the request.
    #[error("{0}")]
    Unauthorized(String),
    /// The caller is authenticated but not allowed to do this.
    #[error("{0}")]
    Forbidden(String),
    /// The requested resource does not exist.
    #[error("{0}")]
    NotFound(String),
    /// The request conflicts with existing state, e.g. a taken username.
    #[error("{0}")]
    Conflict(String),
    /// Any unexpected failure.
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ResponseError for SipsError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Self::Internal(ref err) = *self {
            tracing::error!("Internal error: {err:?}");
        }
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
