use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{Error, HttpRequest};

use crate::core::AppError;

/// Maps body extraction failures (bad JSON, wrong field types, wrong
/// content type) onto the standard validation error response
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    tracing::warn!(path = %req.path(), error = %err, "Rejected request body");
    AppError::validation(err.to_string()).into()
}

/// Same as [`json_error_handler`] for query strings
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    tracing::warn!(path = %req.path(), error = %err, "Rejected query string");
    AppError::validation(err.to_string()).into()
}
