use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{SecondsFormat, Utc};
use serde_json::json;

use catalog_core::DomainError;

/// Map a domain error onto the HTTP error envelope.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match &err {
        DomainError::Validation(_) => json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "Validation failed",
            err.detail(),
        ),
        DomainError::InvalidId(_) => json_error(
            StatusCode::BAD_REQUEST,
            "invalid_id",
            "Invalid product id",
            err.detail(),
        ),
        DomainError::NotFound(_) => json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            "Product not found",
            err.detail(),
        ),
        DomainError::Internal(_) => {
            tracing::error!(error = %err, "internal error while handling request");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal error",
                err.detail(),
            )
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
    details: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
            "details": details.into(),
            "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })),
    )
        .into_response()
}
