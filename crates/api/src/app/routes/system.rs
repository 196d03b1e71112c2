use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use crate::app::errors;
use crate::app::services::AppServices;

/// Liveness plus the current product count.
pub async fn health(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.catalog.count() {
        Ok(products) => (
            StatusCode::OK,
            Json(serde_json::json!({ "status": "ok", "products": products })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
