//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the shared catalog service and page limits
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request parsing and query-string mapping
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::config::Config;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &Config) -> Router {
    build_app_with(Arc::new(services::AppServices::new(config.page_limits)))
}

/// Build the router around existing services.
pub fn build_app_with(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api/product", routes::products::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::log_requests))
                .layer(Extension(services)),
        )
}
