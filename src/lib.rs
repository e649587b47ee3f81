//! S3 Gateway
//!
//! A thin HTTP façade over the AWS S3 SDK: every endpoint receives a request,
//! issues exactly one provider call, and reports a fixed success or failure
//! message. The two listing endpoints return the provider response as JSON.
//!
//! # Modules
//!
//! - `config`: environment-driven configuration
//! - `error`: storage error types
//! - `routes`: the HTTP surface (buckets, objects, health)
//! - `state`: shared application state
//! - `storage`: the S3 client wrapper and listing DTOs

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod storage;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the gateway router
///
/// Shared by the server binary and the contract tests.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/health", routes::health::router())
        .nest(
            "/api/s3",
            routes::buckets::router().merge(routes::objects::router()),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
