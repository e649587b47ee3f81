//! Bucket administration endpoints
//!
//! Each handler issues exactly one provider call and reports a fixed
//! per-endpoint message; only `list-bucket` returns the provider response
//! itself. Every failure collapses to 400 with the endpoint's failure
//! message, the cause logged server-side.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};

use crate::state::AppState;
use crate::storage::BucketList;

/// Create the buckets router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/test-client", get(test_client))
        .route("/list-bucket", get(list_buckets))
        .route("/create-bucket/:bucket_name", post(create_bucket))
        .route("/enable-versioning/:bucket_name", post(enable_versioning))
        .route("/delete-bucket/:bucket_name", delete(delete_bucket))
        .route("/cleanup-bucket/:bucket_name", delete(cleanup_bucket))
}

/// Verify connectivity to the storage provider
async fn test_client(State(state): State<AppState>) -> Result<String, (StatusCode, String)> {
    match state.s3_client().ping().await {
        Ok(()) => Ok("S3 client works fine".to_string()),
        Err(e) => {
            tracing::warn!("Connectivity check failed: {}", e);
            Err((StatusCode::BAD_REQUEST, "S3 client does not work".to_string()))
        }
    }
}

/// List all buckets
async fn list_buckets(
    State(state): State<AppState>,
) -> Result<Json<BucketList>, (StatusCode, String)> {
    match state.s3_client().list_buckets().await {
        Ok(list) => Ok(Json(list)),
        Err(e) => {
            tracing::warn!("Buckets could not be listed: {}", e);
            Err((StatusCode::BAD_REQUEST, "Buckets could not be listed".to_string()))
        }
    }
}

/// Create a bucket
async fn create_bucket(
    State(state): State<AppState>,
    Path(bucket_name): Path<String>,
) -> Result<String, (StatusCode, String)> {
    match state.s3_client().create_bucket(&bucket_name).await {
        Ok(()) => Ok(format!("Bucket {} was created", bucket_name)),
        Err(e) => {
            tracing::warn!("Bucket {} could not be created: {}", bucket_name, e);
            Err((
                StatusCode::BAD_REQUEST,
                format!("Bucket {} was not created", bucket_name),
            ))
        }
    }
}

/// Enable versioning on a bucket
async fn enable_versioning(
    State(state): State<AppState>,
    Path(bucket_name): Path<String>,
) -> Result<String, (StatusCode, String)> {
    match state.s3_client().enable_versioning(&bucket_name).await {
        Ok(()) => Ok(format!("Bucket {} versioning enabled", bucket_name)),
        Err(e) => {
            tracing::warn!("Versioning on {} could not be enabled: {}", bucket_name, e);
            Err((
                StatusCode::BAD_REQUEST,
                format!("Bucket {} versioning was not enabled", bucket_name),
            ))
        }
    }
}

/// Delete a bucket
async fn delete_bucket(
    State(state): State<AppState>,
    Path(bucket_name): Path<String>,
) -> Result<String, (StatusCode, String)> {
    match state.s3_client().delete_bucket(&bucket_name).await {
        Ok(()) => Ok(format!("Bucket {} was deleted", bucket_name)),
        Err(e) => {
            tracing::warn!("Bucket {} could not be deleted: {}", bucket_name, e);
            Err((
                StatusCode::BAD_REQUEST,
                format!("Bucket {} was not deleted", bucket_name),
            ))
        }
    }
}

/// Issue a bulk-delete with an empty key list
///
/// No keys are enumerated first; the provider decides what an empty delete
/// request means. AWS rejects it, which surfaces here as the failure message.
async fn cleanup_bucket(
    State(state): State<AppState>,
    Path(bucket_name): Path<String>,
) -> Result<String, (StatusCode, String)> {
    match state.s3_client().delete_objects(&bucket_name, &[]).await {
        Ok(()) => Ok(format!("Bucket {} was cleaned up", bucket_name)),
        Err(e) => {
            tracing::warn!("Bucket {} could not be cleaned up: {}", bucket_name, e);
            Err((
                StatusCode::BAD_REQUEST,
                format!("Bucket {} was not cleaned up", bucket_name),
            ))
        }
    }
}
