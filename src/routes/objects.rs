//! Object endpoints
//!
//! Uploads, listings, tagging, server-side copy, signed download links, and
//! deletes. Identifiers come verbatim from the request path; the only
//! transformation is the folder-name decode for `create-folder`.

use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::error::{StorageError, StorageResult};
use crate::state::AppState;
use crate::storage::ObjectListing;

/// Fixed body written by `create-object`
const CREATED_OBJECT_BODY: &str = "Hello from s3-gateway";
const CREATED_OBJECT_CONTENT_TYPE: &str = "text/plain";

/// The two tag pairs `add-tags-metadata` always attaches, whatever the input
const FIXED_TAGS: [(&str, &str); 2] = [("Key1", "FirstTag"), ("Key2", "SecondTag")];

/// Signed download links expire exactly five hours after generation
const DOWNLOAD_LINK_TTL: Duration = Duration::from_secs(5 * 60 * 60);

/// Create the objects router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create-folder/:bucket_name/:folder_name", post(create_folder))
        .route("/create-object/:bucket_name/:object_name", post(create_object))
        .route(
            "/create-object-from-file/:bucket_name/:object_name",
            post(create_object_from_file),
        )
        .route("/list-object/:bucket_name", get(list_objects))
        .route("/add-tags-metadata/:bucket_name/:file_name", put(add_tags_metadata))
        .route(
            "/copy-file/:source_bucket/:source_key/:destination_bucket/:destination_key",
            put(copy_file),
        )
        .route("/generate-download-link/:bucket_name/:key_name", get(generate_download_link))
        .route("/delete-bucket-object/:bucket_name/:object_name", delete(delete_bucket_object))
}

/// Folder names can arrive with an encoded slash; the router decodes one
/// level, and a residual literal `%2F` left by double encoding is replaced
/// before the name is used as a key.
fn decode_folder_name(name: &str) -> String {
    name.replace("%2F", "/")
}

/// Create a zero-byte key as a folder marker
async fn create_folder(
    State(state): State<AppState>,
    Path((bucket_name, folder_name)): Path<(String, String)>,
) -> Result<String, (StatusCode, String)> {
    let key = decode_folder_name(&folder_name);
    match state
        .s3_client()
        .put_object(&bucket_name, &key, Vec::new(), None)
        .await
    {
        Ok(()) => Ok(format!("Folder {} was created inside {}", key, bucket_name)),
        Err(e) => {
            tracing::warn!("Folder {} could not be created in {}: {}", key, bucket_name, e);
            Err((
                StatusCode::BAD_REQUEST,
                "The folder could not be created".to_string(),
            ))
        }
    }
}

/// Upload the fixed text content under the given key
async fn create_object(
    State(state): State<AppState>,
    Path((bucket_name, object_name)): Path<(String, String)>,
) -> Result<String, (StatusCode, String)> {
    match state
        .s3_client()
        .put_object(
            &bucket_name,
            &object_name,
            CREATED_OBJECT_BODY.as_bytes().to_vec(),
            Some(CREATED_OBJECT_CONTENT_TYPE),
        )
        .await
    {
        Ok(()) => Ok("File created/uploaded".to_string()),
        Err(e) => {
            tracing::warn!(
                "Object {} could not be uploaded to {}: {}",
                object_name,
                bucket_name,
                e
            );
            Err((
                StatusCode::BAD_REQUEST,
                "File was not created/uploaded".to_string(),
            ))
        }
    }
}

/// Upload the configured local file, then list the bucket
///
/// The `{objectName}` path parameter is accepted and ignored; the object key
/// is the source file's own name. The caller gets the listing result back,
/// not the upload result.
async fn create_object_from_file(
    State(state): State<AppState>,
    Path((bucket_name, _object_name)): Path<(String, String)>,
) -> Result<Json<ObjectListing>, (StatusCode, String)> {
    match upload_source_and_list(&state, &bucket_name).await {
        Ok(listing) => Ok(Json(listing)),
        Err(e) => {
            tracing::warn!("File upload to {} failed: {}", bucket_name, e);
            Err((
                StatusCode::BAD_REQUEST,
                "File was not created/uploaded".to_string(),
            ))
        }
    }
}

async fn upload_source_and_list(state: &AppState, bucket: &str) -> StorageResult<ObjectListing> {
    let source = &state.config().upload.source_path;
    let key = source
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            StorageError::InvalidRequest(format!(
                "upload source {} has no usable file name",
                source.display()
            ))
        })?
        .to_string();

    // Single buffered read; large-file streaming is out of scope
    let bytes = tokio::fs::read(source).await?;
    tracing::debug!("Read {} bytes from {}", bytes.len(), source.display());

    state.s3_client().put_object(bucket, &key, bytes, None).await?;
    state.s3_client().list_objects(bucket).await
}

/// List objects in a bucket
async fn list_objects(
    State(state): State<AppState>,
    Path(bucket_name): Path<String>,
) -> Result<Json<ObjectListing>, (StatusCode, String)> {
    match state.s3_client().list_objects(&bucket_name).await {
        Ok(listing) => Ok(Json(listing)),
        Err(e) => {
            tracing::warn!("Objects in {} could not be listed: {}", bucket_name, e);
            Err((
                StatusCode::BAD_REQUEST,
                "Objects could not be listed".to_string(),
            ))
        }
    }
}

/// Attach the two fixed tag pairs to an object
async fn add_tags_metadata(
    State(state): State<AppState>,
    Path((bucket_name, file_name)): Path<(String, String)>,
) -> Result<String, (StatusCode, String)> {
    match state
        .s3_client()
        .put_object_tags(&bucket_name, &file_name, &FIXED_TAGS)
        .await
    {
        Ok(()) => Ok("Tags added".to_string()),
        Err(e) => {
            tracing::warn!(
                "Tags could not be added to {}/{}: {}",
                bucket_name,
                file_name,
                e
            );
            Err((
                StatusCode::BAD_REQUEST,
                "Tags could not be added".to_string(),
            ))
        }
    }
}

/// Server-side copy between buckets
async fn copy_file(
    State(state): State<AppState>,
    Path((source_bucket, source_key, destination_bucket, destination_key)): Path<(
        String,
        String,
        String,
        String,
    )>,
) -> Result<String, (StatusCode, String)> {
    match state
        .s3_client()
        .copy_object(&source_bucket, &source_key, &destination_bucket, &destination_key)
        .await
    {
        Ok(()) => Ok("Object was copied".to_string()),
        Err(e) => {
            tracing::warn!(
                "Copy {}/{} to {}/{} failed: {}",
                source_bucket,
                source_key,
                destination_bucket,
                destination_key,
                e
            );
            Err((StatusCode::BAD_REQUEST, "Object was not copied".to_string()))
        }
    }
}

/// Produce a five-hour signed download URL
async fn generate_download_link(
    State(state): State<AppState>,
    Path((bucket_name, key_name)): Path<(String, String)>,
) -> Result<String, (StatusCode, String)> {
    match state
        .s3_client()
        .presign_download(&bucket_name, &key_name, DOWNLOAD_LINK_TTL)
        .await
    {
        Ok(url) => Ok(format!("Download link {}", url)),
        Err(e) => {
            tracing::warn!(
                "Download link for {}/{} could not be generated: {}",
                bucket_name,
                key_name,
                e
            );
            Err((
                StatusCode::BAD_REQUEST,
                "Download link was not generated".to_string(),
            ))
        }
    }
}

/// Delete one object
async fn delete_bucket_object(
    State(state): State<AppState>,
    Path((bucket_name, object_name)): Path<(String, String)>,
) -> Result<String, (StatusCode, String)> {
    match state
        .s3_client()
        .delete_object(&bucket_name, &object_name)
        .await
    {
        Ok(()) => Ok(format!(
            "Object {} in bucket {} was deleted",
            object_name, bucket_name
        )),
        Err(e) => {
            tracing::warn!(
                "Object {} in {} could not be deleted: {}",
                object_name,
                bucket_name,
                e
            );
            Err((
                StatusCode::BAD_REQUEST,
                format!("Object {} in bucket {} was not deleted", object_name, bucket_name),
            ))
        }
    }
}
