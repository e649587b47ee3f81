//! Error types for the S3 gateway
//!
//! The HTTP surface collapses every failure to a single outcome (400 plus a
//! fixed message per endpoint), so the storage layer keeps only what the
//! handlers and logs need: whether a request could not even be built, or the
//! provider call itself failed.

use thiserror::Error;

/// Result of a storage-layer operation
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Storage-specific errors
#[derive(Error, Debug)]
pub enum StorageError {
    /// The SDK refused to construct the request (builder validation,
    /// presigning configuration).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The provider call failed; the SDK error is collapsed to text.
    #[error("{0}")]
    Sdk(String),

    /// The local upload source could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<aws_sdk_s3::error::BuildError> for StorageError {
    fn from(err: aws_sdk_s3::error::BuildError) -> Self {
        StorageError::InvalidRequest(err.to_string())
    }
}

impl From<aws_sdk_s3::presigning::PresigningConfigError> for StorageError {
    fn from(err: aws_sdk_s3::presigning::PresigningConfigError) -> Self {
        StorageError::InvalidRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::types::Tag;

    #[test]
    fn build_error_maps_to_invalid_request() {
        // A Tag without a value fails builder validation.
        let err = Tag::builder().key("only-key").build().unwrap_err();
        let storage: StorageError = err.into();
        assert!(matches!(storage, StorageError::InvalidRequest(_)));
    }

    #[test]
    fn sdk_error_displays_inner_text() {
        let err = StorageError::Sdk("dispatch failure".to_string());
        assert_eq!(err.to_string(), "dispatch failure");
    }
}
