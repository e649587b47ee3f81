//! Storage module wrapping the AWS S3 SDK
//!
//! Works against AWS or any S3-compatible endpoint (MinIO, R2).

mod s3_client;
mod types;

pub use s3_client::S3Client;
pub use types::*;
