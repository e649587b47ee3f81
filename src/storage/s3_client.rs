//! S3 client wrapper
//!
//! One method per gateway operation. Every call is a single round trip to the
//! provider; SDK errors are collapsed into [`StorageError::Sdk`] text for the
//! handlers to log and discard.

use std::time::Duration;

use aws_config::BehaviorVersion;
use aws_sdk_s3::{
    config::{Credentials, Region},
    presigning::PresigningConfig,
    primitives::ByteStream,
    types::{
        BucketLocationConstraint, BucketVersioningStatus, CreateBucketConfiguration, Delete,
        ObjectIdentifier, Tag, Tagging, VersioningConfiguration,
    },
    Client,
};

use crate::config::StorageConfig;
use crate::error::{StorageError, StorageResult};

use super::types::{BucketList, BucketSummary, ObjectListing, ObjectSummary};

/// S3-compatible storage client
#[derive(Clone)]
pub struct S3Client {
    client: Client,
    region: String,
}

impl S3Client {
    /// Create a new S3 client from configuration
    pub fn new(config: &StorageConfig) -> Self {
        let credentials = Credentials::new(
            &config.access_key,
            &config.secret_key,
            None,
            None,
            "s3-gateway",
        );

        let mut builder = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials);

        if let Some(endpoint) = &config.endpoint {
            // Path-style addressing is required for MinIO and other
            // S3-compatible services
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        let client = Client::from_conf(builder.build());

        match &config.endpoint {
            Some(endpoint) => {
                tracing::info!("S3 client targeting {} (region {})", endpoint, config.region)
            }
            None => tracing::info!("S3 client targeting AWS region {}", config.region),
        }

        Self {
            client,
            region: config.region.clone(),
        }
    }

    /// Connectivity check: one ListBuckets round trip, output discarded
    pub async fn ping(&self) -> StorageResult<()> {
        self.client
            .list_buckets()
            .send()
            .await
            .map_err(|e| StorageError::Sdk(format!("Failed to reach storage provider: {}", e)))?;
        Ok(())
    }

    /// List all buckets
    pub async fn list_buckets(&self) -> StorageResult<BucketList> {
        let response = self
            .client
            .list_buckets()
            .send()
            .await
            .map_err(|e| StorageError::Sdk(format!("Failed to list buckets: {}", e)))?;

        let buckets: Vec<BucketSummary> =
            response.buckets().iter().map(BucketSummary::from).collect();

        Ok(BucketList {
            buckets,
            owner: response
                .owner()
                .and_then(|o| o.display_name().map(|s| s.to_string())),
        })
    }

    /// Create a bucket
    pub async fn create_bucket(&self, bucket: &str) -> StorageResult<()> {
        let mut request = self.client.create_bucket().bucket(bucket);

        // Outside us-east-1, S3 rejects bucket creation without an explicit
        // location constraint matching the client region.
        if self.region != "us-east-1" {
            request = request.create_bucket_configuration(
                CreateBucketConfiguration::builder()
                    .location_constraint(BucketLocationConstraint::from(self.region.as_str()))
                    .build(),
            );
        }

        request
            .send()
            .await
            .map_err(|e| StorageError::Sdk(format!("Failed to create bucket {}: {}", bucket, e)))?;
        Ok(())
    }

    /// Enable versioning on a bucket
    pub async fn enable_versioning(&self, bucket: &str) -> StorageResult<()> {
        self.client
            .put_bucket_versioning()
            .bucket(bucket)
            .versioning_configuration(
                VersioningConfiguration::builder()
                    .status(BucketVersioningStatus::Enabled)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| {
                StorageError::Sdk(format!("Failed to enable versioning on {}: {}", bucket, e))
            })?;
        Ok(())
    }

    /// Write an object; an empty body produces a zero-byte key (folder marker)
    pub async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: Option<&str>,
    ) -> StorageResult<()> {
        let mut request = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body));

        if let Some(content_type) = content_type {
            request = request.content_type(content_type);
        }

        request
            .send()
            .await
            .map_err(|e| StorageError::Sdk(format!("Failed to put object {}: {}", key, e)))?;
        Ok(())
    }

    /// Delete a bucket
    pub async fn delete_bucket(&self, bucket: &str) -> StorageResult<()> {
        self.client
            .delete_bucket()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| StorageError::Sdk(format!("Failed to delete bucket {}: {}", bucket, e)))?;
        Ok(())
    }

    /// List objects in a bucket (single page, no pagination)
    pub async fn list_objects(&self, bucket: &str) -> StorageResult<ObjectListing> {
        let response = self
            .client
            .list_objects_v2()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| StorageError::Sdk(format!("Failed to list objects: {}", e)))?;

        let objects: Vec<ObjectSummary> =
            response.contents().iter().map(ObjectSummary::from).collect();

        Ok(ObjectListing {
            bucket: bucket.to_string(),
            objects,
            is_truncated: response.is_truncated().unwrap_or(false),
        })
    }

    /// Replace an object's tag set
    pub async fn put_object_tags(
        &self,
        bucket: &str,
        key: &str,
        tags: &[(&str, &str)],
    ) -> StorageResult<()> {
        let mut tagging = Tagging::builder();
        for (tag_key, tag_value) in tags.iter().copied() {
            tagging = tagging.tag_set(Tag::builder().key(tag_key).value(tag_value).build()?);
        }

        self.client
            .put_object_tagging()
            .bucket(bucket)
            .key(key)
            .tagging(tagging.build()?)
            .send()
            .await
            .map_err(|e| StorageError::Sdk(format!("Failed to tag object {}: {}", key, e)))?;
        Ok(())
    }

    /// Server-side copy between buckets
    pub async fn copy_object(
        &self,
        source_bucket: &str,
        source_key: &str,
        destination_bucket: &str,
        destination_key: &str,
    ) -> StorageResult<()> {
        self.client
            .copy_object()
            .bucket(destination_bucket)
            .copy_source(copy_source(source_bucket, source_key))
            .key(destination_key)
            .send()
            .await
            .map_err(|e| {
                StorageError::Sdk(format!(
                    "Failed to copy {}/{}: {}",
                    source_bucket, source_key, e
                ))
            })?;
        Ok(())
    }

    /// Generate a time-limited download URL; signing happens locally
    pub async fn presign_download(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        let config = PresigningConfig::expires_in(expires_in)?;

        let request = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .presigned(config)
            .await
            .map_err(|e| {
                StorageError::Sdk(format!("Failed to presign download for {}: {}", key, e))
            })?;

        Ok(request.uri().to_string())
    }

    /// Delete one object
    pub async fn delete_object(&self, bucket: &str, key: &str) -> StorageResult<()> {
        self.client
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Sdk(format!("Failed to delete object {}: {}", key, e)))?;
        Ok(())
    }

    /// Bulk-delete objects by key
    ///
    /// The key list is sent as given; an empty list still produces a request,
    /// and the provider decides whether that is acceptable.
    pub async fn delete_objects(&self, bucket: &str, keys: &[String]) -> StorageResult<()> {
        let objects: Vec<ObjectIdentifier> = keys
            .iter()
            .map(|key| ObjectIdentifier::builder().key(key).build())
            .collect::<Result<_, _>>()?;

        // set_objects keeps the builder valid for a present-but-empty list
        let delete = Delete::builder().set_objects(Some(objects)).build()?;

        self.client
            .delete_objects()
            .bucket(bucket)
            .delete(delete)
            .send()
            .await
            .map_err(|e| {
                StorageError::Sdk(format!("Failed to bulk-delete in {}: {}", bucket, e))
            })?;
        Ok(())
    }
}

/// Format a CopyObject source as `bucket/key` with the key percent-encoded
fn copy_source(bucket: &str, key: &str) -> String {
    format!("{}/{}", bucket, urlencoding::encode(key))
}
