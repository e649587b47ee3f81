//! Storage types
//!
//! Pass-through DTOs mirroring the provider's listing responses. These are the
//! only shapes the gateway returns verbatim; everything else is a fixed
//! confirmation string.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One bucket entry from a ListBuckets call
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketSummary {
    pub name: String,
    pub creation_date: Option<DateTime<Utc>>,
}

/// Rendering of the raw ListBuckets response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketList {
    pub buckets: Vec<BucketSummary>,
    pub owner: Option<String>,
}

/// One object entry from a listing call
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSummary {
    pub key: String,
    pub size: i64,
    pub last_modified: Option<DateTime<Utc>>,
    pub etag: Option<String>,
}

/// Rendering of the raw ListObjectsV2 response for one bucket
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectListing {
    pub bucket: String,
    pub objects: Vec<ObjectSummary>,
    pub is_truncated: bool,
}

impl From<&aws_sdk_s3::types::Bucket> for BucketSummary {
    fn from(bucket: &aws_sdk_s3::types::Bucket) -> Self {
        Self {
            name: bucket.name().unwrap_or_default().to_string(),
            creation_date: bucket
                .creation_date()
                .and_then(|dt| DateTime::from_timestamp(dt.secs(), dt.subsec_nanos())),
        }
    }
}

impl From<&aws_sdk_s3::types::Object> for ObjectSummary {
    fn from(object: &aws_sdk_s3::types::Object) -> Self {
        Self {
            key: object.key().unwrap_or_default().to_string(),
            size: object.size().unwrap_or(0),
            last_modified: object
                .last_modified()
                .and_then(|dt| DateTime::from_timestamp(dt.secs(), dt.subsec_nanos())),
            etag: object.e_tag().map(|s| s.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::primitives::DateTime as SdkDateTime;
    use aws_sdk_s3::types::{Bucket, Object};

    #[test]
    fn bucket_summary_maps_name_and_creation_date() {
        let bucket = Bucket::builder()
            .name("alpha")
            .creation_date(SdkDateTime::from_secs(1_705_312_800))
            .build();

        let summary = BucketSummary::from(&bucket);
        assert_eq!(summary.name, "alpha");
        assert!(summary.creation_date.is_some());
    }

    #[test]
    fn bucket_summary_tolerates_missing_fields() {
        let summary = BucketSummary::from(&Bucket::builder().build());
        assert_eq!(summary.name, "");
        assert!(summary.creation_date.is_none());
    }

    #[test]
    fn object_summary_maps_all_fields() {
        let object = Object::builder()
            .key("docs/readme.txt")
            .size(42)
            .e_tag("\"abc123\"")
            .last_modified(SdkDateTime::from_secs(1_709_283_600))
            .build();

        let summary = ObjectSummary::from(&object);
        assert_eq!(summary.key, "docs/readme.txt");
        assert_eq!(summary.size, 42);
        assert_eq!(summary.etag.as_deref(), Some("\"abc123\""));
        assert!(summary.last_modified.is_some());
    }

    #[test]
    fn listing_serializes_camel_case() {
        let listing = ObjectListing {
            bucket: "demo".to_string(),
            objects: vec![],
            is_truncated: false,
        };

        let json = serde_json::to_value(&listing).unwrap();
        assert!(json.get("isTruncated").is_some());
        assert!(json.get("bucket").is_some());
    }
}
