//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::storage::S3Client;

/// Shared application state
///
/// Holds the one S3 client handle every handler reuses; the handle is created
/// once at startup and is safe for concurrent use per the SDK contract.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    s3_client: S3Client,
}

impl AppState {
    pub fn new(config: Config, s3_client: S3Client) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, s3_client }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the S3 client
    pub fn s3_client(&self) -> &S3Client {
        &self.inner.s3_client
    }
}
