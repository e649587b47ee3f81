//! Configuration management for the S3 gateway

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub access_key: String,
    pub secret_key: String,
    pub region: String,
    /// Custom endpoint for S3-compatible services (MinIO, R2). When set,
    /// path-style addressing is used. Unset means real AWS in `region`.
    pub endpoint: Option<String>,
}

/// Source for the `create-object-from-file` endpoint: one local file that is
/// read fully into memory and uploaded under its own file name.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    pub source_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            storage: StorageConfig {
                access_key: "minioadmin".to_string(),
                secret_key: "minioadmin".to_string(),
                region: "eu-north-1".to_string(),
                endpoint: Some("http://localhost:9000".to_string()),
            },
            upload: UploadConfig {
                source_path: PathBuf::from("./data/upload-source.txt"),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .unwrap_or(3000),
            },
            storage: StorageConfig {
                access_key: env::var("S3_ACCESS_KEY")?,
                secret_key: env::var("S3_SECRET_KEY")?,
                region: env::var("S3_REGION").unwrap_or_else(|_| "eu-north-1".to_string()),
                endpoint: env::var("S3_ENDPOINT").ok(),
            },
            upload: UploadConfig {
                source_path: env::var("UPLOAD_SOURCE_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("./data/upload-source.txt")),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_local_minio() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.region, "eu-north-1");
        assert_eq!(
            config.storage.endpoint.as_deref(),
            Some("http://localhost:9000")
        );
    }

    #[test]
    fn default_upload_source_is_relative() {
        let config = Config::default();
        assert!(config.upload.source_path.is_relative());
    }
}
