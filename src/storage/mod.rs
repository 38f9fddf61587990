//! Persistent storage
//!
//! Settings records are stored as JSON blobs in the platform data directory,
//! one file per record key.

pub mod settings;

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the storage layer
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not determine application data directory")]
    DataDirUnavailable,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Get the application data directory
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    directories::ProjectDirs::from("com", "ParentDash", "ParentDash")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::DataDirUnavailable)
}
