//! Key-value record storage
//!
//! Persists opaque JSON text blobs under string keys, one file per key in a
//! flat directory. The store knows nothing about note or settings schemas;
//! all (de)serialization happens in the layers above. A missing key is a
//! valid state, not an error.

use crate::error::{AppError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Filesystem-backed key-value store for JSON records
#[derive(Clone)]
pub struct RecordStore {
    root: PathBuf,
}

impl RecordStore {
    /// Create a record store rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Initialize the store (create the directory if needed)
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.root).await?;
        tracing::info!("Record store initialized at: {:?}", self.root);
        Ok(())
    }

    /// Read the record stored under `key`, or `None` if it was never written
    pub async fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.record_path(key)?;

        if !path.exists() {
            return Ok(None);
        }

        let value = fs::read_to_string(&path).await?;
        tracing::debug!("Read record: {} ({} bytes)", key, value.len());

        Ok(Some(value))
    }

    /// Write a record, replacing any previous value under `key`.
    ///
    /// Writes go to a temp file first and are renamed into place, so a
    /// crash mid-write leaves the previous value intact.
    pub async fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.record_path(key)?;

        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(value.as_bytes()).await?;
        file.sync_all().await?;

        fs::rename(temp_path, &path).await?;

        tracing::debug!("Wrote record: {} ({} bytes)", key, value.len());

        Ok(())
    }

    /// Remove a record; already-absent keys are fine
    pub async fn remove(&self, key: &str) -> Result<()> {
        let path = self.record_path(key)?;

        if !path.exists() {
            return Ok(());
        }

        fs::remove_file(&path).await?;
        tracing::debug!("Removed record: {}", key);

        Ok(())
    }

    /// File path backing a key. Keys map onto single file names, so path
    /// separators and traversal components are rejected.
    fn record_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || key == "."
            || key == ".."
            || key.contains('/')
            || key.contains('\\')
        {
            return Err(AppError::RecordStore(format!("invalid record key: {key:?}")));
        }

        Ok(self.root.join(format!("{key}.json")))
    }

    /// Store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }
}
