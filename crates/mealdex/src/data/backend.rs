//! Durable key-value backend
//!
//! The favorites store persists through this interface; implementations
//! own durability, the store owns the data format.

use crate::config::app::NAME;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// An asynchronous, crash-durable string-keyed store of opaque blobs
///
/// `get` returns `Ok(None)` when the key has never been written. Both
/// operations fail with [`AppError::StorageUnavailable`] on I/O trouble.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Retrieve the blob stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any prior blob
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

// =============================================================================
// FileBackend - One JSON file per key in a directory
// =============================================================================

/// File-per-key backend rooted in a directory
///
/// Writes go to a sibling temp file followed by a rename, so a write that
/// fails midway leaves the previously persisted blob untouched.
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at a specific directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a backend rooted in the per-user application config directory
    pub fn open_default() -> Result<Self> {
        let root = dirs::config_dir().map(|p| p.join(NAME)).ok_or_else(|| {
            AppError::Config(
                "Could not determine config directory. HOME environment variable may not be set."
                    .to_string(),
            )
        })?;
        Ok(Self::new(root))
    }

    /// The directory this backend stores files in
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    async fn ensure_root(&self) -> Result<()> {
        match tokio::fs::create_dir_all(&self.root).await {
            Ok(()) => Ok(()),
            Err(e) => {
                let msg = match e.kind() {
                    ErrorKind::PermissionDenied => {
                        format!("Permission denied: cannot create directory {:?}", self.root)
                    }
                    _ => format!("Failed to create directory {:?}: {}", self.root, e),
                };
                Err(AppError::StorageUnavailable(msg))
            }
        }
    }
}

#[async_trait]
impl StorageBackend for FileBackend {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                // An empty or whitespace-only file counts as never written
                if content.trim().is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(content))
                }
            }
            Err(e) => match e.kind() {
                ErrorKind::NotFound => Ok(None),
                ErrorKind::PermissionDenied => Err(AppError::StorageUnavailable(format!(
                    "Permission denied: cannot read {path:?}"
                ))),
                _ => Err(AppError::StorageUnavailable(format!(
                    "Failed to read {path:?}: {e}"
                ))),
            },
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_root().await?;

        let path = self.key_path(key);
        let tmp = self.root.join(format!("{key}.json.tmp"));

        if let Err(e) = tokio::fs::write(&tmp, value).await {
            let msg = match e.kind() {
                ErrorKind::PermissionDenied => {
                    format!("Permission denied: cannot write to {tmp:?}")
                }
                ErrorKind::ReadOnlyFilesystem => {
                    format!("Cannot write to {tmp:?}: filesystem is read-only")
                }
                _ => format!("Failed to write to {tmp:?}: {e}"),
            };
            return Err(AppError::StorageUnavailable(msg));
        }

        tokio::fs::rename(&tmp, &path).await.map_err(|e| {
            AppError::StorageUnavailable(format!("Failed to replace {path:?}: {e}"))
        })
    }
}

// =============================================================================
// MemoryBackend - In-memory map, for tests and ephemeral use
// =============================================================================

/// In-memory backend
#[derive(Default)]
pub struct MemoryBackend {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self.map.lock().unwrap_or_else(|e| e.into_inner());
        Ok(map.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.map.lock().unwrap_or_else(|e| e.into_inner());
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
