// ABOUTME: JSON-file-backed store implementation for cross-session persistence
// ABOUTME: Whole-document load on open, whole-document write on each mutation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Athlete360

use super::{StoreKey, StoreProvider};
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// File-backed store persisting a single JSON document
///
/// The document is a flat string-to-string map mirroring the store's raw
/// contract. The full map is loaded once on open and rewritten on every
/// mutation; the data set is a handful of small records, so whole-document
/// writes are simpler than any incremental scheme and keep the on-disk
/// layout human-readable.
///
/// A corrupt document on open fail-softs to an empty store (logged); the
/// next writes replace it.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl FileStore {
    /// Open a store at the given path, loading existing contents
    ///
    /// A missing file yields an empty store; the file is created on the
    /// first write.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read.
    pub async fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let entries = Self::load(&path).await?;
        debug!(path = %path.display(), keys = entries.len(), "Opened file store");
        Ok(Self {
            path,
            entries: Arc::new(RwLock::new(entries)),
        })
    }

    /// Path of the backing document
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(path: &Path) -> AppResult<HashMap<String, String>> {
        let raw = match fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => {
                return Err(
                    AppError::storage(format!("failed to read {}", path.display())).with_source(e),
                )
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Store document is corrupt, starting empty"
                );
                Ok(HashMap::new())
            }
        }
    }

    /// Persist the current map to disk
    ///
    /// Not atomic with respect to the in-memory mutation that preceded it;
    /// callers hold the write lock across this call so writes serialize.
    async fn persist(&self, entries: &HashMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::storage(format!("failed to create {}", parent.display())).with_source(e)
            })?;
        }

        let raw = serde_json::to_string_pretty(entries)
            .map_err(|e| AppError::serialization(e.to_string()))?;

        fs::write(&self.path, raw).await.map_err(|e| {
            AppError::storage(format!("failed to write {}", self.path.display())).with_source(e)
        })
    }
}

#[async_trait]
impl StoreProvider for FileStore {
    async fn get_raw(&self, key: StoreKey) -> AppResult<Option<String>> {
        Ok(self.entries.read().await.get(key.as_str()).cloned())
    }

    async fn set_raw(&self, key: StoreKey, value: String) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.as_str().to_owned(), value);
        self.persist(&entries).await
    }

    async fn remove(&self, key: StoreKey) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        if entries.remove(key.as_str()).is_some() {
            self.persist(&entries).await?;
        }
        Ok(())
    }

    async fn clear_all(&self) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        entries.clear();
        self.persist(&entries).await
    }
}
