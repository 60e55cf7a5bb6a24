// ABOUTME: Store factory dispatching over the available backends
// ABOUTME: Memory for tests and ephemeral use, File for persistent sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Athlete360

use super::{FileStore, MemoryStore, StoreKey, StoreProvider};
use crate::errors::AppResult;
use async_trait::async_trait;
use std::path::PathBuf;

/// Store backend selected at construction time
#[derive(Debug, Clone)]
pub enum Store {
    /// In-memory backend
    Memory(MemoryStore),
    /// JSON-file backend
    File(FileStore),
}

impl Store {
    /// Create an in-memory store
    #[must_use]
    pub fn memory() -> Self {
        Self::Memory(MemoryStore::new())
    }

    /// Open a file-backed store at the given path
    ///
    /// # Errors
    ///
    /// Returns an error if an existing store document cannot be read.
    pub async fn file(path: impl Into<PathBuf>) -> AppResult<Self> {
        Ok(Self::File(FileStore::open(path).await?))
    }
}

#[async_trait]
impl StoreProvider for Store {
    async fn get_raw(&self, key: StoreKey) -> AppResult<Option<String>> {
        match self {
            Self::Memory(store) => store.get_raw(key).await,
            Self::File(store) => store.get_raw(key).await,
        }
    }

    async fn set_raw(&self, key: StoreKey, value: String) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.set_raw(key, value).await,
            Self::File(store) => store.set_raw(key, value).await,
        }
    }

    async fn remove(&self, key: StoreKey) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.remove(key).await,
            Self::File(store) => store.remove(key).await,
        }
    }

    async fn clear_all(&self) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.clear_all().await,
            Self::File(store) => store.clear_all().await,
        }
    }
}
