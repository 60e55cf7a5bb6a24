// ABOUTME: In-memory store implementation backed by a shared map
// ABOUTME: Default backend for tests and single-session use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Athlete360

use super::{StoreKey, StoreProvider};
use crate::errors::AppResult;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory store
///
/// Uses `Arc<RwLock<HashMap>>` so clones share the same state, matching
/// the behavior of a single browser origin seen from multiple call sites.
/// Contents die with the process; use [`super::FileStore`] for persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the store holds no keys
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl StoreProvider for MemoryStore {
    async fn get_raw(&self, key: StoreKey) -> AppResult<Option<String>> {
        Ok(self.entries.read().await.get(key.as_str()).cloned())
    }

    async fn set_raw(&self, key: StoreKey, value: String) -> AppResult<()> {
        self.entries.write().await.insert(key.as_str().to_owned(), value);
        Ok(())
    }

    async fn remove(&self, key: StoreKey) -> AppResult<()> {
        self.entries.write().await.remove(key.as_str());
        Ok(())
    }

    async fn clear_all(&self) -> AppResult<()> {
        self.entries.write().await.clear();
        Ok(())
    }
}
