// ABOUTME: Key-value store abstraction for session data with JSON values
// ABOUTME: Pluggable backend support (in-memory, JSON file) behind one trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Athlete360

//! # Session Store
//!
//! A persistent string-keyed store with JSON-encoded values, the local
//! analog of a browser's per-origin storage. Typed reads and writes go
//! through [`StoreProvider::get`] / [`StoreProvider::set`]; the raw string
//! accessors exist because the underlying contract is text in, text out.
//!
//! A missing or malformed stored value is treated as "not found" on the
//! read path: corruption is logged and converted to a cache miss so the
//! caller regenerates instead of failing. There is no atomicity across
//! keys; a bulk [`remove_many`](StoreProvider::remove_many) may partially
//! complete if the backend fails mid-way.
//!
//! # Examples
//!
//! ```rust,no_run
//! use athlete360::store::{Store, StoreKey, StoreProvider};
//!
//! # async fn example() -> athlete360::errors::AppResult<()> {
//! let store = Store::memory();
//! store.set(StoreKey::Theme, &"dark").await?;
//! let theme: Option<String> = store.get(StoreKey::Theme).await?;
//! assert_eq!(theme.as_deref(), Some("dark"));
//! # Ok(())
//! # }
//! ```

/// Store factory dispatching over backends
pub mod factory;
/// JSON-file-backed store implementation
pub mod file;
/// In-memory store implementation
pub mod memory;

pub use factory::Store;
pub use file::FileStore;
pub use memory::MemoryStore;

use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// Logical keys of the persisted state layout
///
/// One key per domain plus the profile and the theme preference. Presence
/// of a domain key means "do not regenerate"; absence means "derive fresh
/// from the current profile".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// The single athlete profile
    AthleteProfile,
    /// Generated performance logs
    PerformanceLogs,
    /// Generated diet logs
    DietLogs,
    /// Generated job opportunities
    Jobs,
    /// Generated tournaments
    Tournaments,
    /// Injury history
    InjuryHistory,
    /// User-attached medical reports
    MedicalReports,
    /// Coaching gigs
    CoachingGigs,
    /// UI theme preference; unrelated to any identity-derived domain
    Theme,
}

impl StoreKey {
    /// Every identity-derived domain key
    ///
    /// This is the registration clear-list: all of these are removed when
    /// a new profile is registered so stale data from a previous identity
    /// is never served. Missing a key here is a correctness bug.
    pub const DOMAIN_KEYS: [Self; 7] = [
        Self::PerformanceLogs,
        Self::DietLogs,
        Self::Jobs,
        Self::Tournaments,
        Self::InjuryHistory,
        Self::MedicalReports,
        Self::CoachingGigs,
    ];

    /// Stable string form used as the storage key
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AthleteProfile => "athlete_profile",
            Self::PerformanceLogs => "logs_performance",
            Self::DietLogs => "logs_diet",
            Self::Jobs => "jobs",
            Self::Tournaments => "tournaments",
            Self::InjuryHistory => "logs_injury",
            Self::MedicalReports => "medical_reports",
            Self::CoachingGigs => "gigs",
            Self::Theme => "theme",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Store provider trait for pluggable backend implementations
///
/// Backends implement the raw string operations; the typed JSON layer is
/// shared. Implementations must be internally synchronized.
#[async_trait]
pub trait StoreProvider: Send + Sync {
    /// Read the raw stored text for a key
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails.
    async fn get_raw(&self, key: StoreKey) -> AppResult<Option<String>>;

    /// Write raw text under a key, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    async fn set_raw(&self, key: StoreKey, value: String) -> AppResult<()>;

    /// Remove a key; removing an absent key is not an error
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    async fn remove(&self, key: StoreKey) -> AppResult<()>;

    /// Remove every key (testing/reset)
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    async fn clear_all(&self) -> AppResult<()>;

    /// Read and decode a JSON value
    ///
    /// A malformed stored value is logged and treated as absent, so the
    /// caller regenerates rather than failing.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend read fails.
    async fn get<T>(&self, key: StoreKey) -> AppResult<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        let Some(raw) = self.get_raw(key).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(key = %key, error = %e, "Discarding malformed stored value");
                Ok(None)
            }
        }
    }

    /// Encode a value as JSON and write it under a key
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails.
    async fn set<T>(&self, key: StoreKey, value: &T) -> AppResult<()>
    where
        T: Serialize + Sync,
    {
        let raw = serde_json::to_string(value)
            .map_err(|e| AppError::serialization(e.to_string()))?;
        self.set_raw(key, raw).await
    }

    /// Remove several keys in order
    ///
    /// Not atomic: a backend failure leaves earlier keys removed and later
    /// keys in place.
    ///
    /// # Errors
    ///
    /// Returns the first backend error encountered.
    async fn remove_many(&self, keys: &[StoreKey]) -> AppResult<()> {
        for key in keys {
            self.remove(*key).await?;
        }
        Ok(())
    }
}
