// ABOUTME: Session data service with generate-on-miss caching per domain
// ABOUTME: Auth, registration with cache purge, and profile shallow merge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Athlete360

//! # Session Data Service
//!
//! One async accessor per data domain, all following the same policy: read
//! the domain's store key; if present, return the parsed value as-is; if
//! absent, derive fresh records from the current profile (or the seed
//! profile), write them back, and return them.
//!
//! Generated data is cached until the next registration. A profile update
//! does NOT retroactively regenerate already-cached domains; only
//! [`SessionService::register`] clears the domain keys. This
//! generate-once policy is a deliberate contract, not an oversight.
//!
//! All accessors are asynchronous to model a remote-call boundary even
//! though the store is local; the optional simulated latency carries no
//! ordering or cancellation semantics.

use rand::thread_rng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::ServiceConfig;
use crate::constants::latency;
use crate::errors::{AppError, AppResult};
use crate::generators;
use crate::intelligence::{predict_injury_risk, RiskAssessment};
use crate::models::{
    AthleteProfile, CareerGoal, CoachingGig, DietLog, FinancialRecord, InjuryRecord,
    JobOpportunity, MedicalReport, PerformanceLog, ProfileUpdate, Registration, Tournament,
};
use crate::store::{Store, StoreKey, StoreProvider};

/// Session data service over a key-value store
///
/// Owns the generate-or-read policy for every domain and the cache
/// invalidation rule for registration, so both live in one place.
pub struct SessionService {
    store: Store,
    config: ServiceConfig,
}

impl SessionService {
    /// Create a service over an explicit store and configuration
    #[must_use]
    pub const fn new(store: Store, config: ServiceConfig) -> Self {
        Self { store, config }
    }

    /// Ephemeral service with an in-memory store and no simulated latency
    ///
    /// Intended for tests and demos.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Store::memory(), ServiceConfig::without_latency())
    }

    /// Service configured from environment variables with a file-backed store
    ///
    /// # Errors
    ///
    /// Returns an error if an existing store document cannot be read.
    pub async fn from_env() -> AppResult<Self> {
        let config = ServiceConfig::from_env();
        let store = Store::file(config.data_path.clone()).await?;
        Ok(Self::new(store, config))
    }

    /// Access the underlying store
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    async fn simulate(&self, millis: u64) {
        if self.config.simulate_latency {
            sleep(Duration::from_millis(millis)).await;
        }
    }

    /// Stored profile, or the seed profile when none is registered yet
    ///
    /// A seed served on miss is not written back; the store only ever
    /// holds explicitly registered or updated profiles.
    async fn profile_or_seed(&self) -> AppResult<AthleteProfile> {
        Ok(self
            .store
            .get(StoreKey::AthleteProfile)
            .await?
            .unwrap_or_else(|| generators::seed_profile().clone()))
    }

    /// Read-through for a generated domain: cached value or regenerate
    async fn read_through<T, F>(&self, key: StoreKey, generate: F) -> AppResult<Vec<T>>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce(&AthleteProfile) -> Vec<T> + Send,
    {
        if let Some(cached) = self.store.get(key).await? {
            return Ok(cached);
        }

        let profile = self.profile_or_seed().await?;
        let fresh = generate(&profile);
        debug!(key = %key, records = fresh.len(), "Cache miss, regenerated domain data");
        self.store.set(key, &fresh).await?;
        Ok(fresh)
    }

    // ========================================
    // Auth
    // ========================================

    /// Check credentials against the stored (or seed) profile
    ///
    /// Email is compared by exact string equality, the password against
    /// the stored bcrypt hash. Until the first registration, the seed
    /// profile's demo credentials are the effective credentials.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ErrorCode::AuthInvalid`] on any mismatch.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AthleteProfile> {
        self.simulate(latency::LOGIN_MS).await;
        let profile = self.profile_or_seed().await?;

        let password_ok =
            bcrypt::verify(password, &profile.password_hash).unwrap_or(false);
        if profile.email == email && password_ok {
            Ok(profile)
        } else {
            Err(AppError::auth_invalid("invalid credentials"))
        }
    }

    /// Register a new athlete, replacing the stored profile
    ///
    /// Writes the profile (password hashed, never stored in cleartext),
    /// then removes every identity-derived domain key so the next read of
    /// any domain regenerates against the new profile. The theme
    /// preference is not identity-derived and survives.
    ///
    /// # Errors
    ///
    /// Returns an error if hashing or a store write fails. The clear is
    /// not atomic: a failure mid-way leaves some domain keys removed.
    pub async fn register(&self, registration: Registration) -> AppResult<AthleteProfile> {
        self.simulate(latency::REGISTER_MS).await;

        let password_hash = bcrypt::hash(&registration.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::internal("password hashing failed").with_source(e))?;

        let profile = AthleteProfile {
            id: Uuid::new_v4(),
            email: registration.email,
            password_hash,
            name: registration.name,
            sport: registration.sport,
            age: registration.age,
            height_cm: registration.height_cm,
            weight_kg: registration.weight_kg,
            role: registration.role,
            avatar_url: registration.avatar_url,
            bio: registration.bio,
            medical: registration.medical,
            device_metrics: registration.device_metrics,
        };

        self.store.set(StoreKey::AthleteProfile, &profile).await?;
        self.store.remove_many(&StoreKey::DOMAIN_KEYS).await?;

        info!(
            athlete_id = %profile.id,
            sport = %profile.sport,
            "Registered new athlete, domain caches purged"
        );
        Ok(profile)
    }

    // ========================================
    // Profile
    // ========================================

    /// Current profile (stored or seed)
    pub async fn profile(&self) -> AppResult<AthleteProfile> {
        self.simulate(latency::PROFILE_MS).await;
        self.profile_or_seed().await
    }

    /// Shallow-merge a partial update into the profile and store the result
    ///
    /// Already-cached domain data is NOT regenerated after an update; only
    /// registration invalidates domain caches.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    pub async fn update_profile(&self, update: ProfileUpdate) -> AppResult<AthleteProfile> {
        let current = self.profile_or_seed().await?;
        let merged = update.apply_to(current);
        self.store.set(StoreKey::AthleteProfile, &merged).await?;
        Ok(merged)
    }

    // ========================================
    // Generated Domains
    // ========================================

    /// Performance logs: 7 days ending today, generated once per profile
    pub async fn performance_logs(&self) -> AppResult<Vec<PerformanceLog>> {
        self.simulate(latency::DOMAIN_FETCH_MS).await;
        self.read_through(StoreKey::PerformanceLogs, |profile| {
            generators::generate_performance_logs(profile, &mut thread_rng())
        })
        .await
    }

    /// Diet logs: one record per meal slot, derived from profile weight
    pub async fn diet_logs(&self) -> AppResult<Vec<DietLog>> {
        self.simulate(latency::DOMAIN_FETCH_MS).await;
        self.read_through(StoreKey::DietLogs, generators::generate_diet_logs)
            .await
    }

    /// Job opportunities for the profile's sport
    pub async fn jobs(&self) -> AppResult<Vec<JobOpportunity>> {
        self.simulate(latency::DOMAIN_FETCH_MS).await;
        self.read_through(StoreKey::Jobs, generators::generate_jobs)
            .await
    }

    /// Tournaments for the profile's sport
    pub async fn tournaments(&self) -> AppResult<Vec<Tournament>> {
        self.simulate(latency::DOMAIN_FETCH_MS).await;
        self.read_through(StoreKey::Tournaments, generators::generate_tournaments)
            .await
    }

    /// Injury history, seeded with one resolved record on first read
    pub async fn injury_history(&self) -> AppResult<Vec<InjuryRecord>> {
        self.simulate(latency::DOMAIN_FETCH_MS).await;
        self.read_through(StoreKey::InjuryHistory, |_| generators::seed_injury_history())
            .await
    }

    /// Coaching gigs, seeded with the starter list on first read
    pub async fn coaching_gigs(&self) -> AppResult<Vec<CoachingGig>> {
        self.read_through(StoreKey::CoachingGigs, |_| generators::seed_coaching_gigs())
            .await
    }

    // ========================================
    // Medical Reports (append-only)
    // ========================================

    /// Stored medical reports; empty when none exist
    ///
    /// An empty result is not cached: the collection only materializes in
    /// the store once a report is added.
    pub async fn medical_reports(&self) -> AppResult<Vec<MedicalReport>> {
        Ok(self
            .store
            .get(StoreKey::MedicalReports)
            .await?
            .unwrap_or_default())
    }

    /// Append a medical report
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    pub async fn add_medical_report(&self, report: MedicalReport) -> AppResult<()> {
        let mut reports = self.medical_reports().await?;
        reports.push(report);
        self.store.set(StoreKey::MedicalReports, &reports).await
    }

    // ========================================
    // Static Collections
    // ========================================

    /// Financial ledger; static, never persisted
    pub async fn financial_records(&self) -> AppResult<Vec<FinancialRecord>> {
        self.simulate(latency::STATIC_FETCH_MS).await;
        Ok(generators::default_financial_records())
    }

    /// Career goals; static, never persisted
    pub async fn career_goals(&self) -> AppResult<Vec<CareerGoal>> {
        self.simulate(latency::STATIC_FETCH_MS).await;
        Ok(generators::default_career_goals())
    }

    // ========================================
    // Risk
    // ========================================

    /// Score injury risk from the current performance logs and injury history
    ///
    /// Async wrapper over the pure heuristic in
    /// [`crate::intelligence::injury_risk`]; reads go through the regular
    /// domain accessors, so missing domains generate first.
    pub async fn predict_injury_risk(&self) -> AppResult<RiskAssessment> {
        let logs = self.performance_logs().await?;
        let injuries = self.injury_history().await?;
        Ok(predict_injury_risk(&logs, &injuries))
    }

    // ========================================
    // UI Preferences
    // ========================================

    /// Stored theme preference, if any
    pub async fn theme_preference(&self) -> AppResult<Option<String>> {
        self.store.get(StoreKey::Theme).await
    }

    /// Persist the theme preference
    ///
    /// Shares the store with the data domains but is not identity-derived;
    /// registration leaves it untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    pub async fn set_theme_preference(&self, theme: &str) -> AppResult<()> {
        self.store.set(StoreKey::Theme, &theme).await
    }
}
