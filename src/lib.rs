// ABOUTME: Main library entry point for the Athlete360 session data service
// ABOUTME: Local-first athlete management backend with synthetic data generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Athlete360

#![deny(unsafe_code)]

//! # Athlete360 Session Data Service
//!
//! A local-first backend for athlete management dashboards. All athlete data
//! lives in a persistent string-keyed store with JSON values; domain
//! collections (performance logs, diet logs, jobs, tournaments, injury
//! history, coaching gigs) are synthesized from the registered athlete
//! profile on first read and cached until the next registration.
//!
//! ## Architecture
//!
//! - **Store**: pluggable key-value backends (in-memory, JSON file) behind
//!   a single provider trait
//! - **Generators**: pure functions deriving plausible per-domain records
//!   from the athlete profile
//! - **Service**: per-domain async accessors with generate-on-miss caching
//!   and explicit cache invalidation on registration
//! - **Intelligence**: deterministic injury risk scoring over recent
//!   training strain and active injuries
//! - **Assistant**: Gemini-backed chat and analysis calls that degrade to
//!   canned fallbacks on any failure
//!
//! ## Example
//!
//! ```rust,no_run
//! use athlete360::service::SessionService;
//!
//! #[tokio::main]
//! async fn main() -> athlete360::errors::AppResult<()> {
//!     let service = SessionService::in_memory();
//!     let logs = service.performance_logs().await?;
//!     let risk = service.predict_injury_risk().await?;
//!     println!("{} logs, risk score {:.2}", logs.len(), risk.score);
//!     Ok(())
//! }
//! ```

/// AI assistant service with fallback-on-failure analysis calls
pub mod assistant;

/// Environment-based service configuration
pub mod config;

/// Application constants and configuration defaults
pub mod constants;

/// Unified error handling system with standard error codes
pub mod errors;

/// Synthetic per-domain data generators seeded from the athlete profile
pub mod generators;

/// Injury risk scoring and assessment types
pub mod intelligence;

/// LLM provider abstraction and the Gemini client
pub mod llm;

/// Production logging and structured output
pub mod logging;

/// Common data models for athlete data
pub mod models;

/// Session data service: domain accessors, auth, and registration
pub mod service;

/// Key-value store abstraction with pluggable backends
pub mod store;
