// ABOUTME: System-wide constants and configuration defaults for Athlete360
// ABOUTME: Seed profile values, latency table, generator and risk parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Athlete360

//! # Constants Module
//!
//! Hardcoded constants grouped by concern. Environment-driven values live in
//! [`crate::config`]; everything here is a fixed part of the data contract.

/// Seed profile values used when no athlete has registered yet
pub mod seed {
    /// Demo account email, valid until the first registration
    pub const DEMO_EMAIL: &str = "demo@athlete360.com";
    /// Demo account password, valid until the first registration
    pub const DEMO_PASSWORD: &str = "password";
    /// Demo athlete display name
    pub const DEMO_NAME: &str = "Rohan Gupta";
    /// Demo athlete sport (drives the sprint performance generator)
    pub const DEMO_SPORT: &str = "Athletics (Sprints)";
    /// Demo athlete avatar
    pub const DEMO_AVATAR_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=Felix";
}

/// Simulated network latency per operation class, in milliseconds
///
/// Models the remote-call boundary of a real backend. Applied only when
/// latency simulation is enabled in the service configuration; has no
/// ordering effect on other operations.
pub mod latency {
    /// Login credential check
    pub const LOGIN_MS: u64 = 600;
    /// Registration (profile write + cache purge)
    pub const REGISTER_MS: u64 = 800;
    /// Profile read
    pub const PROFILE_MS: u64 = 200;
    /// Generated-domain fetch (performance, diet, jobs, tournaments, injuries)
    pub const DOMAIN_FETCH_MS: u64 = 300;
    /// Static-collection fetch (finance, career goals)
    pub const STATIC_FETCH_MS: u64 = 500;
}

/// Synthetic data generation parameters
pub mod generation {
    /// Total variance band around the base value (base ± half of this fraction)
    pub const VARIANCE_FRACTION: f64 = 0.15;
    /// Physical lower bound for generated 100 m sprint times, in seconds
    pub const SPRINT_FLOOR_SECS: f64 = 9.5;
    /// Inclusive lower bound for training strain
    pub const STRAIN_MIN: u8 = 6;
    /// Inclusive upper bound for training strain
    pub const STRAIN_MAX: u8 = 10;
    /// Base session duration in minutes; jitter is added on top
    pub const BASE_DURATION_MIN: u32 = 45;
    /// Exclusive upper bound of the duration jitter in minutes
    pub const DURATION_JITTER_MIN: u32 = 60;
    /// Number of performance log records generated per profile
    pub const PERFORMANCE_DAYS: usize = 7;
    /// Fallback body weight when the profile carries none, in kilograms
    pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
    /// Maintenance calories per kilogram of body weight
    pub const CALORIES_PER_KG: f64 = 30.0;
    /// Daily caloric surplus for athletes, in kilocalories
    pub const CALORIE_SURPLUS: f64 = 300.0;
    /// Daily protein target per kilogram of body weight, in grams
    pub const PROTEIN_PER_KG: f64 = 0.5;
}

/// Injury risk scoring parameters
///
/// The score formula and the band thresholds are a testable contract; see
/// [`crate::intelligence::injury_risk`].
pub mod risk {
    /// Number of most recent performance logs considered
    pub const RECENT_WINDOW: usize = 5;
    /// Score returned when no performance logs are available
    pub const INSUFFICIENT_DATA_SCORE: f64 = 0.1;
    /// Baseline risk component
    pub const BASELINE: f64 = 0.2;
    /// Average strain above which the high strain component applies
    pub const HIGH_STRAIN_THRESHOLD: f64 = 8.0;
    /// Risk component for high average strain
    pub const HIGH_STRAIN_COMPONENT: f64 = 0.4;
    /// Risk component for moderate average strain
    pub const MODERATE_STRAIN_COMPONENT: f64 = 0.1;
    /// Risk added per injury that is not yet resolved
    pub const ACTIVE_INJURY_COMPONENT: f64 = 0.25;
    /// Upper cap on the total risk score
    pub const SCORE_CAP: f64 = 0.99;
    /// Average strain above which the "High Recent Strain" factor is reported
    pub const STRAIN_FACTOR_THRESHOLD: f64 = 7.5;
    /// Scores above this band as High
    pub const HIGH_BAND_THRESHOLD: f64 = 0.7;
    /// Scores above this (and not High) band as Moderate
    pub const MODERATE_BAND_THRESHOLD: f64 = 0.4;
}

/// Assistant collaborator defaults
pub mod assistant {
    /// Canned reply when the chat completion fails or comes back empty
    pub const CHAT_FALLBACK: &str = "I'm focusing on the game right now, ask me later.";
    /// Fallback explanation for the injury risk analysis call
    pub const RISK_EXPLANATION_FALLBACK: &str =
        "Risk assessment is based on your recent training strain and active injuries. \
         A detailed explanation is temporarily unavailable.";
    /// Fallback financial guidance when the advice call fails
    pub const FINANCIAL_ADVICE_FALLBACK: &str =
        "Financial guidance is temporarily unavailable. Keep tracking income and expenses \
         and revisit your sponsorship goals next week.";
    /// Default request timeout for LLM calls, in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
}
