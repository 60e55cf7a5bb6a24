// ABOUTME: Environment-based configuration for the session data service
// ABOUTME: Store location, latency simulation, and LLM collaborator settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Athlete360

//! Environment-only configuration, following the convention that every
//! deployment-specific value comes from an environment variable with a
//! sensible default.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::assistant::DEFAULT_TIMEOUT_SECS;

/// Environment variable selecting the data file location
pub const DATA_PATH_ENV: &str = "ATHLETE360_DATA_PATH";

/// Environment variable toggling simulated network latency
pub const SIMULATE_LATENCY_ENV: &str = "ATHLETE360_SIMULATE_LATENCY";

/// Environment variable for the LLM request timeout in seconds
pub const LLM_TIMEOUT_ENV: &str = "LLM_TIMEOUT_SECS";

/// Service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Apply per-operation artificial delays to model a remote backend
    pub simulate_latency: bool,
    /// Location of the persistent JSON store file
    pub data_path: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            simulate_latency: true,
            data_path: default_data_path(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            simulate_latency: env::var(SIMULATE_LATENCY_ENV)
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            data_path: env::var(DATA_PATH_ENV).map_or_else(|_| default_data_path(), PathBuf::from),
        }
    }

    /// Configuration with latency simulation disabled (tests, demos)
    #[must_use]
    pub fn without_latency() -> Self {
        Self {
            simulate_latency: false,
            ..Self::default()
        }
    }
}

/// Default location of the persistent store file
///
/// Falls back to `./data/athlete360.json` when the platform data directory
/// cannot be determined.
#[must_use]
pub fn default_data_path() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from("./data/athlete360.json"),
        |dir| dir.join("athlete360").join("athlete360.json"),
    )
}

/// Request timeout for LLM collaborator calls
#[must_use]
pub fn llm_timeout() -> Duration {
    let secs = env::var(LLM_TIMEOUT_ENV)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}
