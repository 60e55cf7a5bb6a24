// ABOUTME: Deterministic injury risk heuristic over strain and injury status
// ABOUTME: Combines recent training strain with active injury count into a score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Athlete360

//! # Injury Risk Scoring
//!
//! A pure heuristic over the most recent performance logs and the injury
//! history. No side effects, no persisted state; the score formula and the
//! band thresholds are a fixed contract:
//!
//! - no logs: score 0.1 with a single "Insufficient Data" factor
//! - otherwise: 0.2 baseline, plus 0.4 if the average strain of the last
//!   5 sessions exceeds 8 (0.1 otherwise), plus 0.25 per injury that is
//!   not yet resolved, capped at 0.99
//! - bands: above 0.7 is High, above 0.4 is Moderate, anything else Low

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::risk;
use crate::models::{InjuryRecord, InjuryStatus, PerformanceLog};

/// Factor reported when no performance data exists
const FACTOR_INSUFFICIENT_DATA: &str = "Insufficient Data";
/// Factor for average strain above the reporting threshold
const FACTOR_HIGH_STRAIN: &str = "High Recent Strain";
/// Factor for average strain at or below the reporting threshold
const FACTOR_MODERATE_LOAD: &str = "Moderate Training Load";
/// Factor when at least one injury is unresolved
const FACTOR_ACTIVE_RECOVERY: &str = "Active Recovery in Progress";
/// Factor when every injury is resolved
const FACTOR_NO_ACTIVE_INJURIES: &str = "No Active Injuries";
/// Static monotony flag, always reported
const FACTOR_LOAD_MONOTONY: &str = "Load Monotony Detected";

/// Risk band derived from the numeric score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskBand {
    /// Score 0.4 and below
    Low,
    /// Score above 0.4, up to 0.7
    Moderate,
    /// Score above 0.7
    High,
}

impl RiskBand {
    /// Classify a score into its band
    ///
    /// Boundary values band downward: exactly 0.7 is Moderate, exactly
    /// 0.4 is Low.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score > risk::HIGH_BAND_THRESHOLD {
            Self::High
        } else if score > risk::MODERATE_BAND_THRESHOLD {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Band name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of the risk heuristic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Risk score in [0.1, 0.99]
    pub score: f64,
    /// Human-readable contributing factors
    pub factors: Vec<String>,
}

impl RiskAssessment {
    /// Band of this assessment's score
    #[must_use]
    pub fn band(&self) -> RiskBand {
        RiskBand::from_score(self.score)
    }
}

/// Risk assessment enriched with a generated explanation
///
/// Produced by the assistant's injury-risk analysis call; the score and
/// factors always come from the heuristic, only the explanation text is
/// generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjuryRiskAssessment {
    /// Heuristic risk score
    pub risk_score: f64,
    /// Band of the score
    pub risk_level: RiskBand,
    /// Heuristic contributing factors
    pub factors: Vec<String>,
    /// Narrative explanation of the assessment
    pub explanation: String,
}

/// Score injury risk from performance logs and injury history
///
/// Takes the suffix of the chronologically ordered log sequence (the most
/// recent 5 sessions, or all of them if fewer exist). Pure and
/// synchronous; the service wraps it in an async boundary.
#[must_use]
pub fn predict_injury_risk(
    logs: &[PerformanceLog],
    injuries: &[InjuryRecord],
) -> RiskAssessment {
    let recent = &logs[logs.len().saturating_sub(risk::RECENT_WINDOW)..];
    if recent.is_empty() {
        return RiskAssessment {
            score: risk::INSUFFICIENT_DATA_SCORE,
            factors: vec![FACTOR_INSUFFICIENT_DATA.to_owned()],
        };
    }

    let avg_strain =
        recent.iter().map(|log| f64::from(log.strain)).sum::<f64>() / recent.len() as f64;

    let strain_component = if avg_strain > risk::HIGH_STRAIN_THRESHOLD {
        risk::HIGH_STRAIN_COMPONENT
    } else {
        risk::MODERATE_STRAIN_COMPONENT
    };

    let active_injuries = injuries
        .iter()
        .filter(|injury| injury.status != InjuryStatus::Resolved)
        .count();

    let score = (active_injuries as f64)
        .mul_add(risk::ACTIVE_INJURY_COMPONENT, risk::BASELINE + strain_component)
        .min(risk::SCORE_CAP);

    let factors = vec![
        if avg_strain > risk::STRAIN_FACTOR_THRESHOLD {
            FACTOR_HIGH_STRAIN.to_owned()
        } else {
            FACTOR_MODERATE_LOAD.to_owned()
        },
        if active_injuries > 0 {
            FACTOR_ACTIVE_RECOVERY.to_owned()
        } else {
            FACTOR_NO_ACTIVE_INJURIES.to_owned()
        },
        FACTOR_LOAD_MONOTONY.to_owned(),
    ];

    RiskAssessment { score, factors }
}
