// ABOUTME: Athlete intelligence module for risk analysis over training data
// ABOUTME: Deterministic injury risk scoring and band classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Athlete360

/// Injury risk heuristic over recent strain and active injuries
pub mod injury_risk;

pub use injury_risk::{predict_injury_risk, InjuryRiskAssessment, RiskAssessment, RiskBand};
