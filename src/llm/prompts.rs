// ABOUTME: Prompt builders for the assistant chat and analysis calls
// ABOUTME: System persona plus JSON-schema prompts for structured outputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Athlete360

use crate::intelligence::RiskAssessment;
use crate::models::{
    AthleteProfile, DietLog, FinancialRecord, InjuryRecord, PerformanceLog,
};

/// System persona for every assistant call
#[must_use]
pub const fn system_prompt() -> &'static str {
    "You are the Athlete360 Assistant, a concise sports-science advisor for a \
     single athlete. Answer questions about training, diet, recovery, and \
     career using the data provided. Keep answers short and practical. Never \
     give medical diagnoses; recommend a professional for anything clinical."
}

/// Prompt for the structured diet analysis call
///
/// The schema wording matches the serde shape of
/// [`crate::models::DietAnalysis`] so the JSON-mode response deserializes
/// directly.
#[must_use]
pub fn diet_analysis(profile: &AthleteProfile, logs: &[DietLog]) -> String {
    format!(
        "Analyze this athlete's daily diet.\n\
         Sport: {}. Weight: {} kg.\n\
         Diet logs: {}\n\
         Respond with a single JSON object: \
         {{\"status\": \"Optimal\" | \"Needs Improvement\" | \"Poor\", \
         \"macro_balance\": string, \
         \"recommendations\": [string, ...]}}",
        profile.sport,
        profile.weight_kg,
        to_json(logs),
    )
}

/// Prompt for the injury risk explanation call
///
/// The score and factors are already computed by the heuristic; the model
/// only narrates them.
#[must_use]
pub fn injury_risk_explanation(
    assessment: &RiskAssessment,
    logs: &[PerformanceLog],
    injuries: &[InjuryRecord],
) -> String {
    format!(
        "An injury risk model scored this athlete at {:.2} (0-1 scale) with \
         factors {:?}.\n\
         Recent performance logs: {}\n\
         Injury history: {}\n\
         In 2-3 plain sentences, explain what is driving the risk and what \
         to watch this week. Do not restate the raw numbers.",
        assessment.score,
        assessment.factors,
        to_json(logs),
        to_json(injuries),
    )
}

/// Prompt for the structured weekly training plan call
#[must_use]
pub fn training_plan(profile: &AthleteProfile) -> String {
    format!(
        "Create a 3-day training plan for a {}-year-old {} athlete \
         ({} cm, {} kg).\n\
         Respond with a single JSON array of sessions: \
         [{{\"day\": string, \"focus\": string, \"estimated_duration\": number, \
         \"drills\": [{{\"name\": string, \
         \"category\": \"Tactical\" | \"Physical\" | \"Technical\", \
         \"duration_min\": number, \"reps\": string or null, \
         \"instructions\": string}}, ...]}}, ...]",
        profile.age, profile.sport, profile.height_cm, profile.weight_kg,
    )
}

/// Prompt for the financial advice call
#[must_use]
pub fn financial_advice(records: &[FinancialRecord]) -> String {
    format!(
        "These are an athlete's recent financial records: {}\n\
         In 2-3 sentences, give practical guidance on budgeting and \
         sponsorship income for the next quarter.",
        to_json(records),
    )
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "[]".to_owned())
}
