// ABOUTME: AI assistant service wrapping an LLM provider with fallbacks
// ABOUTME: Chat plus structured diet, risk, training, and finance analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Athlete360

//! # Assistant Service
//!
//! The one true external I/O boundary of the system. Every call here is
//! fallible and potentially slow; the contract with callers is that no
//! failure ever propagates. A provider error, a timeout, an empty
//! completion, or malformed structured output all degrade to a fixed
//! fallback value, logged at warn level.
//!
//! Calls are bounded by the provider's request timeout and are not
//! retried.

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::constants::assistant as fallbacks;
use crate::intelligence::{InjuryRiskAssessment, RiskAssessment};
use crate::llm::{prompts, ChatMessage, ChatRequest, LlmProvider};
use crate::models::{
    AthleteProfile, DietAnalysis, DietLog, DietStatus, DrillCategory, FinancialRecord,
    InjuryRecord, PerformanceLog, TrainingDrill, TrainingSession,
};

/// Assistant service over a pluggable LLM provider
pub struct AssistantService<P: LlmProvider> {
    provider: P,
}

impl<P: LlmProvider> AssistantService<P> {
    /// Create an assistant over the given provider
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Chat with the assistant
    ///
    /// Sends the conversation history plus the new user message under the
    /// assistant persona. Returns the completion text, or the canned
    /// fallback when the call fails or comes back empty.
    pub async fn chat(&self, history: &[ChatMessage], message: &str) -> String {
        let mut messages = vec![ChatMessage::system(prompts::system_prompt())];
        messages.extend_from_slice(history);
        messages.push(ChatMessage::user(message));

        self.text_or(ChatRequest::new(messages), fallbacks::CHAT_FALLBACK)
            .await
    }

    /// Analyze the athlete's diet against their training load
    ///
    /// Structured JSON-mode call; malformed output falls back to a neutral
    /// analysis.
    pub async fn analyze_diet(
        &self,
        profile: &AthleteProfile,
        logs: &[DietLog],
    ) -> DietAnalysis {
        let prompt = prompts::diet_analysis(profile, logs);
        self.structured(prompt)
            .await
            .unwrap_or_else(fallback_diet_analysis)
    }

    /// Narrate an injury risk assessment
    ///
    /// The score, band, and factors always come from the deterministic
    /// heuristic; only the explanation text is generated.
    pub async fn explain_injury_risk(
        &self,
        assessment: &RiskAssessment,
        logs: &[PerformanceLog],
        injuries: &[InjuryRecord],
    ) -> InjuryRiskAssessment {
        let prompt = prompts::injury_risk_explanation(assessment, logs, injuries);
        let request = ChatRequest::new(vec![
            ChatMessage::system(prompts::system_prompt()),
            ChatMessage::user(prompt),
        ]);
        let explanation = self
            .text_or(request, fallbacks::RISK_EXPLANATION_FALLBACK)
            .await;

        InjuryRiskAssessment {
            risk_score: assessment.score,
            risk_level: assessment.band(),
            factors: assessment.factors.clone(),
            explanation,
        }
    }

    /// Generate a short training plan for the profile
    ///
    /// Structured JSON-mode call; falls back to a generic plan.
    pub async fn generate_training_plan(&self, profile: &AthleteProfile) -> Vec<TrainingSession> {
        let prompt = prompts::training_plan(profile);
        self.structured(prompt)
            .await
            .unwrap_or_else(|| fallback_training_plan(&profile.sport))
    }

    /// Financial guidance over the athlete's ledger
    pub async fn financial_advice(&self, records: &[FinancialRecord]) -> String {
        let request = ChatRequest::new(vec![
            ChatMessage::system(prompts::system_prompt()),
            ChatMessage::user(prompts::financial_advice(records)),
        ]);
        self.text_or(request, fallbacks::FINANCIAL_ADVICE_FALLBACK)
            .await
    }

    /// Run a completion, substituting the fallback on failure or empty text
    async fn text_or(&self, request: ChatRequest, fallback: &str) -> String {
        match self.provider.complete(&request).await {
            Ok(response) if !response.content.trim().is_empty() => response.content,
            Ok(_) => {
                warn!(provider = self.provider.name(), "Empty completion, using fallback");
                fallback.to_owned()
            }
            Err(e) => {
                warn!(
                    provider = self.provider.name(),
                    error = %e,
                    "Completion failed, using fallback"
                );
                fallback.to_owned()
            }
        }
    }

    /// Run a JSON-mode completion and parse the result
    ///
    /// Returns `None` on any failure so the caller substitutes its
    /// fallback value.
    async fn structured<T: DeserializeOwned>(&self, prompt: String) -> Option<T> {
        let request = ChatRequest::new(vec![
            ChatMessage::system(prompts::system_prompt()),
            ChatMessage::user(prompt),
        ])
        .with_json_response();

        match self.provider.complete(&request).await {
            Ok(response) => {
                let payload = strip_code_fences(&response.content);
                match serde_json::from_str(payload) {
                    Ok(value) => Some(value),
                    Err(e) => {
                        warn!(
                            provider = self.provider.name(),
                            error = %e,
                            "Structured completion did not parse, using fallback"
                        );
                        None
                    }
                }
            }
            Err(e) => {
                warn!(
                    provider = self.provider.name(),
                    error = %e,
                    "Structured completion failed, using fallback"
                );
                None
            }
        }
    }
}

/// Remove a markdown code fence if the model wrapped its JSON in one
fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map_or(trimmed, str::trim)
}

/// Neutral diet analysis served when the structured call fails
fn fallback_diet_analysis() -> DietAnalysis {
    DietAnalysis {
        status: DietStatus::NeedsImprovement,
        macro_balance: "Unavailable".to_owned(),
        recommendations: vec![
            "Analysis is temporarily unavailable. Keep following your current meal plan."
                .to_owned(),
        ],
    }
}

/// Generic plan served when the structured call fails
fn fallback_training_plan(sport: &str) -> Vec<TrainingSession> {
    vec![TrainingSession {
        day: "Today".to_owned(),
        focus: format!("General {sport} conditioning"),
        drills: vec![TrainingDrill {
            name: "Steady-state conditioning".to_owned(),
            category: DrillCategory::Physical,
            duration_min: 45,
            reps: None,
            instructions: "Moderate effort; keep strain below recent peaks.".to_owned(),
        }],
        estimated_duration: 45,
    }]
}
