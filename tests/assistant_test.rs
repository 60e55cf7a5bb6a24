// ABOUTME: Tests for the assistant service fallback contract
// ABOUTME: Uses a scripted fake provider instead of a live API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Athlete360

use async_trait::async_trait;
use athlete360::assistant::AssistantService;
use athlete360::errors::{AppError, AppResult};
use athlete360::intelligence::{predict_injury_risk, RiskBand};
use athlete360::llm::{ChatMessage, ChatRequest, ChatResponse, LlmProvider};
use athlete360::models::{AthleteProfile, DietStatus, UserRole};
use uuid::Uuid;

/// Scripted provider standing in for the remote collaborator
struct FakeProvider {
    mode: Mode,
}

enum Mode {
    Text(&'static str),
    Empty,
    Fail,
}

#[async_trait]
impl LlmProvider for FakeProvider {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn default_model(&self) -> &str {
        "fake-model"
    }

    async fn complete(&self, _request: &ChatRequest) -> AppResult<ChatResponse> {
        match self.mode {
            Mode::Text(text) => Ok(ChatResponse {
                content: text.to_string(),
                model: "fake-model".to_string(),
                finish_reason: Some("stop".to_string()),
            }),
            Mode::Empty => Ok(ChatResponse {
                content: String::new(),
                model: "fake-model".to_string(),
                finish_reason: Some("stop".to_string()),
            }),
            Mode::Fail => Err(AppError::external("provider unreachable")),
        }
    }
}

fn assistant(mode: Mode) -> AssistantService<FakeProvider> {
    AssistantService::new(FakeProvider { mode })
}

fn test_profile() -> AthleteProfile {
    AthleteProfile {
        id: Uuid::new_v4(),
        email: "athlete@example.com".to_string(),
        password_hash: String::new(),
        name: "Test Athlete".to_string(),
        sport: "Tennis".to_string(),
        age: 24,
        height_cm: 180.0,
        weight_kg: 72.0,
        role: UserRole::Athlete,
        avatar_url: String::new(),
        bio: None,
        medical: None,
        device_metrics: None,
    }
}

const CHAT_FALLBACK: &str = "I'm focusing on the game right now, ask me later.";

#[tokio::test]
async fn test_chat_returns_completion_text() {
    let assistant = assistant(Mode::Text("Focus on recovery today."));
    let history = vec![ChatMessage::assistant("Hi! How can I help?")];
    let reply = assistant.chat(&history, "Should I train today?").await;
    assert_eq!(reply, "Focus on recovery today.");
}

#[tokio::test]
async fn test_chat_falls_back_on_provider_error() {
    let assistant = assistant(Mode::Fail);
    let reply = assistant.chat(&[], "Should I train today?").await;
    assert_eq!(reply, CHAT_FALLBACK);
}

#[tokio::test]
async fn test_chat_falls_back_on_empty_completion() {
    let assistant = assistant(Mode::Empty);
    let reply = assistant.chat(&[], "Should I train today?").await;
    assert_eq!(reply, CHAT_FALLBACK);
}

#[tokio::test]
async fn test_diet_analysis_parses_structured_output() {
    let assistant = assistant(Mode::Text(
        r#"{"status": "Optimal", "macro_balance": "Balanced", "recommendations": ["Keep it up"]}"#,
    ));
    let analysis = assistant.analyze_diet(&test_profile(), &[]).await;
    assert_eq!(analysis.status, DietStatus::Optimal);
    assert_eq!(analysis.macro_balance, "Balanced");
    assert_eq!(analysis.recommendations, vec!["Keep it up".to_string()]);
}

#[tokio::test]
async fn test_diet_analysis_strips_code_fences() {
    let assistant = assistant(Mode::Text(
        "```json\n{\"status\": \"Poor\", \"macro_balance\": \"Low protein\", \"recommendations\": []}\n```",
    ));
    let analysis = assistant.analyze_diet(&test_profile(), &[]).await;
    assert_eq!(analysis.status, DietStatus::Poor);
}

#[tokio::test]
async fn test_diet_analysis_falls_back_on_malformed_json() {
    let assistant = assistant(Mode::Text("sorry, here is prose instead of JSON"));
    let analysis = assistant.analyze_diet(&test_profile(), &[]).await;
    assert_eq!(analysis.status, DietStatus::NeedsImprovement);
    assert_eq!(analysis.macro_balance, "Unavailable");
}

#[tokio::test]
async fn test_diet_analysis_falls_back_on_provider_error() {
    let assistant = assistant(Mode::Fail);
    let analysis = assistant.analyze_diet(&test_profile(), &[]).await;
    assert_eq!(analysis.status, DietStatus::NeedsImprovement);
}

#[tokio::test]
async fn test_risk_explanation_preserves_heuristic_values() {
    let assistant = assistant(Mode::Text("Strain has been high all week."));
    let heuristic = predict_injury_risk(&[], &[]);

    let assessment = assistant.explain_injury_risk(&heuristic, &[], &[]).await;

    assert!((assessment.risk_score - heuristic.score).abs() < 1e-9);
    assert_eq!(assessment.risk_level, RiskBand::Low);
    assert_eq!(assessment.factors, heuristic.factors);
    assert_eq!(assessment.explanation, "Strain has been high all week.");
}

#[tokio::test]
async fn test_risk_explanation_falls_back_but_keeps_score() {
    let assistant = assistant(Mode::Fail);
    let heuristic = predict_injury_risk(&[], &[]);

    let assessment = assistant.explain_injury_risk(&heuristic, &[], &[]).await;

    assert!((assessment.risk_score - 0.1).abs() < 1e-9);
    assert!(!assessment.explanation.is_empty());
    assert_ne!(assessment.explanation, "Strain has been high all week.");
}

#[tokio::test]
async fn test_training_plan_parses_structured_output() {
    let assistant = assistant(Mode::Text(
        r#"[{"day": "Monday", "focus": "Footwork", "estimated_duration": 60,
             "drills": [{"name": "Ladder drills", "category": "Technical",
                         "duration_min": 20, "reps": "3x5", "instructions": "Stay light on your feet."}]}]"#,
    ));
    let plan = assistant.generate_training_plan(&test_profile()).await;
    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].day, "Monday");
    assert_eq!(plan[0].drills[0].name, "Ladder drills");
}

#[tokio::test]
async fn test_training_plan_falls_back_on_failure() {
    let assistant = assistant(Mode::Fail);
    let plan = assistant.generate_training_plan(&test_profile()).await;
    assert!(!plan.is_empty(), "fallback plan must not be empty");
    assert!(plan[0].focus.contains("Tennis"));
}

#[tokio::test]
async fn test_financial_advice_falls_back_on_failure() {
    let assistant = assistant(Mode::Fail);
    let advice = assistant.financial_advice(&[]).await;
    assert!(advice.contains("temporarily unavailable"));
}
