// ABOUTME: Google Gemini LLM provider implementation over the Generative AI API
// ABOUTME: Plain and JSON-mode completions with timeout-bounded requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Athlete360

//! # Gemini Provider
//!
//! Implementation of [`LlmProvider`] for Google's Gemini models.
//!
//! ## Configuration
//!
//! - `GEMINI_API_KEY` (required): API key from Google AI Studio
//! - `GEMINI_MODEL` (optional): default model override
//! - `LLM_TIMEOUT_SECS` (optional): per-request timeout, default 30
//!
//! Requests are not retried; a timeout or error response surfaces to the
//! assistant layer, which substitutes its fallback.

use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::{ChatRequest, ChatResponse, LlmProvider, MessageRole};
use crate::config::llm_timeout;
use crate::errors::{AppError, AppResult};

/// Environment variable for the Gemini API key
const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable for the default model override
const GEMINI_MODEL_ENV: &str = "GEMINI_MODEL";

/// Default model to use
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Base URL for the Gemini API
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Gemini API request structure
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

/// Content structure for the Gemini API
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<ContentPart>,
}

/// Text part of a content block
#[derive(Debug, Serialize, Deserialize)]
struct ContentPart {
    text: String,
}

/// Generation configuration
#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(rename = "responseMimeType", skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
}

/// Gemini API response structure
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<GeminiError>,
}

/// Response candidate
#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<GeminiContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

/// API error response from Gemini
#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Google Gemini LLM provider
pub struct GeminiProvider {
    api_key: String,
    client: Client,
    default_model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider with an API key
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_key: impl Into<String>) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(llm_timeout())
            .build()
            .map_err(|e| AppError::config("failed to build HTTP client").with_source(e))?;

        Ok(Self {
            api_key: api_key.into(),
            client,
            default_model: env::var(GEMINI_MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_owned()),
        })
    }

    /// Create a provider from the `GEMINI_API_KEY` environment variable
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> AppResult<Self> {
        let api_key = env::var(GEMINI_API_KEY_ENV).map_err(|_| {
            AppError::config(format!("{GEMINI_API_KEY_ENV} environment variable not set"))
        })?;
        Self::new(api_key)
    }

    /// Set a custom default model
    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Translate a chat request into the Gemini wire format
    ///
    /// System messages become the request's `system_instruction`; user and
    /// assistant turns map to `user`/`model` content entries.
    fn build_gemini_request(request: &ChatRequest) -> GeminiRequest {
        let mut system_parts = Vec::new();
        let mut contents = Vec::new();

        for message in &request.messages {
            match message.role {
                MessageRole::System => system_parts.push(ContentPart {
                    text: message.content.clone(),
                }),
                MessageRole::User | MessageRole::Assistant => contents.push(GeminiContent {
                    role: Some(
                        if message.role == MessageRole::User {
                            "user"
                        } else {
                            "model"
                        }
                        .to_owned(),
                    ),
                    parts: vec![ContentPart {
                        text: message.content.clone(),
                    }],
                }),
            }
        }

        let system_instruction = if system_parts.is_empty() {
            None
        } else {
            Some(GeminiContent {
                role: None,
                parts: system_parts,
            })
        };

        let generation_config = if request.temperature.is_none()
            && request.max_tokens.is_none()
            && !request.json_response
        {
            None
        } else {
            Some(GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
                response_mime_type: request.json_response.then_some("application/json"),
            })
        };

        GeminiRequest {
            contents,
            system_instruction,
            generation_config,
        }
    }

    /// Map an HTTP error status to an application error
    fn map_api_error(status: u16, body: &str) -> AppError {
        let detail = serde_json::from_str::<GeminiResponse>(body)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| body.chars().take(200).collect(), |e| e.message);

        if status == 429 || status >= 500 {
            AppError::external_unavailable(format!("Gemini API {status}: {detail}"))
        } else {
            AppError::external(format!("Gemini API {status}: {detail}"))
        }
    }

    /// Pull the text out of the first candidate
    fn extract_text(response: GeminiResponse) -> AppResult<(String, Option<String>)> {
        if let Some(error) = response.error {
            return Err(AppError::external(format!("Gemini API error: {}", error.message)));
        }

        let mut candidates = response.candidates.unwrap_or_default();
        if candidates.is_empty() {
            return Err(AppError::external("Gemini returned no candidates"));
        }

        let candidate = candidates.swap_remove(0);
        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        Ok((text, candidate.finish_reason))
    }
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("default_model", &self.default_model)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    async fn complete(&self, request: &ChatRequest) -> AppResult<ChatResponse> {
        let model = request.model.as_deref().unwrap_or(&self.default_model);
        let url = format!("{API_BASE_URL}/models/{model}:generateContent");
        let gemini_request = Self::build_gemini_request(request);

        debug!(model, json = request.json_response, "Sending request to Gemini API");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.as_str())
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::external_unavailable("Gemini request timed out").with_source(e)
                } else {
                    AppError::external("HTTP request failed").with_source(e)
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::external("failed to read response body").with_source(e))?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status.as_u16(), &body));
        }

        let gemini_response: GeminiResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Failed to parse Gemini response");
            AppError::external("failed to parse Gemini response").with_source(e)
        })?;

        let (content, finish_reason) = Self::extract_text(gemini_response)?;

        Ok(ChatResponse {
            content,
            model: model.to_owned(),
            finish_reason,
        })
    }
}
