// ABOUTME: Structured results returned by the AI assistant analysis calls
// ABOUTME: DietAnalysis and training plan types parsed from LLM JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Athlete360

use serde::{Deserialize, Serialize};

/// Overall verdict of a diet analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietStatus {
    /// Diet matches the training load
    Optimal,
    /// Diet needs adjustment
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    /// Diet is inadequate
    Poor,
}

/// Structured diet analysis produced by the assistant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietAnalysis {
    /// Overall verdict
    pub status: DietStatus,
    /// Short description of the macro balance
    pub macro_balance: String,
    /// Actionable recommendations
    pub recommendations: Vec<String>,
}

/// Category of a training drill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrillCategory {
    /// Game-plan and decision drills
    Tactical,
    /// Conditioning drills
    Physical,
    /// Skill drills
    Technical,
}

/// A single drill within a training session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingDrill {
    /// Drill name
    pub name: String,
    /// Drill category
    pub category: DrillCategory,
    /// Drill duration in minutes
    pub duration_min: u32,
    /// Set/rep scheme, free text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
    /// How to perform the drill
    pub instructions: String,
}

/// One day of a generated training plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSession {
    /// Day label (e.g. "Monday")
    pub day: String,
    /// Session focus
    pub focus: String,
    /// Drills in execution order
    pub drills: Vec<TrainingDrill>,
    /// Estimated total duration in minutes
    pub estimated_duration: u32,
}
