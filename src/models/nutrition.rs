// ABOUTME: Diet log model with per-meal caloric and macro breakdown
// ABOUTME: One record per meal slot per day, derived from profile weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Athlete360

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Fixed daily meal slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Between-meal snack
    Snack,
}

impl MealSlot {
    /// All slots in serving order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Slot name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One meal's nutrition record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietLog {
    /// Unique record identifier
    pub id: Uuid,
    /// Day the meal belongs to
    pub date: NaiveDate,
    /// Meal slot
    pub meal: MealSlot,
    /// Calories for this meal, kcal
    pub calories: u32,
    /// Protein in grams; reports the full daily target per meal
    pub protein: u32,
    /// Carbohydrates in grams
    pub carbs: u32,
    /// Fats in grams
    pub fats: u32,
    /// Meal description
    pub description: String,
}
