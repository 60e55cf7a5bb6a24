// ABOUTME: Performance log model for daily training sessions
// ABOUTME: One record per day with metric value, strain, and duration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Athlete360

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single day's training performance record
///
/// Generated as a sequence of 7, one per day ending today, oldest first.
/// The metric and unit depend on the athlete's sport; for timed sprint
/// metrics lower values are better.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceLog {
    /// Unique record identifier
    pub id: Uuid,
    /// Session date
    pub date: NaiveDate,
    /// Metric name (e.g. "100m Sprint", "Deadlift 1RM")
    pub metric: String,
    /// Measured value in `unit`
    pub value: f64,
    /// Unit of the value (e.g. "s", "kg", "km")
    pub unit: String,
    /// Training strain for the session, 6-10
    pub strain: u8,
    /// Session duration in minutes
    pub duration_min: u32,
}
