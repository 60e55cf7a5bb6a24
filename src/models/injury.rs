// ABOUTME: Injury history and medical report models
// ABOUTME: InjuryRecord drives risk scoring; MedicalReport is append-only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Athlete360

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity of a recorded injury
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InjurySeverity {
    /// Minor niggle or fatigue
    Low,
    /// Limits training intensity
    Medium,
    /// Prevents training
    High,
}

/// Recovery status of an injury
///
/// Anything other than [`Resolved`](Self::Resolved) counts as an active
/// injury for risk scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InjuryStatus {
    /// Currently injured
    Active,
    /// In rehabilitation
    Recovering,
    /// Fully recovered
    Resolved,
}

/// One entry in the athlete's injury history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuryRecord {
    /// Unique record identifier
    pub id: Uuid,
    /// Date the injury was recorded
    pub date: NaiveDate,
    /// Affected body area
    pub area: String,
    /// Severity band
    pub severity: InjurySeverity,
    /// Recovery status
    pub status: InjuryStatus,
    /// Self-reported pain, 1-10
    pub pain_level: u8,
}

/// Doctor embedded in a medical report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorProfile {
    /// Doctor's name
    pub name: String,
    /// Medical specialty
    pub specialty: String,
    /// Hospital or clinic
    pub hospital: String,
    /// Contact details
    pub contact: String,
}

/// A medical report attached by the user
///
/// Reports form an append-only collection; the optional recovery plan is
/// an ordered list of steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalReport {
    /// Unique report identifier
    pub id: Uuid,
    /// Report date
    pub date: NaiveDate,
    /// Report title
    pub title: String,
    /// Attending doctor
    pub doctor: DoctorProfile,
    /// Diagnosis, free text
    pub diagnosis: String,
    /// Attached file location, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    /// Ordered recovery plan steps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_plan: Option<Vec<String>>,
}
