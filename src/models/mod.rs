// ABOUTME: Common data models for athlete data across all domains
// ABOUTME: Profile, performance, injury, nutrition, career, and analysis types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Athlete360

//! Domain records persisted by the session data service. Every type here is
//! a plain serde value record; the only cross-entity link is the owning
//! profile that seeds the generated collections.

mod analysis;
mod career;
mod injury;
mod nutrition;
mod performance;
mod profile;

pub use analysis::{
    DietAnalysis, DietStatus, DrillCategory, TrainingDrill, TrainingSession,
};
pub use career::{
    CareerGoal, CoachingGig, FinancialRecord, GoalStatus, JobOpportunity, JobType, Tournament,
    TransactionKind,
};
pub use injury::{
    DoctorProfile, InjuryRecord, InjurySeverity, InjuryStatus, MedicalReport,
};
pub use nutrition::{DietLog, MealSlot};
pub use performance::PerformanceLog;
pub use profile::{
    AthleteProfile, DeviceMetrics, MedicalInfo, ProfileUpdate, Registration, StressLevel, UserRole,
};
