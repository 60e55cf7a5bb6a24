// ABOUTME: Athlete profile models, registration input, and partial updates
// ABOUTME: AthleteProfile, MedicalInfo, DeviceMetrics, UserRole definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Athlete360

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of the account owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Competing athlete (default)
    Athlete,
    /// Coach managing athletes
    Coach,
    /// Physiotherapist
    Physio,
}

/// Self-reported stress level from wearable data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressLevel {
    /// Low stress
    Low,
    /// Moderate stress
    Moderate,
    /// High stress
    High,
}

/// Medical background attached to a profile
///
/// Replaced wholesale on profile updates; fields are never merged
/// individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalInfo {
    /// Known allergies, free text
    pub allergies: String,
    /// Chronic conditions, free text
    pub conditions: String,
    /// Blood group (e.g. "O+")
    pub blood_group: String,
    /// Date of the last medical checkup
    pub last_checkup: NaiveDate,
}

/// Snapshot of wearable device metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceMetrics {
    /// Resting heart rate in bpm
    pub heart_rate_resting: u32,
    /// Heart rate variability in ms
    pub heart_rate_variability: u32,
    /// Blood oxygen saturation percentage
    pub spo2: u32,
    /// Hours of sleep last night
    pub sleep_hours: f64,
    /// Sleep quality score, 1-100
    pub sleep_quality: u32,
    /// Estimated VO2 max
    pub vo2_max: u32,
    /// Step count for the day
    pub steps: u32,
    /// Calories burned for the day
    pub calories_burned: u32,
    /// Stress level band
    pub stress_level: StressLevel,
}

/// The single athlete profile stored under the profile key
///
/// Exactly one profile exists in the store at a time; it seeds every
/// generated domain collection. Created at registration, mutated by
/// profile updates, never deleted (logout keeps it).
///
/// The password is stored as a bcrypt hash, never in cleartext.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Unique identifier, assigned at registration
    pub id: Uuid,
    /// Login email, compared by exact equality
    pub email: String,
    /// bcrypt hash of the login password
    pub password_hash: String,
    /// Display name
    pub name: String,
    /// Sport, free text; drives the performance metric selection
    pub sport: String,
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms; seeds the diet generator
    pub weight_kg: f64,
    /// Account role
    pub role: UserRole,
    /// Avatar image URL
    pub avatar_url: String,
    /// Short biography
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Medical background
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical: Option<MedicalInfo>,
    /// Latest wearable metrics snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_metrics: Option<DeviceMetrics>,
}

/// Registration input: the full profile plus the plaintext password
///
/// The password is hashed by the service before the profile is written;
/// the plaintext never reaches the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    /// Login email
    pub email: String,
    /// Plaintext password, hashed before storage
    pub password: String,
    /// Display name
    pub name: String,
    /// Sport, free text
    pub sport: String,
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Account role
    pub role: UserRole,
    /// Avatar image URL
    pub avatar_url: String,
    /// Short biography
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Medical background
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical: Option<MedicalInfo>,
    /// Wearable metrics snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_metrics: Option<DeviceMetrics>,
}

/// Partial profile update applied as a shallow merge
///
/// Every `Some` field replaces the stored field wholesale. Nested records
/// ([`MedicalInfo`], [`DeviceMetrics`]) are replaced as a unit, never
/// deep-merged: a caller updating one medical field must supply the whole
/// nested record. No field validation is performed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// New login email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New sport
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sport: Option<String>,
    /// New age
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// New height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// New weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// New role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    /// New avatar URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// New biography
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Replacement medical record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical: Option<MedicalInfo>,
    /// Replacement device metrics snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_metrics: Option<DeviceMetrics>,
}

impl ProfileUpdate {
    /// Apply this update to a profile, returning the merged result
    #[must_use]
    pub fn apply_to(self, mut profile: AthleteProfile) -> AthleteProfile {
        if let Some(email) = self.email {
            profile.email = email;
        }
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(sport) = self.sport {
            profile.sport = sport;
        }
        if let Some(age) = self.age {
            profile.age = age;
        }
        if let Some(height_cm) = self.height_cm {
            profile.height_cm = height_cm;
        }
        if let Some(weight_kg) = self.weight_kg {
            profile.weight_kg = weight_kg;
        }
        if let Some(role) = self.role {
            profile.role = role;
        }
        if let Some(avatar_url) = self.avatar_url {
            profile.avatar_url = avatar_url;
        }
        if let Some(bio) = self.bio {
            profile.bio = Some(bio);
        }
        if let Some(medical) = self.medical {
            profile.medical = Some(medical);
        }
        if let Some(device_metrics) = self.device_metrics {
            profile.device_metrics = Some(device_metrics);
        }
        profile
    }
}
