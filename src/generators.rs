// ABOUTME: Synthetic per-domain data generators seeded from the athlete profile
// ABOUTME: Sport keyword dispatch table, seed collections, and the default profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Athlete360

//! # Synthetic Data Generators
//!
//! Pure functions deriving plausible per-domain records from the current
//! profile. The performance generator takes an explicit random source so
//! noise is reproducible in tests; everything else is fully deterministic
//! given the profile.
//!
//! Metric selection runs over an explicit ordered keyword table in a
//! single pass; the first matching entry wins, so table order is part of
//! the contract.

use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;
use std::sync::OnceLock;
use uuid::Uuid;

use crate::constants::{generation, seed};
use crate::models::{
    AthleteProfile, CareerGoal, CoachingGig, DeviceMetrics, DietLog, FinancialRecord,
    GoalStatus, InjuryRecord, InjurySeverity, InjuryStatus, JobOpportunity, JobType, MealSlot,
    MedicalInfo, PerformanceLog, StressLevel, Tournament, TransactionKind, UserRole,
};

// ============================================================================
// Sport Dispatch Table
// ============================================================================

/// One row of the sport-to-metric dispatch table
struct SportProfile {
    keywords: &'static [&'static str],
    metric: &'static str,
    unit: &'static str,
    base_value: f64,
}

/// Ordered dispatch table; first keyword match wins
const SPORT_PROFILES: &[SportProfile] = &[
    SportProfile {
        keywords: &["cricket"],
        metric: "Batting Session (Runs)",
        unit: "runs",
        base_value: 45.0,
    },
    SportProfile {
        keywords: &["sprint", "athletic"],
        metric: "100m Sprint",
        unit: "s",
        base_value: 11.5,
    },
    SportProfile {
        keywords: &["football", "soccer"],
        metric: "Distance Covered",
        unit: "km",
        base_value: 9.0,
    },
    SportProfile {
        keywords: &["badminton", "tennis"],
        metric: "Rally Duration",
        unit: "mins",
        base_value: 40.0,
    },
    SportProfile {
        keywords: &["weight", "lift"],
        metric: "Deadlift 1RM",
        unit: "kg",
        base_value: 140.0,
    },
];

/// Fallback when no keyword matches
const GENERIC_SPORT_PROFILE: SportProfile = SportProfile {
    keywords: &[],
    metric: "Workout Intensity",
    unit: "cal",
    base_value: 500.0,
};

fn sport_profile_for(sport: &str) -> &'static SportProfile {
    let sport = sport.to_lowercase();
    SPORT_PROFILES
        .iter()
        .find(|profile| profile.keywords.iter().any(|kw| sport.contains(kw)))
        .unwrap_or(&GENERIC_SPORT_PROFILE)
}

// ============================================================================
// Seed Profile
// ============================================================================

/// The default athlete served until the first registration
///
/// Its demo credentials (see [`crate::constants::seed`]) are the effective
/// login credentials while no profile is stored. The bcrypt hash is
/// computed once per process.
#[must_use]
pub fn seed_profile() -> &'static AthleteProfile {
    static SEED: OnceLock<AthleteProfile> = OnceLock::new();
    SEED.get_or_init(|| AthleteProfile {
        id: Uuid::new_v4(),
        email: seed::DEMO_EMAIL.to_owned(),
        password_hash: bcrypt::hash(seed::DEMO_PASSWORD, bcrypt::DEFAULT_COST)
            .unwrap_or_default(),
        name: seed::DEMO_NAME.to_owned(),
        sport: seed::DEMO_SPORT.to_owned(),
        age: 22,
        height_cm: 178.0,
        weight_kg: 72.0,
        role: UserRole::Athlete,
        avatar_url: seed::DEMO_AVATAR_URL.to_owned(),
        bio: None,
        medical: Some(MedicalInfo {
            allergies: "None".to_owned(),
            conditions: "None".to_owned(),
            blood_group: "O+".to_owned(),
            last_checkup: fixed_date(2023, 8, 15),
        }),
        device_metrics: Some(DeviceMetrics {
            heart_rate_resting: 52,
            heart_rate_variability: 65,
            spo2: 98,
            sleep_hours: 7.5,
            sleep_quality: 85,
            vo2_max: 58,
            steps: 12_500,
            calories_burned: 2_800,
            stress_level: StressLevel::Moderate,
        }),
    })
}

// ============================================================================
// Generated Domains
// ============================================================================

/// Generate the 7-day performance log series for a profile
///
/// Records are oldest to newest with consecutive dates ending today. Each
/// value is the sport's base value with up to ±7.5% uniform noise, rounded
/// to two decimals; sprint times are floored at the physical lower bound
/// (lower is better, so the noise can only slow the athlete down from
/// there).
#[must_use]
pub fn generate_performance_logs<R: Rng>(
    profile: &AthleteProfile,
    rng: &mut R,
) -> Vec<PerformanceLog> {
    let sport = sport_profile_for(&profile.sport);
    let today = Utc::now().date_naive();

    (0..generation::PERFORMANCE_DAYS)
        .map(|i| {
            let days_back = (generation::PERFORMANCE_DAYS - 1 - i) as i64;
            let variance =
                (rng.gen::<f64>() - 0.5) * sport.base_value * generation::VARIANCE_FRACTION;
            let mut value = sport.base_value + variance;
            if sport.unit == "s" {
                value = value.max(generation::SPRINT_FLOOR_SECS);
            }

            PerformanceLog {
                id: Uuid::new_v4(),
                date: today - Duration::days(days_back),
                metric: sport.metric.to_owned(),
                value: (value * 100.0).round() / 100.0,
                unit: sport.unit.to_owned(),
                strain: rng.gen_range(generation::STRAIN_MIN..=generation::STRAIN_MAX),
                duration_min: generation::BASE_DURATION_MIN
                    + rng.gen_range(0..generation::DURATION_JITTER_MIN),
            }
        })
        .collect()
}

/// Generate one day of diet logs for a profile
///
/// The daily calorie target is maintenance (weight x 30) plus a fixed
/// athlete surplus, split evenly across the four meal slots. Protein
/// reports the full daily target (weight x 0.5) on every meal rather than
/// a per-meal share; downstream consumers rely on that shape.
#[must_use]
pub fn generate_diet_logs(profile: &AthleteProfile) -> Vec<DietLog> {
    let weight = if profile.weight_kg > 0.0 {
        profile.weight_kg
    } else {
        generation::DEFAULT_WEIGHT_KG
    };
    let target = weight.mul_add(generation::CALORIES_PER_KG, generation::CALORIE_SURPLUS);
    let per_meal = (target / 4.0).floor();
    let today = Utc::now().date_naive();

    MealSlot::ALL
        .iter()
        .map(|meal| DietLog {
            id: Uuid::new_v4(),
            date: today,
            meal: *meal,
            calories: per_meal as u32,
            protein: (weight * generation::PROTEIN_PER_KG).floor() as u32,
            carbs: (per_meal / 4.0).floor() as u32,
            fats: (per_meal / 9.0).floor() as u32,
            description: format!(
                "Healthy {} specific {}",
                profile.sport,
                meal.as_str().to_lowercase()
            ),
        })
        .collect()
}

/// Generate the job opportunity list for a profile
///
/// Template list with the sport name interpolated; everything else is
/// static.
#[must_use]
pub fn generate_jobs(profile: &AthleteProfile) -> Vec<JobOpportunity> {
    let sport = &profile.sport;
    vec![
        JobOpportunity {
            id: Uuid::new_v4(),
            title: format!("{sport} Coach"),
            organization: "Sports Authority of India".to_owned(),
            job_type: JobType::Government,
            location: "New Delhi".to_owned(),
            salary_range: "₹45,000 - ₹80,000".to_owned(),
            eligibility: "National Level Participation".to_owned(),
            deadline: fixed_date(2024, 5, 1),
        },
        JobOpportunity {
            id: Uuid::new_v4(),
            title: "Sports Quota Officer".to_owned(),
            organization: "Indian Railways".to_owned(),
            job_type: JobType::Government,
            location: "Mumbai".to_owned(),
            salary_range: "₹50,000+".to_owned(),
            eligibility: "State Medalist".to_owned(),
            deadline: fixed_date(2024, 4, 15),
        },
        JobOpportunity {
            id: Uuid::new_v4(),
            title: "Head Coach".to_owned(),
            organization: "Private Academy".to_owned(),
            job_type: JobType::Private,
            location: "Bangalore".to_owned(),
            salary_range: "₹60,000/mo".to_owned(),
            eligibility: "Certified Coach".to_owned(),
            deadline: fixed_date(2024, 3, 30),
        },
    ]
}

/// Generate the tournament list for a profile
#[must_use]
pub fn generate_tournaments(profile: &AthleteProfile) -> Vec<Tournament> {
    let sport = &profile.sport;
    vec![
        Tournament {
            id: Uuid::new_v4(),
            name: format!("National {sport} Championship"),
            date: fixed_date(2024, 6, 10),
            location: "Pune Balewadi Stadium".to_owned(),
            prize_pool: "₹10,00,000".to_owned(),
            entry_fee: "₹1000".to_owned(),
            registration_deadline: fixed_date(2024, 5, 20),
        },
        Tournament {
            id: Uuid::new_v4(),
            name: format!("State Level {sport} Meet"),
            date: fixed_date(2024, 4, 5),
            location: "Local Sports Complex".to_owned(),
            prize_pool: "₹50,000".to_owned(),
            entry_fee: "₹200".to_owned(),
            registration_deadline: fixed_date(2024, 3, 25),
        },
    ]
}

// ============================================================================
// Seed Collections
// ============================================================================

/// Minimal injury history for a fresh identity
///
/// One resolved low-severity record; risk scoring counts it as inactive.
#[must_use]
pub fn seed_injury_history() -> Vec<InjuryRecord> {
    vec![InjuryRecord {
        id: Uuid::new_v4(),
        date: fixed_date(2023, 11, 15),
        area: "General Fatigue".to_owned(),
        severity: InjurySeverity::Low,
        status: InjuryStatus::Resolved,
        pain_level: 1,
    }]
}

/// Starter coaching gig list
#[must_use]
pub fn seed_coaching_gigs() -> Vec<CoachingGig> {
    vec![CoachingGig {
        id: Uuid::new_v4(),
        client_name: "Local Club".to_owned(),
        requirement: "Assistant for Junior Team.".to_owned(),
        rate: "₹1000/hr".to_owned(),
        location: "City Stadium".to_owned(),
    }]
}

/// Static financial ledger; served without store interaction
#[must_use]
pub fn default_financial_records() -> Vec<FinancialRecord> {
    vec![
        FinancialRecord {
            id: Uuid::new_v4(),
            date: fixed_date(2023, 10, 1),
            kind: TransactionKind::Income,
            category: "Sponsorship".to_owned(),
            amount: 25_000.0,
            description: "Brand Deal".to_owned(),
        },
        FinancialRecord {
            id: Uuid::new_v4(),
            date: fixed_date(2023, 10, 5),
            kind: TransactionKind::Expense,
            category: "Equipment".to_owned(),
            amount: 8_000.0,
            description: "Gear Upgrade".to_owned(),
        },
    ]
}

/// Static career goal list; served without store interaction
#[must_use]
pub fn default_career_goals() -> Vec<CareerGoal> {
    vec![CareerGoal {
        id: Uuid::new_v4(),
        title: "Qualify for Nationals".to_owned(),
        target_date: fixed_date(2024, 12, 1),
        status: GoalStatus::InProgress,
    }]
}

fn fixed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
