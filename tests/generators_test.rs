// ABOUTME: Tests for the synthetic data generators
// ABOUTME: Date windows, sport dispatch order, variance bounds, and diet math
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Athlete360

use athlete360::generators::{
    default_career_goals, default_financial_records, generate_diet_logs, generate_jobs,
    generate_performance_logs, generate_tournaments, seed_coaching_gigs, seed_injury_history,
    seed_profile,
};
use athlete360::models::{AthleteProfile, InjuryStatus, MealSlot, UserRole};
use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

fn profile_with_sport(sport: &str) -> AthleteProfile {
    AthleteProfile {
        id: Uuid::new_v4(),
        email: "athlete@example.com".to_string(),
        password_hash: String::new(),
        name: "Test Athlete".to_string(),
        sport: sport.to_string(),
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

#[test]
fn test_performance_logs_are_seven_consecutive_days_ending_today() {
    let profile = profile_with_sport("Football");
    let logs = generate_performance_logs(&profile, &mut StdRng::seed_from_u64(1));

    assert_eq!(logs.len(), 7);
    let today = Utc::now().date_naive();
    for (i, log) in logs.iter().enumerate() {
        let expected = today - Duration::days(6 - i as i64);
        assert_eq!(log.date, expected, "log {i} has the wrong date");
    }
}

#[test]
fn test_strain_and_duration_bounds() {
    let profile = profile_with_sport("Football");
    for seed in 0..20 {
        let logs = generate_performance_logs(&profile, &mut StdRng::seed_from_u64(seed));
        for log in logs {
            assert!((6..=10).contains(&log.strain), "strain {} out of range", log.strain);
            assert!(
                (45..=104).contains(&log.duration_min),
                "duration {} out of range",
                log.duration_min
            );
        }
    }
}

#[test]
fn test_sprint_values_respect_physical_floor() {
    let profile = profile_with_sport("Athletics (Sprints)");
    for seed in 0..20 {
        let logs = generate_performance_logs(&profile, &mut StdRng::seed_from_u64(seed));
        for log in logs {
            assert_eq!(log.metric, "100m Sprint");
            assert_eq!(log.unit, "s");
            assert!(log.value >= 9.5, "sprint time {} below floor", log.value);
        }
    }
}

#[test]
fn test_values_stay_within_variance_band() {
    // Football base is 9.0 km with at most ±7.5% variance
    let profile = profile_with_sport("Football");
    for seed in 0..20 {
        let logs = generate_performance_logs(&profile, &mut StdRng::seed_from_u64(seed));
        for log in logs {
            assert!(log.value >= 9.0 * 0.925 - 0.01);
            assert!(log.value <= 9.0 * 1.075 + 0.01);
        }
    }
}

#[test]
fn test_sport_dispatch_table() {
    let mut rng = StdRng::seed_from_u64(3);
    let cases = [
        ("Cricket", "Batting Session (Runs)", "runs"),
        ("SPRINT training", "100m Sprint", "s"),
        ("athletics", "100m Sprint", "s"),
        ("Soccer", "Distance Covered", "km"),
        ("Tennis", "Rally Duration", "mins"),
        ("Weightlifting", "Deadlift 1RM", "kg"),
        ("Powerlifting", "Deadlift 1RM", "kg"),
        ("Chess", "Workout Intensity", "cal"),
    ];
    for (sport, metric, unit) in cases {
        let logs = generate_performance_logs(&profile_with_sport(sport), &mut rng);
        assert_eq!(logs[0].metric, metric, "sport {sport}");
        assert_eq!(logs[0].unit, unit, "sport {sport}");
    }
}

#[test]
fn test_first_matching_keyword_wins() {
    // "cricket" is checked before "sprint"; a sport naming both resolves to cricket
    let logs = generate_performance_logs(
        &profile_with_sport("Cricket sprint drills"),
        &mut StdRng::seed_from_u64(4),
    );
    assert_eq!(logs[0].metric, "Batting Session (Runs)");
}

#[test]
fn test_diet_logs_cover_all_meal_slots() {
    let profile = profile_with_sport("Badminton");
    let logs = generate_diet_logs(&profile);

    assert_eq!(logs.len(), 4);
    let slots: Vec<MealSlot> = logs.iter().map(|log| log.meal).collect();
    assert_eq!(slots, MealSlot::ALL.to_vec());
}

#[test]
fn test_diet_macros_derive_from_weight() {
    // 72 kg: target = 72 * 30 + 300 = 2460, per meal 615
    let profile = profile_with_sport("Badminton");
    for log in generate_diet_logs(&profile) {
        assert_eq!(log.calories, 615);
        // Protein reports the full daily target (weight * 0.5) on every meal
        assert_eq!(log.protein, 36);
        assert_eq!(log.carbs, 153);
        assert_eq!(log.fats, 68);
        assert!(log.description.contains("Badminton"));
    }
}

#[test]
fn test_diet_falls_back_to_default_weight() {
    let mut profile = profile_with_sport("Badminton");
    profile.weight_kg = 0.0;
    // 70 kg fallback: target = 2400, per meal 600
    for log in generate_diet_logs(&profile) {
        assert_eq!(log.calories, 600);
        assert_eq!(log.protein, 35);
    }
}

#[test]
fn test_jobs_and_tournaments_interpolate_sport() {
    let profile = profile_with_sport("Kabaddi");

    let jobs = generate_jobs(&profile);
    assert_eq!(jobs.len(), 3);
    assert_eq!(jobs[0].title, "Kabaddi Coach");

    let tournaments = generate_tournaments(&profile);
    assert_eq!(tournaments.len(), 2);
    assert_eq!(tournaments[0].name, "National Kabaddi Championship");
    assert_eq!(tournaments[1].name, "State Level Kabaddi Meet");
}

#[test]
fn test_injury_seed_is_one_resolved_record() {
    let history = seed_injury_history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status, InjuryStatus::Resolved);
    assert_eq!(history[0].area, "General Fatigue");
}

#[test]
fn test_static_collections_are_nonempty() {
    assert_eq!(seed_coaching_gigs().len(), 1);
    assert_eq!(default_financial_records().len(), 2);
    assert_eq!(default_career_goals().len(), 1);
}

#[test]
fn test_seed_profile_demo_credentials() {
    let seed = seed_profile();
    assert_eq!(seed.email, "demo@athlete360.com");
    assert_eq!(seed.sport, "Athletics (Sprints)");
    // Password is hashed, never stored in cleartext
    assert_ne!(seed.password_hash, "password");
    assert!(bcrypt::verify("password", &seed.password_hash).unwrap_or(false));
}
