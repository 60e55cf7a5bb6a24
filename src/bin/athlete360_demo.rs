// ABOUTME: Demo driver for the Athlete360 session data service
// ABOUTME: Registers a demo athlete and prints every generated domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Athlete360

//! Demo driver for the session data service.
//!
//! Registers a demo athlete against an in-memory store, exercises every
//! domain accessor, and prints the generated data plus the injury risk
//! assessment.
//!
//! Usage:
//! ```bash
//! cargo run --bin athlete360-demo
//! ```

use anyhow::Result;
use tracing::info;

use athlete360::logging;
use athlete360::models::{Registration, UserRole};
use athlete360::service::SessionService;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_from_env()?;

    let service = SessionService::in_memory();

    let profile = service
        .register(Registration {
            email: "asha@athlete360.com".to_owned(),
            password: "training-hard".to_owned(),
            name: "Asha Verma".to_owned(),
            sport: "Badminton".to_owned(),
            age: 20,
            height_cm: 165.0,
            weight_kg: 58.0,
            role: UserRole::Athlete,
            avatar_url: "https://api.dicebear.com/7.x/avataaars/svg?seed=Asha".to_owned(),
            bio: None,
            medical: None,
            device_metrics: None,
        })
        .await?;
    info!(athlete_id = %profile.id, "Registered demo athlete");

    let logs = service.performance_logs().await?;
    println!("Performance logs for {}:", profile.name);
    for log in &logs {
        println!(
            "  {}  {}  {:.2} {}  strain {}  {} min",
            log.date, log.metric, log.value, log.unit, log.strain, log.duration_min
        );
    }

    let diet = service.diet_logs().await?;
    println!("Diet plan ({} kg):", profile.weight_kg);
    for meal in &diet {
        println!(
            "  {}  {} kcal  {} g protein",
            meal.meal, meal.calories, meal.protein
        );
    }

    let jobs = service.jobs().await?;
    println!("Job opportunities: {}", jobs.len());
    let tournaments = service.tournaments().await?;
    println!("Tournaments: {}", tournaments.len());
    let gigs = service.coaching_gigs().await?;
    println!("Coaching gigs: {}", gigs.len());

    let risk = service.predict_injury_risk().await?;
    println!(
        "Injury risk: {:.2} ({}) - {}",
        risk.score,
        risk.band(),
        risk.factors.join(", ")
    );

    Ok(())
}
