// ABOUTME: Finance, career, and opportunity models
// ABOUTME: FinancialRecord, CareerGoal, CoachingGig, JobOpportunity, Tournament
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Athlete360

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a financial transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Money in
    Income,
    /// Money out
    Expense,
}

/// One financial ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRecord {
    /// Unique record identifier
    pub id: Uuid,
    /// Transaction date
    pub date: NaiveDate,
    /// Income or expense
    pub kind: TransactionKind,
    /// Category (e.g. "Sponsorship", "Equipment")
    pub category: String,
    /// Amount in rupees
    pub amount: f64,
    /// Free-text description
    pub description: String,
}

/// Progress state of a career goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalStatus {
    /// Not started
    Pending,
    /// Being worked on
    #[serde(rename = "In Progress")]
    InProgress,
    /// Completed
    Achieved,
}

/// A career milestone the athlete is working toward
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerGoal {
    /// Unique record identifier
    pub id: Uuid,
    /// Goal title
    pub title: String,
    /// Target completion date
    pub target_date: NaiveDate,
    /// Progress state
    pub status: GoalStatus,
}

/// A coaching engagement available to the athlete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachingGig {
    /// Unique record identifier
    pub id: Uuid,
    /// Client name
    pub client_name: String,
    /// What the client needs
    pub requirement: String,
    /// Offered rate (e.g. "₹1000/hr")
    pub rate: String,
    /// Location of the engagement
    pub location: String,
}

/// Employer category for a job opportunity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    /// Government sports quota position
    Government,
    /// Private sector position
    Private,
    /// Coaching position
    Coaching,
}

/// A sports-quota or coaching job opening
///
/// Generated per profile with the sport name interpolated into the title;
/// all other fields come from a fixed template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOpportunity {
    /// Unique record identifier
    pub id: Uuid,
    /// Position title
    pub title: String,
    /// Hiring organization
    pub organization: String,
    /// Employer category
    pub job_type: JobType,
    /// Job location
    pub location: String,
    /// Salary range, free text
    pub salary_range: String,
    /// Eligibility requirement, free text
    pub eligibility: String,
    /// Application deadline
    pub deadline: NaiveDate,
}

/// An upcoming tournament the athlete can enter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    /// Unique record identifier
    pub id: Uuid,
    /// Tournament name, sport interpolated
    pub name: String,
    /// Event date
    pub date: NaiveDate,
    /// Venue
    pub location: String,
    /// Prize pool, free text
    pub prize_pool: String,
    /// Entry fee, free text
    pub entry_fee: String,
    /// Registration deadline
    pub registration_deadline: NaiveDate,
}
