use chrono::{DateTime, Utc};
use common::{Difficulty, Language};
use serde::Serialize;

use crate::entity::submission;

/// Per-user practice statistics.
///
/// "Solved" counts distinct problems with at least one fully passing
/// submission, keyed by problem ID when available and by title otherwise.
#[derive(Serialize, utoipa::ToSchema)]
pub struct StatsResponse {
    pub total_solved: u32,
    pub total_submissions: u32,
    pub passed_submissions: u32,
    /// Share of submissions that passed every case, as a rounded percentage.
    pub accuracy: u32,
    pub difficulty_counts: DifficultyCounts,
    /// Up to 10 most recent submissions, newest first.
    pub recent: Vec<RecentSubmission>,
}

impl StatsResponse {
    pub fn empty() -> Self {
        Self {
            total_solved: 0,
            total_submissions: 0,
            passed_submissions: 0,
            accuracy: 0,
            difficulty_counts: DifficultyCounts::default(),
            recent: Vec::new(),
        }
    }
}

/// Distinct solved problems broken down by difficulty.
#[derive(Serialize, Default, utoipa::ToSchema)]
pub struct DifficultyCounts {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl DifficultyCounts {
    pub fn bump(&mut self, difficulty: Difficulty) {
        match difficulty {
            Difficulty::Easy => self.easy += 1,
            Difficulty::Medium => self.medium += 1,
            Difficulty::Hard => self.hard += 1,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct RecentSubmission {
    pub problem_id: Option<i32>,
    pub problem_title: String,
    pub difficulty: Difficulty,
    pub language: Language,
    pub passed_all: bool,
    pub passed_cases: i32,
    pub total_cases: i32,
    pub date: DateTime<Utc>,
}

impl From<&submission::Model> for RecentSubmission {
    fn from(s: &submission::Model) -> Self {
        Self {
            problem_id: s.problem_id,
            problem_title: s.problem_title.clone(),
            difficulty: s.difficulty,
            language: s.language,
            passed_all: s.passed_all,
            passed_cases: s.passed_cases,
            total_cases: s.total_cases,
            date: s.updated_at,
        }
    }
}
