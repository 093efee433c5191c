use chrono::{DateTime, Utc};
use common::{Difficulty, Language};
use serde::{Deserialize, Serialize};

use crate::entity::submission;
use crate::error::AppError;

use super::problem::validate_title;

const MAX_CODE_LEN: usize = 65_536;

/// Request body for recording a submission attempt.
///
/// One record is kept per (user, problem); resubmitting overwrites it.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct SaveSubmissionRequest {
    /// Stored problem this attempt was made against, if any.
    pub problem_id: Option<i32>,
    pub problem_title: String,
    pub difficulty: Difficulty,
    pub language: Language,
    pub total_cases: i32,
    pub passed_cases: i32,
    pub passed_all: bool,
    #[serde(default)]
    pub code: String,
}

pub fn validate_save_submission(payload: &SaveSubmissionRequest) -> Result<(), AppError> {
    validate_title(&payload.problem_title)?;
    if payload.total_cases < 0 {
        return Err(AppError::Validation(
            "total_cases must be non-negative".into(),
        ));
    }
    if payload.passed_cases < 0 || payload.passed_cases > payload.total_cases {
        return Err(AppError::Validation(
            "passed_cases must be between 0 and total_cases".into(),
        ));
    }
    if payload.code.len() > MAX_CODE_LEN {
        return Err(AppError::Validation(
            "Code must be at most 65536 characters".into(),
        ));
    }
    Ok(())
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct SubmissionResponse {
    pub id: i32,
    pub user_id: i32,
    pub problem_id: Option<i32>,
    pub problem_title: String,
    pub difficulty: Difficulty,
    pub language: Language,
    pub total_cases: i32,
    pub passed_cases: i32,
    pub passed_all: bool,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<submission::Model> for SubmissionResponse {
    fn from(s: submission::Model) -> Self {
        Self {
            id: s.id,
            user_id: s.user_id,
            problem_id: s.problem_id,
            problem_title: s.problem_title,
            difficulty: s.difficulty,
            language: s.language,
            total_cases: s.total_cases,
            passed_cases: s.passed_cases,
            passed_all: s.passed_all,
            code: s.code,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}
