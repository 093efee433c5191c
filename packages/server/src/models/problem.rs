use chrono::{DateTime, Utc};
use common::Difficulty;
use serde::{Deserialize, Serialize};

use crate::entity::{problem, test_case};
use crate::error::AppError;

const MAX_TEST_CASES: usize = 100;
const MAX_TEXT_LEN: usize = 10_000;
const MAX_CODE_LEN: usize = 65_536;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateProblemRequest {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub example_input: String,
    #[serde(default)]
    pub example_output: String,
    #[serde(default)]
    pub starter_code: String,
    /// Judged in the given order.
    #[serde(default)]
    pub test_cases: Vec<TestCaseBody>,
}

/// Test case as sent by clients when creating or updating a problem.
#[derive(Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct TestCaseBody {
    #[serde(default)]
    pub input: String,
    #[serde(default, alias = "output", alias = "expected")]
    pub expected_output: String,
}

#[derive(Deserialize, Default, PartialEq, utoipa::ToSchema)]
pub struct UpdateProblemRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub example_input: Option<String>,
    pub example_output: Option<String>,
    pub starter_code: Option<String>,
    /// When present, replaces the full test case list.
    pub test_cases: Option<Vec<TestCaseBody>>,
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct ProblemListQuery {
    /// Case-insensitive difficulty filter (easy, medium, hard).
    pub difficulty: Option<String>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct TestCaseResponse {
    pub id: i32,
    pub input: String,
    pub expected_output: String,
    pub position: i32,
}

impl From<test_case::Model> for TestCaseResponse {
    fn from(tc: test_case::Model) -> Self {
        Self {
            id: tc.id,
            input: tc.input,
            expected_output: tc.expected_output,
            position: tc.position,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ProblemResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub example_input: String,
    pub example_output: String,
    pub starter_code: String,
    pub test_cases: Vec<TestCaseResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProblemResponse {
    /// Assembles the response from a problem and its test cases, already
    /// sorted by position.
    pub fn from_parts(problem: problem::Model, test_cases: Vec<test_case::Model>) -> Self {
        Self {
            id: problem.id,
            title: problem.title,
            description: problem.description,
            difficulty: problem.difficulty,
            example_input: problem.example_input,
            example_output: problem.example_output,
            starter_code: problem.starter_code,
            test_cases: test_cases.into_iter().map(TestCaseResponse::from).collect(),
            created_at: problem.created_at,
            updated_at: problem.updated_at,
        }
    }
}

/// Outcome of a seed run.
#[derive(Serialize, utoipa::ToSchema)]
pub struct SeedResponse {
    /// Problems newly inserted.
    pub created: u32,
    /// Problems that already existed and were refreshed.
    pub updated: u32,
}

pub fn validate_title(title: &str) -> Result<(), AppError> {
    let trimmed = title.trim();
    if trimmed.is_empty() || trimmed.chars().count() > 256 {
        return Err(AppError::Validation("Title must be 1-256 characters".into()));
    }
    Ok(())
}

fn validate_test_cases(cases: &[TestCaseBody]) -> Result<(), AppError> {
    if cases.len() > MAX_TEST_CASES {
        return Err(AppError::Validation(format!(
            "At most {} test cases per problem",
            MAX_TEST_CASES
        )));
    }
    for case in cases {
        if case.input.len() > MAX_TEXT_LEN || case.expected_output.len() > MAX_TEXT_LEN {
            return Err(AppError::Validation(format!(
                "Test case input and expected output must be at most {} characters",
                MAX_TEXT_LEN
            )));
        }
    }
    Ok(())
}

pub fn validate_create_problem(payload: &CreateProblemRequest) -> Result<(), AppError> {
    validate_title(&payload.title)?;
    if payload.description.trim().is_empty() || payload.description.len() > MAX_CODE_LEN {
        return Err(AppError::Validation(
            "Description must be non-empty and at most 65536 characters".into(),
        ));
    }
    if payload.example_input.len() > MAX_TEXT_LEN || payload.example_output.len() > MAX_TEXT_LEN {
        return Err(AppError::Validation(format!(
            "Examples must be at most {} characters",
            MAX_TEXT_LEN
        )));
    }
    if payload.starter_code.len() > MAX_CODE_LEN {
        return Err(AppError::Validation(
            "Starter code must be at most 65536 characters".into(),
        ));
    }
    validate_test_cases(&payload.test_cases)
}

pub fn validate_update_problem(payload: &UpdateProblemRequest) -> Result<(), AppError> {
    if let Some(title) = &payload.title {
        validate_title(title)?;
    }
    if let Some(description) = &payload.description {
        if description.trim().is_empty() || description.len() > MAX_CODE_LEN {
            return Err(AppError::Validation(
                "Description must be non-empty and at most 65536 characters".into(),
            ));
        }
    }
    if let Some(example_input) = &payload.example_input {
        if example_input.len() > MAX_TEXT_LEN {
            return Err(AppError::Validation(format!(
                "Examples must be at most {} characters",
                MAX_TEXT_LEN
            )));
        }
    }
    if let Some(example_output) = &payload.example_output {
        if example_output.len() > MAX_TEXT_LEN {
            return Err(AppError::Validation(format!(
                "Examples must be at most {} characters",
                MAX_TEXT_LEN
            )));
        }
    }
    if let Some(starter_code) = &payload.starter_code {
        if starter_code.len() > MAX_CODE_LEN {
            return Err(AppError::Validation(
                "Starter code must be at most 65536 characters".into(),
            ));
        }
    }
    if let Some(cases) = &payload.test_cases {
        validate_test_cases(cases)?;
    }
    Ok(())
}
