use common::Language;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

const MAX_CODE_LEN: usize = 65_536;
const MAX_RUN_CASES: usize = 100;

/// Request body for a single ad-hoc execution ("Run Code").
#[derive(Deserialize, utoipa::ToSchema)]
pub struct RunCodeRequest {
    pub language: Language,
    pub code: String,
    /// Free-form input text the harness parses arguments from.
    #[serde(default)]
    pub input: String,
    /// Title used to pick the harness wrapper. May be blank for scratch runs.
    #[serde(default)]
    pub problem_title: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct RunCodeResponse {
    /// Trimmed program output, or "No output" when the run printed nothing.
    #[schema(example = "[0,1]")]
    pub output: String,
}

/// Request body for judging code against a list of test cases ("Submit").
#[derive(Deserialize, utoipa::ToSchema)]
pub struct RunTestCasesRequest {
    pub language: Language,
    pub code: String,
    #[serde(default)]
    pub problem_title: String,
    /// Set when submitting against a stored problem; enables the automatic
    /// submission record on a fully passing run.
    pub problem_id: Option<i32>,
    pub test_cases: Vec<TestCaseInput>,
}

/// One test case to judge against.
#[derive(Deserialize, Clone, utoipa::ToSchema)]
pub struct TestCaseInput {
    #[serde(default)]
    pub input: String,
    #[serde(default, alias = "output", alias = "expected")]
    pub expected_output: String,
}

/// Per-case verdict.
#[derive(Serialize, utoipa::ToSchema)]
pub struct CaseResult {
    /// 1-based case index.
    pub case_number: u32,
    pub input: String,
    pub expected: String,
    /// Trimmed raw output, or an error sentinel if the execution call failed.
    pub user_output: String,
    pub passed: bool,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct RunTestCasesResponse {
    pub passed: u32,
    pub total: u32,
    pub results: Vec<CaseResult>,
}

fn validate_code(code: &str) -> Result<(), AppError> {
    if code.trim().is_empty() {
        return Err(AppError::Validation("Code must not be empty".into()));
    }
    if code.len() > MAX_CODE_LEN {
        return Err(AppError::Validation(
            "Code must be at most 65536 characters".into(),
        ));
    }
    Ok(())
}

pub fn validate_run_code(payload: &RunCodeRequest) -> Result<(), AppError> {
    validate_code(&payload.code)
}

pub fn validate_run_test_cases(payload: &RunTestCasesRequest) -> Result<(), AppError> {
    validate_code(&payload.code)?;
    if payload.test_cases.is_empty() {
        return Err(AppError::Validation("No test cases provided".into()));
    }
    if payload.test_cases.len() > MAX_RUN_CASES {
        return Err(AppError::Validation(format!(
            "At most {} test cases per run",
            MAX_RUN_CASES
        )));
    }
    Ok(())
}
