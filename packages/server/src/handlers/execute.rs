use std::time::Duration;

use axum::Json;
use axum::extract::State;
use sea_orm::*;
use tracing::{debug, error, instrument};

use crate::entity::{problem, submission};
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::judge;
use crate::models::execute::{
    RunCodeRequest, RunCodeResponse, RunTestCasesRequest, RunTestCasesResponse,
    validate_run_code, validate_run_test_cases,
};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/",
    tag = "Execution",
    operation_id = "runCode",
    summary = "Run code once",
    description = "Wraps the submitted code in the problem's driver when one is known, runs it remotely, and returns the combined output.",
    request_body = RunCodeRequest,
    responses(
        (status = 200, description = "Execution output", body = RunCodeResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 500, description = "Execution backend failure (EXECUTION_FAILED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(
    skip(state, auth_user, payload),
    fields(user_id = auth_user.user_id, language = %payload.language)
)]
pub async fn run_code(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<RunCodeRequest>,
) -> Result<Json<RunCodeResponse>, AppError> {
    validate_run_code(&payload)?;

    let source = judge::harness::wrap_source(
        payload.language,
        &payload.code,
        &payload.input,
        &payload.problem_title,
    );

    let response = state.executor.execute(payload.language, &source).await?;

    // A run that printed nothing is reported as such, everything else is
    // trimmed of surrounding blank lines.
    let raw = response.run.output;
    let output = if raw.is_empty() {
        "No output".to_string()
    } else {
        raw.trim().to_string()
    };

    Ok(Json(RunCodeResponse { output }))
}

#[utoipa::path(
    post,
    path = "/testcases",
    tag = "Execution",
    operation_id = "runTestCases",
    summary = "Judge code against test cases",
    description = "Runs the submitted code against every test case in order, spacing out calls to the execution backend. When every case passes and a problem ID is supplied, the result is recorded in the user's submission history.",
    request_body = RunTestCasesRequest,
    responses(
        (status = 200, description = "Per-case results", body = RunTestCasesResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(
    skip(state, auth_user, payload),
    fields(
        user_id = auth_user.user_id,
        language = %payload.language,
        cases = payload.test_cases.len()
    )
)]
pub async fn run_test_cases(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<RunTestCasesRequest>,
) -> Result<Json<RunTestCasesResponse>, AppError> {
    validate_run_test_cases(&payload)?;

    let throttle = Duration::from_millis(state.config.execution.throttle_ms);
    let results = judge::run_cases(
        state.executor.as_ref(),
        throttle,
        payload.language,
        &payload.code,
        &payload.problem_title,
        &payload.test_cases,
    )
    .await;

    let total = results.len() as u32;
    let passed = results.iter().filter(|r| r.passed).count() as u32;

    if passed == total {
        if let Some(problem_id) = payload.problem_id {
            // Judging already succeeded, a failed bookkeeping write must not
            // turn the response into an error.
            if let Err(e) =
                record_passing_submission(&state.db, auth_user.user_id, problem_id, &payload).await
            {
                error!("Failed to record passing submission: {:?}", e);
            }
        }
    }

    Ok(Json(RunTestCasesResponse {
        passed,
        total,
        results,
    }))
}

/// Records a fully passing run as a new submission row. Title and difficulty
/// are denormalized from the problem so the row stays readable on its own.
///
/// Every passing run appends; the explicit save endpoint is the one that
/// deduplicates. Stats account for the history rows when counting solves.
async fn record_passing_submission(
    db: &DatabaseConnection,
    user_id: i32,
    problem_id: i32,
    payload: &RunTestCasesRequest,
) -> Result<(), AppError> {
    let Some(problem) = problem::Entity::find_by_id(problem_id).one(db).await? else {
        debug!(problem_id, "Skipping submission record for unknown problem");
        return Ok(());
    };

    let total = payload.test_cases.len() as i32;
    let now = chrono::Utc::now();

    submission::ActiveModel {
        user_id: Set(user_id),
        problem_id: Set(Some(problem_id)),
        problem_title: Set(problem.title),
        difficulty: Set(problem.difficulty),
        language: Set(payload.language),
        total_cases: Set(total),
        passed_cases: Set(total),
        passed_all: Set(true),
        code: Set(payload.code.clone()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(())
}
