use std::cmp;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{Duration, Utc};
use sea_orm::*;
use tracing::instrument;

use crate::entity::{problem, submission};
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::submission::*;
use crate::state::AppState;

/// Check rate limit for a user.
///
/// Uses an optimistic (non-locking) approach, so concurrent requests within a
/// very short window may both pass the check before either insert completes.
/// Accepted trade-off, pessimistic locking would add latency to every save.
async fn check_rate_limit(
    db: &DatabaseConnection,
    user_id: i32,
    limit_per_minute: u32,
) -> Result<(), AppError> {
    if limit_per_minute == 0 {
        return Ok(()); // Rate limiting disabled
    }

    let one_minute_ago = Utc::now() - Duration::minutes(1);

    let count = submission::Entity::find()
        .filter(submission::Column::UserId.eq(user_id))
        .filter(submission::Column::CreatedAt.gt(one_minute_ago))
        .count(db)
        .await?;

    if count >= limit_per_minute as u64 {
        let oldest = submission::Entity::find()
            .filter(submission::Column::UserId.eq(user_id))
            .filter(submission::Column::CreatedAt.gt(one_minute_ago))
            .order_by_asc(submission::Column::CreatedAt)
            .one(db)
            .await?;

        let retry_after = oldest
            .map(|s| {
                let expires = s.created_at + Duration::minutes(1);
                cmp::max((expires - Utc::now()).num_seconds(), 1) as u64
            })
            .unwrap_or(60);

        return Err(AppError::RateLimited { retry_after });
    }

    Ok(())
}

/// Find a problem by ID or return 404.
async fn find_problem<C: ConnectionTrait>(db: &C, id: i32) -> Result<problem::Model, AppError> {
    problem::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Problem not found".into()))
}

/// Save or replace the caller's submission for a problem.
#[utoipa::path(
    post,
    path = "/",
    tag = "Submissions",
    operation_id = "saveSubmission",
    summary = "Save a submission",
    description = "Records a solve attempt. One submission is kept per user and problem, so saving again for the same problem replaces the earlier record. Submissions without a problem ID are keyed by title instead.",
    request_body = SaveSubmissionRequest,
    responses(
        (status = 200, description = "Existing submission replaced", body = SubmissionResponse),
        (status = 201, description = "Submission created", body = SubmissionResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Problem not found (NOT_FOUND)", body = ErrorBody),
        (status = 429, description = "Rate limit exceeded (RATE_LIMITED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(
    skip(state, auth_user, payload),
    fields(user_id = auth_user.user_id, problem_title = %payload.problem_title)
)]
pub async fn save_submission(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<SaveSubmissionRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_save_submission(&payload)?;
    check_rate_limit(
        &state.db,
        auth_user.user_id,
        state.config.submission.rate_limit_per_minute,
    )
    .await?;

    let title = payload.problem_title.trim().to_string();

    let txn = state.db.begin().await?;

    if let Some(problem_id) = payload.problem_id {
        find_problem(&txn, problem_id).await?;
    }

    let mut select = submission::Entity::find()
        .filter(submission::Column::UserId.eq(auth_user.user_id));
    select = match payload.problem_id {
        Some(problem_id) => select.filter(submission::Column::ProblemId.eq(problem_id)),
        // Detached submissions fall back to the title as their identity.
        None => select
            .filter(submission::Column::ProblemId.is_null())
            .filter(submission::Column::ProblemTitle.eq(&title)),
    };
    let existing = select.one(&txn).await?;

    let now = Utc::now();
    let (model, created) = match existing {
        Some(model) => {
            let mut active: submission::ActiveModel = model.into();
            active.problem_title = Set(title);
            active.difficulty = Set(payload.difficulty);
            active.language = Set(payload.language);
            active.total_cases = Set(payload.total_cases);
            active.passed_cases = Set(payload.passed_cases);
            active.passed_all = Set(payload.passed_all);
            // An empty body keeps whatever code was stored before.
            if !payload.code.is_empty() {
                active.code = Set(payload.code.clone());
            }
            active.updated_at = Set(now);
            (active.update(&txn).await?, false)
        }
        None => {
            let model = submission::ActiveModel {
                user_id: Set(auth_user.user_id),
                problem_id: Set(payload.problem_id),
                problem_title: Set(title),
                difficulty: Set(payload.difficulty),
                language: Set(payload.language),
                total_cases: Set(payload.total_cases),
                passed_cases: Set(payload.passed_cases),
                passed_all: Set(payload.passed_all),
                code: Set(payload.code.clone()),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            (model, true)
        }
    };

    txn.commit().await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(SubmissionResponse::from(model))))
}

/// List a user's submissions, most recently touched first.
#[utoipa::path(
    get,
    path = "/{user_id}",
    tag = "Submissions",
    operation_id = "listUserSubmissions",
    summary = "List a user's submissions",
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Submissions for the user, empty if they have none", body = Vec<SubmissionResponse>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(requester = auth_user.user_id, user_id))]
pub async fn list_user_submissions(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<SubmissionResponse>>, AppError> {
    let submissions = submission::Entity::find()
        .filter(submission::Column::UserId.eq(user_id))
        .order_by_desc(submission::Column::UpdatedAt)
        .all(&state.db)
        .await?;

    Ok(Json(
        submissions
            .into_iter()
            .map(SubmissionResponse::from)
            .collect(),
    ))
}
