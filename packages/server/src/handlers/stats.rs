use std::collections::HashSet;

use axum::Json;
use axum::extract::{Path, State};
use sea_orm::*;
use tracing::instrument;

use crate::entity::submission;
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::models::stats::{DifficultyCounts, RecentSubmission, StatsResponse};
use crate::state::AppState;

/// Aggregate a user's practice statistics.
#[utoipa::path(
    get,
    path = "/{user_id}",
    tag = "Stats",
    operation_id = "userStats",
    summary = "Get a user's statistics",
    description = "Returns solve counts, accuracy, a per-difficulty breakdown of distinct solved problems, and the ten most recent submissions. A user with no submissions gets all-zero counts.",
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Aggregated statistics", body = StatsResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(requester = auth_user.user_id, user_id))]
pub async fn user_stats(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<StatsResponse>, AppError> {
    let submissions = submission::Entity::find()
        .filter(submission::Column::UserId.eq(user_id))
        .order_by_desc(submission::Column::UpdatedAt)
        .all(&state.db)
        .await?;

    if submissions.is_empty() {
        return Ok(Json(StatsResponse::empty()));
    }

    // Distinct solved problems, detached records fall back to title identity.
    let mut solved = HashSet::new();
    let mut difficulty_counts = DifficultyCounts::default();
    for s in &submissions {
        if !s.passed_all {
            continue;
        }
        let key = match s.problem_id {
            Some(id) => format!("id:{}", id),
            None => format!("title:{}", s.problem_title),
        };
        if solved.insert(key) {
            difficulty_counts.bump(s.difficulty);
        }
    }

    let total_submissions = submissions.len() as u32;
    let passed_submissions = submissions.iter().filter(|s| s.passed_all).count() as u32;
    let accuracy =
        ((passed_submissions as f64 / total_submissions as f64) * 100.0).round() as u32;

    let recent = submissions.iter().take(10).map(RecentSubmission::from).collect();

    Ok(Json(StatsResponse {
        total_solved: solved.len() as u32,
        total_submissions,
        passed_submissions,
        accuracy,
        difficulty_counts,
        recent,
    }))
}
