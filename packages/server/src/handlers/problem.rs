use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use tracing::instrument;

use common::Difficulty;

use crate::entity::{problem, submission, test_case};
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::problem::*;
use crate::seed;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/",
    tag = "Problems",
    operation_id = "createProblem",
    summary = "Create a new problem",
    description = "Creates a new problem together with its ordered test cases.",
    request_body = CreateProblemRequest,
    responses(
        (status = 201, description = "Problem created", body = ProblemResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 409, description = "A problem with this title already exists (CONFLICT)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(
    skip(state, auth_user, payload),
    fields(user_id = auth_user.user_id, title = %payload.title)
)]
pub async fn create_problem(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateProblemRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_problem(&payload)?;

    let title = payload.title.trim().to_string();
    let now = chrono::Utc::now();

    let txn = state.db.begin().await?;

    let new_problem = problem::ActiveModel {
        title: Set(title.clone()),
        description: Set(payload.description),
        difficulty: Set(payload.difficulty),
        example_input: Set(payload.example_input),
        example_output: Set(payload.example_output),
        starter_code: Set(payload.starter_code),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let model = new_problem.insert(&txn).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict(format!("A problem titled '{}' already exists", title))
        }
        _ => AppError::from(e),
    })?;

    let cases = insert_test_cases(&txn, model.id, &payload.test_cases, now).await?;

    txn.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(ProblemResponse::from_parts(model, cases)),
    ))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Problems",
    operation_id = "listProblems",
    summary = "List problems",
    description = "Returns all problems with their test cases, ordered by difficulty and title. Optionally filtered by difficulty.",
    params(ProblemListQuery),
    responses(
        (status = 200, description = "List of problems", body = Vec<ProblemResponse>),
        (status = 400, description = "Unknown difficulty (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, query), fields(user_id = auth_user.user_id))]
pub async fn list_problems(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<ProblemListQuery>,
) -> Result<Json<Vec<ProblemResponse>>, AppError> {
    let mut select = problem::Entity::find();

    if let Some(ref raw) = query.difficulty {
        let difficulty = raw
            .parse::<Difficulty>()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        select = select.filter(problem::Column::Difficulty.eq(difficulty));
    }

    let rows = select
        .order_by_asc(problem::Column::Title)
        .find_with_related(test_case::Entity)
        .order_by_asc(test_case::Column::Position)
        .all(&state.db)
        .await?;

    let mut data: Vec<ProblemResponse> = rows
        .into_iter()
        .map(|(model, cases)| ProblemResponse::from_parts(model, cases))
        .collect();
    // Difficulty is stored as a string, so rank it here instead of in SQL.
    // The sort is stable, titles stay alphabetical within each difficulty.
    data.sort_by_key(|p| p.difficulty);

    Ok(Json(data))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Problems",
    operation_id = "getProblem",
    summary = "Get a problem by ID",
    params(("id" = i32, Path, description = "Problem ID")),
    responses(
        (status = 200, description = "Problem details", body = ProblemResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Problem not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id = auth_user.user_id, id))]
pub async fn get_problem(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProblemResponse>, AppError> {
    let model = find_problem(&state.db, id).await?;
    let cases = find_test_cases(&state.db, id).await?;

    Ok(Json(ProblemResponse::from_parts(model, cases)))
}

#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Problems",
    operation_id = "updateProblem",
    summary = "Update a problem",
    description = "Partially updates a problem. When `test_cases` is present the full test case list is replaced.",
    params(("id" = i32, Path, description = "Problem ID")),
    request_body = UpdateProblemRequest,
    responses(
        (status = 200, description = "Problem updated", body = ProblemResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Problem not found (NOT_FOUND)", body = ErrorBody),
        (status = 409, description = "A problem with this title already exists (CONFLICT)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(
    skip(state, auth_user, payload),
    fields(user_id = auth_user.user_id, id)
)]
pub async fn update_problem(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateProblemRequest>,
) -> Result<Json<ProblemResponse>, AppError> {
    validate_update_problem(&payload)?;

    if payload == UpdateProblemRequest::default() {
        let existing = find_problem(&state.db, id).await?;
        let cases = find_test_cases(&state.db, id).await?;
        return Ok(Json(ProblemResponse::from_parts(existing, cases)));
    }

    let now = chrono::Utc::now();
    let txn = state.db.begin().await?;

    let existing = find_problem(&txn, id).await?;
    let mut active: problem::ActiveModel = existing.into();

    if let Some(ref title) = payload.title {
        active.title = Set(title.trim().to_string());
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(difficulty) = payload.difficulty {
        active.difficulty = Set(difficulty);
    }
    if let Some(example_input) = payload.example_input {
        active.example_input = Set(example_input);
    }
    if let Some(example_output) = payload.example_output {
        active.example_output = Set(example_output);
    }
    if let Some(starter_code) = payload.starter_code {
        active.starter_code = Set(starter_code);
    }
    active.updated_at = Set(now);

    let model = active.update(&txn).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict("A problem with this title already exists".into())
        }
        _ => AppError::from(e),
    })?;

    let cases = match payload.test_cases {
        Some(replacement) => {
            test_case::Entity::delete_many()
                .filter(test_case::Column::ProblemId.eq(id))
                .exec(&txn)
                .await?;
            insert_test_cases(&txn, id, &replacement, now).await?
        }
        None => find_test_cases(&txn, id).await?,
    };

    txn.commit().await?;

    Ok(Json(ProblemResponse::from_parts(model, cases)))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Problems",
    operation_id = "deleteProblem",
    summary = "Delete a problem by ID",
    description = "Permanently deletes a problem and its test cases. Submissions recorded against it are kept and detached.",
    params(("id" = i32, Path, description = "Problem ID")),
    responses(
        (status = 204, description = "Problem deleted"),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Problem not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id = auth_user.user_id, id))]
pub async fn delete_problem(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let txn = state.db.begin().await?;

    find_problem(&txn, id).await?;

    // Submission history outlives the problem; the denormalized title keeps
    // the record readable after the link is severed.
    submission::Entity::update_many()
        .col_expr(submission::Column::ProblemId, Expr::value(Value::Int(None)))
        .filter(submission::Column::ProblemId.eq(id))
        .exec(&txn)
        .await?;

    test_case::Entity::delete_many()
        .filter(test_case::Column::ProblemId.eq(id))
        .exec(&txn)
        .await?;
    problem::Entity::delete_by_id(id).exec(&txn).await?;

    txn.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/seed",
    tag = "Problems",
    operation_id = "seedProblems",
    summary = "Seed the built-in problem catalog",
    description = "Inserts the bundled practice problems, refreshing any that already exist. Existing user-created problems are left alone.",
    responses(
        (status = 200, description = "Catalog seeded", body = SeedResponse),
    ),
)]
#[instrument(skip(state))]
pub async fn seed_problems(
    State(state): State<AppState>,
) -> Result<Json<SeedResponse>, AppError> {
    let outcome = seed::seed_problems(&state.db).await?;

    Ok(Json(SeedResponse {
        created: outcome.created,
        updated: outcome.updated,
    }))
}

async fn find_problem<C: ConnectionTrait>(db: &C, id: i32) -> Result<problem::Model, AppError> {
    problem::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Problem not found".into()))
}

async fn find_test_cases<C: ConnectionTrait>(
    db: &C,
    problem_id: i32,
) -> Result<Vec<test_case::Model>, AppError> {
    Ok(test_case::Entity::find()
        .filter(test_case::Column::ProblemId.eq(problem_id))
        .order_by_asc(test_case::Column::Position)
        .all(db)
        .await?)
}

/// Insert test cases in request order, positions assigned from zero.
async fn insert_test_cases(
    txn: &DatabaseTransaction,
    problem_id: i32,
    cases: &[TestCaseBody],
    now: chrono::DateTime<chrono::Utc>,
) -> Result<Vec<test_case::Model>, AppError> {
    let mut inserted = Vec::with_capacity(cases.len());
    for (position, case) in cases.iter().enumerate() {
        let model = test_case::ActiveModel {
            problem_id: Set(problem_id),
            input: Set(case.input.clone()),
            expected_output: Set(case.expected_output.clone()),
            position: Set(position as i32),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(txn)
        .await?;
        inserted.push(model);
    }
    Ok(inserted)
}
