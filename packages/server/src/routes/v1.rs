use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/auth", auth_routes())
        .nest("/problems", problem_routes())
        .nest("/execute", execute_routes())
        .nest("/submissions", submission_routes())
        .nest("/stats", stats_routes())
}

fn auth_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::auth::signup))
        .routes(routes!(handlers::auth::login))
        .routes(routes!(handlers::auth::me))
}

fn problem_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::problem::list_problems,
            handlers::problem::create_problem
        ))
        .routes(routes!(handlers::problem::seed_problems))
        .routes(routes!(
            handlers::problem::get_problem,
            handlers::problem::update_problem,
            handlers::problem::delete_problem
        ))
}

fn execute_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::execute::run_code))
        .routes(routes!(handlers::execute::run_test_cases))
}

fn submission_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::submission::save_submission))
        .routes(routes!(handlers::submission::list_user_submissions))
}

fn stats_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handlers::stats::user_stats))
}
