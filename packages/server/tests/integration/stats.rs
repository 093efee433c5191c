use serde_json::json;

use crate::common::{TestApp, routes};

fn save_body(title: &str, difficulty: &str, passed: i32, total: i32) -> serde_json::Value {
    json!({
        "problem_id": null,
        "problem_title": title,
        "difficulty": difficulty,
        "language": "cpp",
        "total_cases": total,
        "passed_cases": passed,
        "passed_all": passed == total,
        "code": "class Solution {};",
    })
}

#[tokio::test]
async fn a_fresh_user_has_all_zero_stats() {
    let app = TestApp::spawn().await;
    let (token, user_id) = app
        .create_authenticated_user("Alice", "alice@example.com")
        .await;

    let res = app.get_with_token(&routes::stats(user_id), &token).await;

    assert_eq!(res.status, 200, "Stats failed: {}", res.text);
    assert_eq!(res.body["total_solved"], 0);
    assert_eq!(res.body["total_submissions"], 0);
    assert_eq!(res.body["passed_submissions"], 0);
    assert_eq!(res.body["accuracy"], 0);
    assert_eq!(res.body["difficulty_counts"]["easy"], 0);
    assert_eq!(res.body["difficulty_counts"]["medium"], 0);
    assert_eq!(res.body["difficulty_counts"]["hard"], 0);
    assert_eq!(res.body["recent"].as_array().map(|a| a.len()), Some(0));
}

#[tokio::test]
async fn stats_aggregate_solves_and_accuracy() {
    let app = TestApp::spawn().await;
    let (token, user_id) = app
        .create_authenticated_user("Alice", "alice@example.com")
        .await;

    app.post_with_token(
        routes::SUBMISSIONS,
        &save_body("Two Sum", "easy", 10, 10),
        &token,
    )
    .await;
    app.post_with_token(
        routes::SUBMISSIONS,
        &save_body("Reverse Number", "medium", 8, 8),
        &token,
    )
    .await;
    app.post_with_token(
        routes::SUBMISSIONS,
        &save_body("Valid Parentheses", "easy", 3, 10),
        &token,
    )
    .await;

    let res = app.get_with_token(&routes::stats(user_id), &token).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["total_solved"], 2);
    assert_eq!(res.body["total_submissions"], 3);
    assert_eq!(res.body["passed_submissions"], 2);
    // 2 of 3 passing rounds to 67 percent.
    assert_eq!(res.body["accuracy"], 67);
    assert_eq!(res.body["difficulty_counts"]["easy"], 1);
    assert_eq!(res.body["difficulty_counts"]["medium"], 1);
    assert_eq!(res.body["difficulty_counts"]["hard"], 0);
}

#[tokio::test]
async fn resubmitting_a_solved_problem_does_not_double_count() {
    let app = TestApp::spawn().await;
    let (token, user_id) = app
        .create_authenticated_user("Alice", "alice@example.com")
        .await;

    app.post_with_token(
        routes::SUBMISSIONS,
        &save_body("Two Sum", "easy", 10, 10),
        &token,
    )
    .await;
    app.post_with_token(
        routes::SUBMISSIONS,
        &save_body("Two Sum", "easy", 10, 10),
        &token,
    )
    .await;

    let res = app.get_with_token(&routes::stats(user_id), &token).await;

    assert_eq!(res.body["total_solved"], 1);
    assert_eq!(res.body["total_submissions"], 1);
    assert_eq!(res.body["difficulty_counts"]["easy"], 1);
}

#[tokio::test]
async fn a_failed_attempt_does_not_count_as_solved() {
    let app = TestApp::spawn().await;
    let (token, user_id) = app
        .create_authenticated_user("Alice", "alice@example.com")
        .await;

    app.post_with_token(
        routes::SUBMISSIONS,
        &save_body("Two Sum", "easy", 9, 10),
        &token,
    )
    .await;

    let res = app.get_with_token(&routes::stats(user_id), &token).await;

    assert_eq!(res.body["total_solved"], 0);
    assert_eq!(res.body["total_submissions"], 1);
    assert_eq!(res.body["passed_submissions"], 0);
    assert_eq!(res.body["accuracy"], 0);
    assert_eq!(res.body["difficulty_counts"]["easy"], 0);
}

#[tokio::test]
async fn recent_lists_at_most_ten_newest_first() {
    let app = TestApp::spawn().await;
    let (token, user_id) = app
        .create_authenticated_user("Alice", "alice@example.com")
        .await;

    for i in 1..=12 {
        app.post_with_token(
            routes::SUBMISSIONS,
            &save_body(&format!("Problem {i:02}"), "easy", 1, 1),
            &token,
        )
        .await;
    }

    let res = app.get_with_token(&routes::stats(user_id), &token).await;

    assert_eq!(res.body["total_submissions"], 12);
    assert_eq!(res.body["total_solved"], 12);
    let recent = res.body["recent"].as_array().expect("recent");
    assert_eq!(recent.len(), 10);
    assert_eq!(recent[0]["problem_title"], "Problem 12");
    assert_eq!(recent[9]["problem_title"], "Problem 03");
    assert!(recent[0]["date"].is_string());
}

#[tokio::test]
async fn stats_require_authentication() {
    let app = TestApp::spawn().await;
    let (_, user_id) = app
        .create_authenticated_user("Alice", "alice@example.com")
        .await;

    let res = app.get_without_token(&routes::stats(user_id)).await;

    assert_eq!(res.status, 401);
    assert_eq!(res.body["code"], "TOKEN_MISSING");
}
