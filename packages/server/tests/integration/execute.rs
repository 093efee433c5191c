use serde_json::json;

use crate::common::{TestApp, routes};

mod run {
    use super::*;

    #[tokio::test]
    async fn output_is_trimmed() {
        let app = TestApp::spawn().await;
        let (token, _) = app
            .create_authenticated_user("Alice", "alice@example.com")
            .await;
        app.executor.push_output("  42\n");

        let res = app
            .post_with_token(
                routes::EXECUTE,
                &json!({
                    "language": "cpp",
                    "code": "class Solution {};",
                    "input": "5",
                    "problem_title": "Sum of Digits",
                }),
                &token,
            )
            .await;

        assert_eq!(res.status, 200, "Run failed: {}", res.text);
        assert_eq!(res.body["output"], "42");
    }

    #[tokio::test]
    async fn a_silent_run_reports_no_output() {
        let app = TestApp::spawn().await;
        let (token, _) = app
            .create_authenticated_user("Alice", "alice@example.com")
            .await;
        app.executor.push_output("");

        let res = app
            .post_with_token(
                routes::EXECUTE,
                &json!({"language": "python", "code": "pass"}),
                &token,
            )
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["output"], "No output");
    }

    #[tokio::test]
    async fn cpp_code_is_wrapped_with_a_main_before_running() {
        let app = TestApp::spawn().await;
        let (token, _) = app
            .create_authenticated_user("Alice", "alice@example.com")
            .await;
        app.executor.push_output("[0,1]");

        let res = app
            .post_with_token(
                routes::EXECUTE,
                &json!({
                    "language": "cpp",
                    "code": "vector<int> twoSum(vector<int>& nums, int target) { return {0, 1}; }",
                    "input": "nums = [2,7,11,15], target = 9",
                    "problem_title": "Two Sum",
                }),
                &token,
            )
            .await;

        assert_eq!(res.status, 200, "Run failed: {}", res.text);
        let sources = app.executor.sources();
        assert_eq!(sources.len(), 1);
        assert!(sources[0].contains("int main()"));
        assert!(sources[0].contains("vector<int> nums = {2,7,11,15};"));
        assert!(sources[0].contains("twoSum(nums, target)"));
    }

    #[tokio::test]
    async fn non_cpp_code_runs_as_written() {
        let app = TestApp::spawn().await;
        let (token, _) = app
            .create_authenticated_user("Alice", "alice@example.com")
            .await;
        app.executor.push_output("6");

        let code = "print(sum(map(int, input().split())))";
        app.post_with_token(
            routes::EXECUTE,
            &json!({
                "language": "python",
                "code": code,
                "problem_title": "Two Sum",
            }),
            &token,
        )
        .await;

        assert_eq!(app.executor.sources(), vec![code.to_string()]);
    }

    #[tokio::test]
    async fn a_backend_failure_is_reported_as_execution_failed() {
        let app = TestApp::spawn().await;
        let (token, _) = app
            .create_authenticated_user("Alice", "alice@example.com")
            .await;
        app.executor.push_failure();

        let res = app
            .post_with_token(
                routes::EXECUTE,
                &json!({"language": "cpp", "code": "int x;"}),
                &token,
            )
            .await;

        assert_eq!(res.status, 500);
        assert_eq!(res.body["code"], "EXECUTION_FAILED");
    }

    #[tokio::test]
    async fn running_requires_authentication() {
        let app = TestApp::spawn().await;

        let res = app
            .post_without_token(
                routes::EXECUTE,
                &json!({"language": "cpp", "code": "int x;"}),
            )
            .await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "TOKEN_MISSING");
    }

    #[tokio::test]
    async fn blank_code_is_rejected() {
        let app = TestApp::spawn().await;
        let (token, _) = app
            .create_authenticated_user("Alice", "alice@example.com")
            .await;

        let res = app
            .post_with_token(
                routes::EXECUTE,
                &json!({"language": "cpp", "code": "   "}),
                &token,
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}

mod testcases {
    use super::*;

    #[tokio::test]
    async fn each_case_gets_its_own_verdict() {
        let app = TestApp::spawn().await;
        let (token, _) = app
            .create_authenticated_user("Alice", "alice@example.com")
            .await;
        app.executor.push_output("3");
        app.executor.push_output("wrong");

        let res = app
            .post_with_token(
                routes::EXECUTE_TESTCASES,
                &json!({
                    "language": "cpp",
                    "code": "class Solution {};",
                    "problem_title": "Sum of Digits",
                    "test_cases": [
                        {"input": "12", "expected_output": "3"},
                        {"input": "99", "expected_output": "18"},
                    ],
                }),
                &token,
            )
            .await;

        assert_eq!(res.status, 200, "Judging failed: {}", res.text);
        assert_eq!(res.body["passed"], 1);
        assert_eq!(res.body["total"], 2);

        let results = res.body["results"].as_array().expect("results");
        assert_eq!(results[0]["case_number"], 1);
        assert_eq!(results[0]["input"], "12");
        assert_eq!(results[0]["expected"], "3");
        assert_eq!(results[0]["user_output"], "3");
        assert_eq!(results[0]["passed"], true);
        assert_eq!(results[1]["case_number"], 2);
        assert_eq!(results[1]["user_output"], "wrong");
        assert_eq!(results[1]["passed"], false);
    }

    #[tokio::test]
    async fn comparison_ignores_all_whitespace() {
        let app = TestApp::spawn().await;
        let (token, _) = app
            .create_authenticated_user("Alice", "alice@example.com")
            .await;
        app.executor.push_output("[0, 1]\n");

        let res = app
            .post_with_token(
                routes::EXECUTE_TESTCASES,
                &json!({
                    "language": "cpp",
                    "code": "class Solution {};",
                    "problem_title": "Two Sum",
                    "test_cases": [
                        {"input": "[2,7,11,15], target=9", "expected_output": "[0,1]"},
                    ],
                }),
                &token,
            )
            .await;

        assert_eq!(res.body["passed"], 1);
        let results = res.body["results"].as_array().expect("results");
        assert_eq!(results[0]["passed"], true);
        // Display output keeps interior spacing, only the ends are trimmed.
        assert_eq!(results[0]["user_output"], "[0, 1]");
    }

    #[tokio::test]
    async fn a_failed_call_marks_the_case_and_moves_on() {
        let app = TestApp::spawn().await;
        let (token, _) = app
            .create_authenticated_user("Alice", "alice@example.com")
            .await;
        app.executor.push_failure();
        app.executor.push_output("18");

        let res = app
            .post_with_token(
                routes::EXECUTE_TESTCASES,
                &json!({
                    "language": "cpp",
                    "code": "class Solution {};",
                    "problem_title": "Sum of Digits",
                    "test_cases": [
                        {"input": "12", "expected_output": "3"},
                        {"input": "99", "expected_output": "18"},
                    ],
                }),
                &token,
            )
            .await;

        assert_eq!(res.status, 200, "Judging failed: {}", res.text);
        assert_eq!(res.body["passed"], 1);

        let results = res.body["results"].as_array().expect("results");
        assert_eq!(results[0]["user_output"], "Error executing test case");
        assert_eq!(results[0]["passed"], false);
        assert_eq!(results[1]["passed"], true);
    }

    #[tokio::test]
    async fn a_fully_passing_run_records_a_submission() {
        let app = TestApp::spawn().await;
        let (token, user_id) = app
            .create_authenticated_user("Alice", "alice@example.com")
            .await;
        let problem_id = app.create_problem(&token, "Echo Twice", "medium").await;
        app.executor.push_output("1");
        app.executor.push_output("2");

        let res = app
            .post_with_token(
                routes::EXECUTE_TESTCASES,
                &json!({
                    "language": "cpp",
                    "code": "class Solution {};",
                    "problem_title": "Echo Twice",
                    "problem_id": problem_id,
                    "test_cases": [
                        {"input": "1", "expected_output": "1"},
                        {"input": "2", "expected_output": "2"},
                    ],
                }),
                &token,
            )
            .await;

        assert_eq!(res.body["passed"], 2);
        assert_eq!(res.body["total"], 2);

        let subs = app
            .get_with_token(&routes::user_submissions(user_id), &token)
            .await;
        let records = subs.body.as_array().expect("array of submissions");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["problem_id"], problem_id);
        assert_eq!(records[0]["problem_title"], "Echo Twice");
        assert_eq!(records[0]["difficulty"], "medium");
        assert_eq!(records[0]["passed_all"], true);
        assert_eq!(records[0]["total_cases"], 2);
        assert_eq!(records[0]["passed_cases"], 2);
    }

    #[tokio::test]
    async fn every_passing_run_appends_to_the_history() {
        let app = TestApp::spawn().await;
        let (token, user_id) = app
            .create_authenticated_user("Alice", "alice@example.com")
            .await;
        let problem_id = app.create_problem(&token, "Echo Twice", "easy").await;

        let body = json!({
            "language": "cpp",
            "code": "class Solution {};",
            "problem_title": "Echo Twice",
            "problem_id": problem_id,
            "test_cases": [
                {"input": "1", "expected_output": "1"},
                {"input": "2", "expected_output": "2"},
            ],
        });
        for _ in 0..2 {
            app.executor.push_output("1");
            app.executor.push_output("2");
            let res = app
                .post_with_token(routes::EXECUTE_TESTCASES, &body, &token)
                .await;
            assert_eq!(res.body["passed"], 2);
        }

        let subs = app
            .get_with_token(&routes::user_submissions(user_id), &token)
            .await;
        assert_eq!(subs.body.as_array().map(|a| a.len()), Some(2));
    }

    #[tokio::test]
    async fn a_partial_pass_records_nothing() {
        let app = TestApp::spawn().await;
        let (token, user_id) = app
            .create_authenticated_user("Alice", "alice@example.com")
            .await;
        let problem_id = app.create_problem(&token, "Echo Twice", "easy").await;
        app.executor.push_output("1");
        app.executor.push_output("nope");

        let res = app
            .post_with_token(
                routes::EXECUTE_TESTCASES,
                &json!({
                    "language": "cpp",
                    "code": "class Solution {};",
                    "problem_title": "Echo Twice",
                    "problem_id": problem_id,
                    "test_cases": [
                        {"input": "1", "expected_output": "1"},
                        {"input": "2", "expected_output": "2"},
                    ],
                }),
                &token,
            )
            .await;

        assert_eq!(res.body["passed"], 1);

        let subs = app
            .get_with_token(&routes::user_submissions(user_id), &token)
            .await;
        assert_eq!(subs.body.as_array().map(|a| a.len()), Some(0));
    }

    #[tokio::test]
    async fn an_unknown_problem_id_does_not_fail_the_run() {
        let app = TestApp::spawn().await;
        let (token, user_id) = app
            .create_authenticated_user("Alice", "alice@example.com")
            .await;
        app.executor.push_output("1");

        let res = app
            .post_with_token(
                routes::EXECUTE_TESTCASES,
                &json!({
                    "language": "cpp",
                    "code": "class Solution {};",
                    "problem_title": "Ghost",
                    "problem_id": 424242,
                    "test_cases": [
                        {"input": "1", "expected_output": "1"},
                    ],
                }),
                &token,
            )
            .await;

        assert_eq!(res.status, 200, "Judging failed: {}", res.text);
        assert_eq!(res.body["passed"], 1);

        let subs = app
            .get_with_token(&routes::user_submissions(user_id), &token)
            .await;
        assert_eq!(subs.body.as_array().map(|a| a.len()), Some(0));
    }

    #[tokio::test]
    async fn an_empty_case_list_is_rejected() {
        let app = TestApp::spawn().await;
        let (token, _) = app
            .create_authenticated_user("Alice", "alice@example.com")
            .await;

        let res = app
            .post_with_token(
                routes::EXECUTE_TESTCASES,
                &json!({
                    "language": "cpp",
                    "code": "class Solution {};",
                    "test_cases": [],
                }),
                &token,
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}
