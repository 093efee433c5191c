pub mod harness;

use std::time::Duration;

use common::Language;
use executor::CodeExecutor;
use tracing::warn;

use crate::models::execute::{CaseResult, TestCaseInput};

/// Sentinel reported as a case's output when the execution call itself fails.
pub const CASE_ERROR_OUTPUT: &str = "Error executing test case";

/// Strips all whitespace, so outputs differing only in spacing or line
/// endings compare equal.
pub fn normalize(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Runs `code` against each test case sequentially and returns one result
/// per case, in order.
///
/// Consecutive calls are spaced `throttle` apart to stay under the execution
/// API's request limits. A failed call marks that case as failed and moves
/// on; one flaky case never aborts the whole run.
pub async fn run_cases(
    executor: &dyn CodeExecutor,
    throttle: Duration,
    language: Language,
    code: &str,
    problem_title: &str,
    cases: &[TestCaseInput],
) -> Vec<CaseResult> {
    let mut results = Vec::with_capacity(cases.len());

    for (index, case) in cases.iter().enumerate() {
        if index > 0 && !throttle.is_zero() {
            tokio::time::sleep(throttle).await;
        }

        let source = harness::wrap_source(language, code, &case.input, problem_title);
        let case_number = (index + 1) as u32;

        match executor.execute(language, &source).await {
            Ok(response) => {
                let raw = response.run.output;
                let passed = normalize(&raw) == normalize(&case.expected_output);
                results.push(CaseResult {
                    case_number,
                    input: case.input.clone(),
                    expected: case.expected_output.clone(),
                    user_output: raw.trim().to_string(),
                    passed,
                });
            }
            Err(e) => {
                warn!(case_number, "Test case execution failed: {e}");
                results.push(CaseResult {
                    case_number,
                    input: case.input.clone(),
                    expected: case.expected_output.clone(),
                    user_output: CASE_ERROR_OUTPUT.to_string(),
                    passed: false,
                });
            }
        }
    }

    results
}
