//! Overall project status: tests, consistency, sync and tools in one report.

use tracing::{info, instrument};

use super::{calc_feature_stats, check_sync_issues, run_all_tools, validate};
use crate::adapters::parse_tap_flat;
use crate::error::Result;
use crate::exec::CommandExecutor;
use crate::models::{Issue, Spec, StatusReport, TestResult};

/// Run `runAcceptanceTests` and parse its TAP-flat output.
pub async fn run_acceptance_tests(
    spec: &Spec,
    exec: &dyn CommandExecutor,
) -> Result<Vec<TestResult>> {
    let output = exec.execute(&spec.connectors.run_acceptance_tests).await;
    Ok(parse_tap_flat(&spec.acceptance_tests, &output)?)
}

/// Aggregate every check into one ordered report.
///
/// Order: failing tests, consistency issues, sync issues, failing tools.
/// Fails only when the test run or the listing cannot be used.
#[instrument(skip_all, fields(title = %spec.title))]
pub async fn perform_status_check(spec: &Spec, exec: &dyn CommandExecutor) -> Result<StatusReport> {
    let mut issues = Vec::new();

    let test_results = run_acceptance_tests(spec, exec).await?;
    if test_results.iter().any(|r| !r.passed) {
        issues.push(Issue::FailingTests {
            test_results: test_results.clone(),
        });
    }

    let validation = validate(spec);
    info!("{} consistency issues", validation.len());
    issues.extend(validation);

    let sync = check_sync_issues(spec, exec).await?;
    info!("{} sync issues", sync.len());
    issues.extend(sync);

    let tool_results = run_all_tools(spec, exec).await;
    let failures: Vec<_> = tool_results.iter().filter(|t| t.failed()).cloned().collect();
    if !failures.is_empty() {
        issues.push(Issue::FailingTools { failures });
    }

    Ok(StatusReport {
        issues,
        feature_stats: calc_feature_stats(spec, &test_results),
        tool_results,
    })
}
