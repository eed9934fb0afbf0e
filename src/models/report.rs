use indexmap::IndexMap;
use serde::Serialize;

use super::{AcceptanceTest, Issue};

/// Outcome of one acceptance test, as parsed from the runner output.
///
/// `output` is only ever set for a failed test with captured diagnostics.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TestResult {
    pub id: String,
    pub test: AcceptanceTest,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

/// Result of running a single configured tool.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ToolRunResult {
    pub id: String,
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub recommended_next_actions: String,
}

impl ToolRunResult {
    pub fn failed(&self) -> bool {
        self.exit_code != 0
    }
}

/// Passing vs. total covering acceptance tests for one feature.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct FeatureStat {
    pub passed: usize,
    pub total: usize,
}

impl FeatureStat {
    pub fn is_failing(&self) -> bool {
        self.passed < self.total
    }
}

/// Per-feature stats keyed by feature id, in spec order.
pub type FeatureStats = IndexMap<String, FeatureStat>;

/// Everything a status check produces.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub issues: Vec<Issue>,
    pub feature_stats: FeatureStats,
    pub tool_results: Vec<ToolRunResult>,
}
