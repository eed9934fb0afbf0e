//! Plain-text rendering of reports, issues and details.
//!
//! Everything here is a pure function from engine output to a `String`.

mod detail;
mod issues;

pub use detail::{render_acceptance_test_detail, render_feature_detail};
pub use issues::{
    render_dangling_tests, render_failing_tests, render_failing_tools, render_issue,
    render_mismatching_tests, render_missing_tests, render_validation_issues,
};

use crate::error::{SystemError, ValueError};
use crate::models::{FeatureStat, FeatureStats, Issue, Spec, StatusReport, Tool, ToolRunResult};

const COMPLETE: char = '●';
const PARTIAL: char = '○';
const UNTESTED: char = '◇';
const PASSED: char = '✔';
const FAILED: char = '✘';
const SKIPPED: char = '-';

const GOOD_STATE: &str = "Project is in good state. Every acceptance test passes, the spec is consistent and in sync with the code, and all tools succeed.";

/// Status symbol for a feature's test stats.
fn stat_symbol(stat: &FeatureStat) -> char {
    if stat.total == 0 {
        UNTESTED
    } else if stat.is_failing() {
        PARTIAL
    } else {
        COMPLETE
    }
}

/// Render the full status report.
///
/// Example output:
/// ```text
/// # Flash Cards
///
/// Mission: Help people memorize
/// Vision: Everyone remembers
///
/// ## Features
///
/// ● FE-0001 Review cards (2/2)
/// ○ FE-0002 Share decks (0/1)
///
/// ## Current Status
/// ...
/// ```
pub fn render_status(spec: &Spec, report: &StatusReport) -> String {
    let mut parts = vec![render_summary(spec, &report.feature_stats)];
    if !spec.tools.is_empty() {
        parts.push(render_tools(&spec.tools, &report.tool_results));
    }
    parts.push(format!(
        "## Current Status\n\n{}",
        render_overall_issues(&report.issues, &report.feature_stats)
    ));

    let rendered: Vec<&str> = parts.iter().map(|p| p.trim()).collect();
    format!("{}\n", rendered.join("\n\n"))
}

fn render_summary(spec: &Spec, stats: &FeatureStats) -> String {
    let mut output = format!(
        "# {}\n\nMission: {}\nVision: {}\n",
        spec.title, spec.mission, spec.vision
    );
    if spec.features.is_empty() {
        return output;
    }

    output.push_str("\n## Features\n\n");
    for feature in &spec.features {
        let stat = stats.get(&feature.id).copied().unwrap_or_default();
        output.push_str(&format!(
            "{} {} {} ({}/{})\n",
            stat_symbol(&stat),
            feature.id,
            feature.title,
            stat.passed,
            stat.total
        ));
    }
    output
}

/// One line per configured tool: passed, failed, or skipped after an earlier stop.
pub fn render_tools(tools: &[Tool], results: &[ToolRunResult]) -> String {
    let mut output = String::from("## Tools\n\n");
    for tool in tools {
        let line = match results.iter().find(|r| r.id == tool.id) {
            Some(r) if r.failed() => format!("{} {} (exit code {})", FAILED, tool.id, r.exit_code),
            Some(_) => format!("{} {}", PASSED, tool.id),
            None => format!("{} {} (skipped)", SKIPPED, tool.id),
        };
        output.push_str(&line);
        output.push('\n');
    }
    output
}

/// Pick the single most important thing to tell the user.
fn render_overall_issues(issues: &[Issue], stats: &FeatureStats) -> String {
    let failing_features: Vec<&str> = stats
        .iter()
        .filter(|(_, s)| s.is_failing())
        .map(|(id, _)| id.as_str())
        .collect();

    if issues.is_empty() {
        if failing_features.is_empty() {
            return GOOD_STATE.to_string();
        }
        return format!(
            "{} There are {} failing features: {}\n\nRecommended Next Action:\n> s4 run-ats  # Run all acceptance tests to see which tests are failing",
            FAILED,
            failing_features.len(),
            failing_features.join(", ")
        );
    }

    render_issues(issues)
}

/// First non-empty section, in priority order.
fn render_issues(issues: &[Issue]) -> String {
    for issue in issues {
        if let Issue::FailingTests { test_results } = issue {
            return render_failing_tests(test_results);
        }
    }
    for issue in issues {
        if let Issue::FailingTools { failures } = issue {
            return render_failing_tools(failures);
        }
    }

    let validation: Vec<&Issue> = issues.iter().filter(|i| i.is_validation()).collect();
    if !validation.is_empty() {
        return render_validation_issues(&validation);
    }

    let missing = with_tag(issues, "missing_at");
    if !missing.is_empty() {
        return render_missing_tests(&missing);
    }
    let dangling = with_tag(issues, "dangling_at");
    if !dangling.is_empty() {
        return render_dangling_tests(&dangling);
    }
    let mismatching = with_tag(issues, "mismatching_at");
    if !mismatching.is_empty() {
        return render_mismatching_tests(&mismatching);
    }

    let tags: Vec<&str> = issues.iter().map(Issue::tag).collect();
    format!("Unknown issues:\n\n{}", tags.join("\n"))
}

fn with_tag<'a>(issues: &'a [Issue], tag: &str) -> Vec<&'a Issue> {
    issues.iter().filter(|i| i.tag() == tag).collect()
}

/// `"<tag>: <message>"`, with a hint when the default spec file is missing.
pub fn render_system_error(error: &SystemError) -> String {
    let mut output = format!("{}: {}", error.tag(), error);
    if let SystemError::Io { path, .. } = error {
        if crate::config::is_default_spec_path(path) {
            output.push_str(
                "\n\nNo s4.yaml found. Create one in the current directory or pass --spec <file>.",
            );
        }
    }
    output
}

pub fn render_value_error(error: &ValueError) -> String {
    format!("{}: {}", error.tag(), error)
}
