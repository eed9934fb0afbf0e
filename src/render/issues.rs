use crate::models::{Issue, ItemType, TestResult, ToolRunResult};

/// Failing tests shown in full; the rest are only counted.
const MAX_FAILING_TESTS_SHOWN: usize = 3;

/// One-line description of a single issue.
pub fn render_issue(issue: &Issue) -> String {
    match issue {
        Issue::MissingSection { section } => format!("Section \"{}\" is empty", section),
        Issue::UncoveredItem { id, item_type } => match item_type {
            ItemType::BusinessObjective => {
                format!("Business objective {} is not covered by any feature", id)
            }
            ItemType::Feature => format!("Feature {} is not covered by any acceptance test", id),
        },
        Issue::InvalidPrereq { id, referenced_id } => {
            format!("Feature {} lists unknown prerequisite {}", id, referenced_id)
        }
        Issue::InvalidBo { id, referenced_id } => format!(
            "Feature {} covers unknown business objective {}",
            id, referenced_id
        ),
        Issue::InvalidFe { id, referenced_id } => format!(
            "Acceptance test {} covers unknown feature {}",
            id, referenced_id
        ),
        Issue::CircularDep { id } => format!("Feature {} has a circular dependency", id),
        Issue::InvalidConceptRef { id, concept_label } => {
            format!("{} references undefined concept [[{}]]", id, concept_label)
        }
        Issue::DuplicateId { id } => format!("Id {} is used more than once", id),
        Issue::DuplicateConcept { label } => {
            format!("Concept \"{}\" is defined more than once", label)
        }
        Issue::UnusedConcept { label } => format!("Concept \"{}\" is never referenced", label),
        Issue::MissingAt { id, file_path } => {
            format!("Acceptance test {} is not implemented ({})", id, file_path)
        }
        Issue::DanglingAt { id, file_path } => {
            format!("Acceptance test {} is not in the spec ({})", id, file_path)
        }
        Issue::MismatchingAt { id, file_path, .. } => {
            format!("Acceptance test {} does not match the spec ({})", id, file_path)
        }
        Issue::FailingTests { test_results } => format!(
            "{} acceptance tests failing",
            test_results.iter().filter(|r| !r.passed).count()
        ),
        Issue::FailingTools { failures } => {
            let ids: Vec<&str> = failures.iter().map(|f| f.id.as_str()).collect();
            format!("Failing tools: {}", ids.join(", "))
        }
    }
}

pub fn render_validation_issues(issues: &[&Issue]) -> String {
    let mut output = format!(
        "✘ Found {} spec consistency issues:\n\n",
        issues.len()
    );
    for issue in issues {
        output.push_str("- ");
        output.push_str(&render_issue(issue));
        output.push('\n');
    }
    output.push_str("\nRecommended Next Action:\n> Fix the spec file, then run `s4 validate`");
    output
}

/// The first few failing tests with their diagnostics.
pub fn render_failing_tests(results: &[TestResult]) -> String {
    let failing: Vec<&TestResult> = results.iter().filter(|r| !r.passed).collect();
    if failing.is_empty() {
        return "✔ All acceptance tests passed".to_string();
    }

    let mut output = format!("✘ {} acceptance tests failing\n", failing.len());
    for result in failing.iter().take(MAX_FAILING_TESTS_SHOWN) {
        output.push_str(&format!("\n{}: {}\n", result.id, result.test.description()));
        if let Some(ref diagnostics) = result.output {
            for line in diagnostics.lines() {
                output.push_str("    ");
                output.push_str(line);
                output.push('\n');
            }
        }
    }
    if failing.len() > MAX_FAILING_TESTS_SHOWN {
        output.push_str(&format!(
            "\n... and {} more\n",
            failing.len() - MAX_FAILING_TESTS_SHOWN
        ));
    }
    output.push_str(&format!(
        "\nRecommended Next Action:\n> s4 run-at {}  # Fix the implementation until this test passes",
        failing[0].id
    ));
    output
}

pub fn render_failing_tools(failures: &[ToolRunResult]) -> String {
    let mut output = format!("✘ {} tools failing\n", failures.len());
    for failure in failures {
        output.push_str(&format!(
            "\n{} (exit code {})\n",
            failure.id, failure.exit_code
        ));
        for stream in [&failure.stdout, &failure.stderr] {
            for line in stream.trim().lines() {
                output.push_str("    ");
                output.push_str(line);
                output.push('\n');
            }
        }
        if !failure.recommended_next_actions.is_empty() {
            output.push_str(&format!("> {}\n", failure.recommended_next_actions));
        }
    }
    output
}

/// Only the next test to implement is shown; the order comes from the sync check.
pub fn render_missing_tests(missing: &[&Issue]) -> String {
    let Some(Issue::MissingAt { id, file_path }) = missing.first() else {
        return String::new();
    };
    format!(
        "✘ {} acceptance tests are not implemented\n\nNext: {} at {}\n\nRecommended Next Action:\n> s4 info {}  # Read the test, then implement it at {}",
        missing.len(),
        id,
        file_path,
        id,
        file_path
    )
}

pub fn render_dangling_tests(dangling: &[&Issue]) -> String {
    let mut output = format!(
        "✘ {} implemented acceptance tests are not in the spec\n\n",
        dangling.len()
    );
    for issue in dangling {
        if let Issue::DanglingAt { id, file_path } = issue {
            output.push_str(&format!("- {} ({})\n", id, file_path));
        }
    }
    output.push_str("\nRecommended Next Action:\n> Add these tests to the spec or delete them");
    output
}

pub fn render_mismatching_tests(mismatching: &[&Issue]) -> String {
    let mut output = format!(
        "✘ {} acceptance tests do not match the spec\n",
        mismatching.len()
    );
    for issue in mismatching {
        if let Issue::MismatchingAt {
            id,
            expected,
            actual,
            file_path,
        } = issue
        {
            output.push_str(&format!(
                "\n{} ({})\n  expected: {}\n  actual:   {}\n",
                id, file_path, expected, actual
            ));
        }
    }
    output.push_str("\nRecommended Next Action:\n> Update the test titles to match the spec");
    output
}
