//! CLI command handlers.
//!
//! Each handler maps an already-loaded spec to a [`CommandOutput`]: what to
//! print on stdout and stderr, and the process exit code.

use tracing::info;

use crate::engine;
use crate::error::{SystemError, ValueError};
use crate::exec::{substitute_id, CommandExecutor, CommandOutput};
use crate::models::Spec;
use crate::render;

// ============================================================
// Error Handling
// ============================================================

pub fn system_error(error: &SystemError) -> CommandOutput {
    CommandOutput::failure(render::render_system_error(error), 1)
}

pub fn value_error(error: &ValueError) -> CommandOutput {
    CommandOutput::failure(render::render_value_error(error), 1)
}

fn passthrough(output: CommandOutput) -> CommandOutput {
    CommandOutput {
        stdout: output.stdout.trim_end().to_string(),
        stderr: output.stderr.trim_end().to_string(),
        exit_code: output.exit_code,
    }
}

// ============================================================
// Status & Validation
// ============================================================

/// Full status report; exits 1 if any issue was found.
pub async fn status(spec: &Spec, exec: &dyn CommandExecutor) -> CommandOutput {
    match engine::perform_status_check(spec, exec).await {
        Ok(report) => {
            info!("Status check found {} issues", report.issues.len());
            CommandOutput {
                stdout: render::render_status(spec, &report),
                stderr: String::new(),
                exit_code: if report.issues.is_empty() { 0 } else { 1 },
            }
        }
        Err(e) => system_error(&e),
    }
}

/// Consistency issues only. Silent on success.
pub fn validate(spec: &Spec) -> CommandOutput {
    let issues = engine::validate(spec);
    if issues.is_empty() {
        return CommandOutput::default();
    }
    let refs: Vec<_> = issues.iter().collect();
    CommandOutput::failure(render::render_validation_issues(&refs), 1)
}

// ============================================================
// Acceptance Tests
// ============================================================

pub async fn locate_at(spec: &Spec, id: &str, exec: &dyn CommandExecutor) -> CommandOutput {
    run_connector(&spec.connectors.locate_acceptance_test, id, exec).await
}

pub async fn run_at(spec: &Spec, id: &str, exec: &dyn CommandExecutor) -> CommandOutput {
    run_connector(&spec.connectors.run_acceptance_test, id, exec).await
}

async fn run_connector(template: &str, id: &str, exec: &dyn CommandExecutor) -> CommandOutput {
    if id.is_empty() {
        return value_error(&ValueError::new(id, "Acceptance test ID must not be empty"));
    }
    passthrough(exec.execute(&substitute_id(template, id)).await)
}

/// Run every acceptance test and summarize the failures.
pub async fn run_ats(spec: &Spec, exec: &dyn CommandExecutor) -> CommandOutput {
    match engine::run_acceptance_tests(spec, exec).await {
        Ok(results) => CommandOutput::success(render::render_failing_tests(&results)),
        Err(e) => system_error(&e),
    }
}

/// Details for a feature (`FE-`) or acceptance test (`AT-`).
pub fn info(spec: &Spec, id: &str) -> CommandOutput {
    let rendered = if id.starts_with("FE-") {
        engine::feature_detail(spec, id).map(|d| render::render_feature_detail(&d))
    } else if id.starts_with("AT-") {
        engine::acceptance_test_detail(spec, id).map(|d| render::render_acceptance_test_detail(&d))
    } else {
        return CommandOutput::failure(
            "value_error: Invalid ID format. Must start with 'FE-' or 'AT-'",
            1,
        );
    };

    match rendered {
        Ok(stdout) => CommandOutput::success(stdout),
        Err(e) => value_error(&e),
    }
}

// ============================================================
// Tools
// ============================================================

/// Run one tool, appending its recommended next actions on failure.
pub async fn tool(spec: &Spec, tool_id: &str, exec: &dyn CommandExecutor) -> CommandOutput {
    let Some(tool) = spec.tools.iter().find(|t| t.id == tool_id) else {
        return CommandOutput::failure(
            format!("value_error: Tool \"{}\" not found in spec", tool_id),
            1,
        );
    };

    let output = passthrough(exec.execute(&tool.command).await);
    if output.is_success() || tool.recommended_next_actions.is_empty() {
        return output;
    }

    let separator = if output.stdout.is_empty() { "" } else { "\n" };
    CommandOutput {
        stdout: format!(
            "{}{}{}",
            output.stdout, separator, tool.recommended_next_actions
        )
        .trim()
        .to_string(),
        ..output
    }
}

/// Run every tool without stopping; one `id: success|failure` line each.
pub async fn tools(spec: &Spec, exec: &dyn CommandExecutor) -> CommandOutput {
    let mut lines = Vec::with_capacity(spec.tools.len());
    let mut failed = false;

    for tool in &spec.tools {
        let output = exec.execute(&tool.command).await;
        let verdict = if output.is_success() { "success" } else { "failure" };
        failed |= !output.is_success();
        lines.push(format!("{}: {}", tool.id, verdict));
    }

    CommandOutput {
        stdout: lines.join("\n"),
        stderr: String::new(),
        exit_code: if failed { 1 } else { 0 },
    }
}
