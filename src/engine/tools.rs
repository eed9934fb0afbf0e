use tracing::{info, warn};

use crate::exec::CommandExecutor;
use crate::models::{Spec, ToolRunResult};

/// Run the spec's tools in order.
///
/// Stops after the first failing tool whose `stop_on_error` is set; that
/// tool's result is included, later tools are not run.
pub async fn run_all_tools(spec: &Spec, exec: &dyn CommandExecutor) -> Vec<ToolRunResult> {
    let mut results = Vec::with_capacity(spec.tools.len());

    for tool in &spec.tools {
        let output = exec.execute(&tool.command).await;
        let result = ToolRunResult {
            id: tool.id.clone(),
            stdout: output.stdout,
            stderr: output.stderr,
            exit_code: output.exit_code,
            recommended_next_actions: tool.recommended_next_actions.clone(),
        };
        let failed = result.failed();
        results.push(result);

        if failed {
            warn!("Tool {} exited with {}", tool.id, output.exit_code);
            if tool.stop_on_error {
                info!("Stopping tool run after {}", tool.id);
                break;
            }
        }
    }

    results
}
