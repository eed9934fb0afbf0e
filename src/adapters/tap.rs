use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::AdapterError;
use crate::exec::CommandOutput;
use crate::models::{AcceptanceTest, TestResult};

/// Adapter name for TAP-flat results.
pub const TAP_FLAT_ADAPTER: &str = "tap-flat";

static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(ok|not ok) [0-9]+ - .*?/(AT-[0-9]+)\.test\.ts >").unwrap());
static PLAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+\.\.[0-9]+$").unwrap());

/// Parse a TAP-flat run into results for the tests the spec knows about.
///
/// Stdout and stderr are read as one stream. Lines following a failing test's
/// header are kept as its diagnostic output. Results for ids missing from
/// `tests` are dropped. Garbled input yields fewer results, never an error.
pub fn parse_tap_flat(
    tests: &[AcceptanceTest],
    raw: &CommandOutput,
) -> Result<Vec<TestResult>, AdapterError> {
    let combined = format!("{}{}", raw.stdout, raw.stderr);
    let mut parser = TapParser::new(tests);
    for line in combined.split('\n') {
        parser.process_line(line);
    }
    Ok(parser.finish())
}

struct InProgress {
    id: String,
    passed: bool,
    output: Vec<String>,
}

struct TapParser<'a> {
    tests: &'a [AcceptanceTest],
    current: Option<InProgress>,
    results: Vec<TestResult>,
}

impl<'a> TapParser<'a> {
    fn new(tests: &'a [AcceptanceTest]) -> Self {
        Self {
            tests,
            current: None,
            results: Vec::new(),
        }
    }

    fn process_line(&mut self, raw_line: &str) {
        let no_comment = strip_comment(raw_line);
        let trimmed = no_comment.trim();

        if let Some(caps) = HEADER.captures(trimmed) {
            self.flush();
            self.current = Some(InProgress {
                id: caps[2].to_string(),
                passed: &caps[1] == "ok",
                output: Vec::new(),
            });
        } else if let Some(current) = self.current.as_mut() {
            if !is_tap_noise(raw_line, trimmed) {
                current.output.push(no_comment.to_string());
            }
        }
    }

    fn flush(&mut self) {
        let Some(current) = self.current.take() else {
            return;
        };
        let Some(test) = self.tests.iter().find(|t| t.id == current.id) else {
            debug!("{}: ignoring result for {} which is not in the spec", TAP_FLAT_ADAPTER, current.id);
            return;
        };

        let output = if current.passed {
            None
        } else {
            Some(current.output.join("\n")).filter(|o| !o.is_empty())
        };
        self.results.push(TestResult {
            id: current.id,
            test: test.clone(),
            passed: current.passed,
            output,
        });
    }

    fn finish(mut self) -> Vec<TestResult> {
        self.flush();
        self.results
    }
}

/// Everything before the first `#`.
fn strip_comment(line: &str) -> &str {
    line.find('#').map_or(line, |i| &line[..i])
}

/// Version banners, plan lines and lines that are nothing but a comment.
fn is_tap_noise(raw_line: &str, trimmed: &str) -> bool {
    trimmed.starts_with("TAP version")
        || PLAN.is_match(trimmed)
        || raw_line.trim_start().starts_with('#')
}
