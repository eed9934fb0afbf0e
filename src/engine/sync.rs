//! Spec vs. implemented acceptance tests.

use std::collections::{HashMap, HashSet};

use futures::future::join_all;
use tracing::{debug, info, warn};

use super::graph::dependency_rank;
use crate::adapters::{parse_listing, ListedTest};
use crate::error::{Result, SystemError};
use crate::exec::{substitute_id, CommandExecutor};
use crate::models::{AcceptanceTest, Issue, Spec};

/// Compare the spec's acceptance tests with the listed implementation.
///
/// Returns missing tests first (least-dependent feature first), then dangling
/// tests in listing order, then mismatching descriptions in spec order. An
/// empty `listAcceptanceTests` connector disables the check.
pub async fn check_sync_issues(spec: &Spec, exec: &dyn CommandExecutor) -> Result<Vec<Issue>> {
    let command = &spec.connectors.list_acceptance_tests;
    if command.is_empty() {
        debug!("listAcceptanceTests is empty, skipping sync check");
        return Ok(vec![]);
    }

    let listed = exec.execute(command).await;
    if !listed.is_success() {
        warn!("listAcceptanceTests exited with {}", listed.exit_code);
        return Err(SystemError::Exec {
            command: "listAcceptanceTests".to_string(),
            cause: listed.stderr,
        });
    }
    let implemented = parse_listing(&listed.stdout)?;
    info!("{} acceptance tests implemented", implemented.len());

    let (missing, dangling, mismatching) = futures::join!(
        find_missing_tests(spec, &implemented, exec),
        find_dangling_tests(spec, &implemented, exec),
        find_mismatching_tests(spec, &implemented, exec),
    );

    Ok(missing.into_iter().chain(dangling).chain(mismatching).collect())
}

/// Sort key of each acceptance test: the dependency rank of its feature.
///
/// Tests covering an unknown feature get `usize::MAX` and sort last.
pub fn acceptance_test_dependency_order(spec: &Spec) -> HashMap<String, usize> {
    let feature_rank = dependency_rank(&spec.features);
    spec.acceptance_tests
        .iter()
        .map(|at| {
            let rank = feature_rank.get(&at.covers).copied().unwrap_or(usize::MAX);
            (at.id.clone(), rank)
        })
        .collect()
}

async fn find_missing_tests(
    spec: &Spec,
    implemented: &[ListedTest],
    exec: &dyn CommandExecutor,
) -> Vec<Issue> {
    let implemented: HashSet<&str> = implemented.iter().map(|t| t.id.as_str()).collect();
    let order = acceptance_test_dependency_order(spec);

    let mut missing: Vec<&AcceptanceTest> = spec
        .acceptance_tests
        .iter()
        .filter(|at| !implemented.contains(at.id.as_str()))
        .collect();
    missing.sort_by_key(|at| order.get(&at.id).copied().unwrap_or(usize::MAX));

    join_all(missing.into_iter().map(|at| async move {
        Issue::MissingAt {
            id: at.id.clone(),
            file_path: resolve_test_path(spec, &at.id, exec).await,
        }
    }))
    .await
}

async fn find_dangling_tests(
    spec: &Spec,
    implemented: &[ListedTest],
    exec: &dyn CommandExecutor,
) -> Vec<Issue> {
    let defined: HashSet<&str> = spec.acceptance_tests.iter().map(|at| at.id.as_str()).collect();

    join_all(
        implemented
            .iter()
            .filter(|t| !defined.contains(t.id.as_str()))
            .map(|t| async move {
                Issue::DanglingAt {
                    id: t.id.clone(),
                    file_path: resolve_test_path(spec, &t.id, exec).await,
                }
            }),
    )
    .await
}

async fn find_mismatching_tests(
    spec: &Spec,
    implemented: &[ListedTest],
    exec: &dyn CommandExecutor,
) -> Vec<Issue> {
    let descriptions: HashMap<&str, &str> = implemented
        .iter()
        .map(|t| (t.id.as_str(), t.description.as_str()))
        .collect();

    let mismatches = spec.acceptance_tests.iter().filter_map(|at| {
        let actual = descriptions.get(at.id.as_str())?;
        let expected = at.description();
        (*actual != expected).then(|| (at, expected, actual.to_string()))
    });

    join_all(mismatches.map(|(at, expected, actual)| async move {
        Issue::MismatchingAt {
            id: at.id.clone(),
            expected,
            actual,
            file_path: resolve_test_path(spec, &at.id, exec).await,
        }
    }))
    .await
}

/// Trimmed stdout of `locateAcceptanceTest` for `id`.
async fn resolve_test_path(spec: &Spec, id: &str, exec: &dyn CommandExecutor) -> String {
    let command = substitute_id(&spec.connectors.locate_acceptance_test, id);
    exec.execute(&command).await.stdout.trim().to_string()
}
