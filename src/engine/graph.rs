//! Dependency graph over features and their prerequisites.

use std::collections::{HashMap, HashSet};

use crate::models::Feature;

/// Feature id to its prerequisite ids. Later duplicates of an id win.
pub type PrerequisiteMap<'a> = HashMap<&'a str, &'a [String]>;

pub fn prerequisite_map(features: &[Feature]) -> PrerequisiteMap<'_> {
    features
        .iter()
        .map(|f| (f.id.as_str(), f.prerequisites.as_slice()))
        .collect()
}

/// True if a DFS from `id` ever re-enters a node still on its stack.
///
/// Ids missing from the map have no prerequisites.
pub fn has_circular_dependency(id: &str, prerequisites: &PrerequisiteMap<'_>) -> bool {
    let mut visited = HashSet::new();
    let mut stack = HashSet::new();
    visit_for_cycle(id, prerequisites, &mut visited, &mut stack)
}

fn visit_for_cycle<'a>(
    id: &'a str,
    prerequisites: &PrerequisiteMap<'a>,
    visited: &mut HashSet<&'a str>,
    stack: &mut HashSet<&'a str>,
) -> bool {
    if stack.contains(id) {
        return true;
    }
    if !visited.insert(id) {
        return false;
    }

    stack.insert(id);
    let cyclic = prerequisites
        .get(id)
        .copied()
        .map(|prereqs| {
            prereqs
                .iter()
                .any(|p| visit_for_cycle(p, prerequisites, visited, stack))
        })
        .unwrap_or(false);
    stack.remove(id);

    cyclic
}

/// Post-order DFS: prerequisites come before their dependents.
///
/// Every feature id appears exactly once. Inside a cycle the walk is cut at
/// the first revisit, so the cyclic part gets a best-effort order. Referenced
/// ids that are not features are emitted as leaves.
pub fn topological_sort_features(features: &[Feature]) -> Vec<String> {
    let prerequisites = prerequisite_map(features);
    let mut visited = HashSet::new();
    let mut on_path = HashSet::new();
    let mut order = Vec::with_capacity(prerequisites.len());

    for feature in features {
        visit_in_order(
            &feature.id,
            &prerequisites,
            &mut visited,
            &mut on_path,
            &mut order,
        );
    }
    order
}

fn visit_in_order<'a>(
    id: &'a str,
    prerequisites: &PrerequisiteMap<'a>,
    visited: &mut HashSet<&'a str>,
    on_path: &mut HashSet<&'a str>,
    order: &mut Vec<String>,
) {
    if visited.contains(id) || !on_path.insert(id) {
        return;
    }

    let prereqs: &'a [String] = prerequisites.get(id).copied().unwrap_or_default();
    for prereq in prereqs {
        visit_in_order(prereq, prerequisites, visited, on_path, order);
    }

    on_path.remove(id);
    visited.insert(id);
    order.push(id.to_string());
}

/// Position of each feature in [`topological_sort_features`], used as a sort key.
pub fn dependency_rank(features: &[Feature]) -> HashMap<String, usize> {
    topological_sort_features(features)
        .into_iter()
        .enumerate()
        .map(|(i, id)| (id, i))
        .collect()
}
