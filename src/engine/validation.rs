//! Internal consistency checks over a [`Spec`].
//!
//! [`validate`] runs a fixed list of independent checks and concatenates
//! their output. The order is stable and part of the contract.

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::LazyLock;

use regex::Regex;

use super::graph::{has_circular_dependency, prerequisite_map};
use crate::models::{Issue, ItemType, RefIssueKind, Spec};

/// `[[label]]`; the label is any run of non-`]` characters.
static CONCEPT_REF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[([^\]]+)\]\]").unwrap());

/// Every consistency issue in `spec`, in check order.
pub fn validate(spec: &Spec) -> Vec<Issue> {
    let checks: [fn(&Spec) -> Vec<Issue>; 11] = [
        validate_sections,
        validate_business_objective_coverage,
        validate_feature_coverage,
        validate_prerequisite_refs,
        validate_business_objective_refs,
        validate_covered_feature_refs,
        validate_feature_circular_dependencies,
        validate_concept_references,
        validate_id_uniqueness,
        validate_concept_label_uniqueness,
        validate_unused_concepts,
    ];

    checks.iter().flat_map(|check| check(spec)).collect()
}

pub fn validate_sections(spec: &Spec) -> Vec<Issue> {
    if spec.business_objectives.is_empty() {
        vec![Issue::MissingSection {
            section: "businessObjectives".to_string(),
        }]
    } else {
        vec![]
    }
}

/// Every business objective must be covered by at least one feature.
pub fn validate_business_objective_coverage(spec: &Spec) -> Vec<Issue> {
    validate_coverage(
        spec.business_objectives.iter().map(|bo| bo.id.as_str()),
        spec.features
            .iter()
            .flat_map(|f| f.covers.iter().map(String::as_str)),
    )
}

/// Every feature must be covered by at least one acceptance test.
pub fn validate_feature_coverage(spec: &Spec) -> Vec<Issue> {
    validate_coverage(
        spec.features.iter().map(|f| f.id.as_str()),
        spec.acceptance_tests.iter().map(|at| at.covers.as_str()),
    )
}

/// Items whose id never appears among the covered references.
pub fn validate_coverage<'a>(
    items: impl IntoIterator<Item = &'a str>,
    covered: impl IntoIterator<Item = &'a str>,
) -> Vec<Issue> {
    let covered: HashSet<&str> = covered.into_iter().collect();
    items
        .into_iter()
        .filter(|id| !covered.contains(id))
        .map(|id| Issue::UncoveredItem {
            id: id.to_string(),
            item_type: ItemType::from_id(id),
        })
        .collect()
}

/// One issue per reference of each item that is not in `valid_ids`.
pub fn validate_ref_existence<T>(
    items: &[T],
    references: impl Fn(&T) -> Vec<&str>,
    id_of: impl Fn(&T) -> &str,
    valid_ids: &HashSet<&str>,
    kind: RefIssueKind,
) -> Vec<Issue> {
    items
        .iter()
        .flat_map(|item| {
            references(item)
                .into_iter()
                .filter(|r| !valid_ids.contains(r))
                .map(|r| kind.issue(id_of(item), r))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Prerequisites must name existing features.
pub fn validate_prerequisite_refs(spec: &Spec) -> Vec<Issue> {
    let ids = ids_of(spec.features.iter().map(|f| f.id.as_str()));
    validate_ref_existence(
        &spec.features,
        |f| f.prerequisites.iter().map(String::as_str).collect(),
        |f| f.id.as_str(),
        &ids,
        RefIssueKind::InvalidPrereq,
    )
}

/// Features must cover existing business objectives.
pub fn validate_business_objective_refs(spec: &Spec) -> Vec<Issue> {
    let ids = ids_of(spec.business_objectives.iter().map(|bo| bo.id.as_str()));
    validate_ref_existence(
        &spec.features,
        |f| f.covers.iter().map(String::as_str).collect(),
        |f| f.id.as_str(),
        &ids,
        RefIssueKind::InvalidBo,
    )
}

/// Acceptance tests must cover an existing feature.
pub fn validate_covered_feature_refs(spec: &Spec) -> Vec<Issue> {
    let ids = ids_of(spec.features.iter().map(|f| f.id.as_str()));
    validate_ref_existence(
        &spec.acceptance_tests,
        |at| vec![at.covers.as_str()],
        |at| at.id.as_str(),
        &ids,
        RefIssueKind::InvalidFe,
    )
}

pub fn validate_feature_circular_dependencies(spec: &Spec) -> Vec<Issue> {
    let prerequisites = prerequisite_map(&spec.features);
    spec.features
        .iter()
        .filter(|f| has_circular_dependency(&f.id, &prerequisites))
        .map(|f| Issue::CircularDep { id: f.id.clone() })
        .collect()
}

/// Every `[[label]]` must name a defined concept.
pub fn validate_concept_references(spec: &Spec) -> Vec<Issue> {
    let labels: HashSet<&str> = spec.concepts.iter().map(|c| c.id.as_str()).collect();
    referencing_texts(spec)
        .into_iter()
        .flat_map(|(id, text)| {
            extract_concept_references(&text)
                .into_iter()
                .filter(|r| !labels.contains(r.as_str()))
                .map(|r| Issue::InvalidConceptRef {
                    id: id.to_string(),
                    concept_label: r,
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Ids shared by more than one business objective, feature or acceptance test.
pub fn validate_id_uniqueness(spec: &Spec) -> Vec<Issue> {
    let ids = spec
        .business_objectives
        .iter()
        .map(|bo| bo.id.as_str())
        .chain(spec.features.iter().map(|f| f.id.as_str()))
        .chain(spec.acceptance_tests.iter().map(|at| at.id.as_str()));
    find_duplicates(ids)
        .into_iter()
        .map(|id| Issue::DuplicateId { id: id.to_string() })
        .collect()
}

pub fn validate_concept_label_uniqueness(spec: &Spec) -> Vec<Issue> {
    find_duplicates(spec.concepts.iter().map(|c| c.id.as_str()))
        .into_iter()
        .map(|label| Issue::DuplicateConcept {
            label: label.to_string(),
        })
        .collect()
}

pub fn validate_unused_concepts(spec: &Spec) -> Vec<Issue> {
    let used: HashSet<String> = referencing_texts(spec)
        .into_iter()
        .flat_map(|(_, text)| extract_concept_references(&text))
        .collect();

    let mut reported = HashSet::new();
    spec.concepts
        .iter()
        .map(|c| c.id.as_str())
        .filter(|label| !used.contains(*label) && reported.insert(*label))
        .map(|label| Issue::UnusedConcept {
            label: label.to_string(),
        })
        .collect()
}

/// Values seen more than once, in the order their first repeat was found.
pub fn find_duplicates<T>(items: impl IntoIterator<Item = T>) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for item in items {
        if !seen.insert(item.clone()) && reported.insert(item.clone()) {
            duplicates.push(item);
        }
    }
    duplicates
}

/// Labels of all `[[label]]` markers in `text`, duplicates included.
///
/// `[[nested [brackets]]]` yields `nested [brackets`.
pub fn extract_concept_references(text: &str) -> Vec<String> {
    CONCEPT_REF
        .captures_iter(text)
        .map(|c| c[1].to_string())
        .collect()
}

/// (owner id, text) for every field that may contain concept references.
fn referencing_texts(spec: &Spec) -> Vec<(&str, String)> {
    let concepts = spec
        .concepts
        .iter()
        .map(|c| (c.id.as_str(), c.description.clone()));
    let objectives = spec
        .business_objectives
        .iter()
        .map(|bo| (bo.id.as_str(), bo.description.clone()));
    let features = spec
        .features
        .iter()
        .map(|f| (f.id.as_str(), f.description.clone()));
    let tests = spec
        .acceptance_tests
        .iter()
        .map(|at| (at.id.as_str(), at.reference_text()));

    concepts.chain(objectives).chain(features).chain(tests).collect()
}

fn ids_of<'a>(ids: impl Iterator<Item = &'a str>) -> HashSet<&'a str> {
    ids.collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AcceptanceTest, BusinessObjective, Concept, Feature};
    use crate::testing::archetypal_spec;

    fn feature(id: &str, covers: &[&str], prerequisites: &[&str]) -> Feature {
        Feature {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            covers: covers.iter().map(|s| s.to_string()).collect(),
            prerequisites: prerequisites.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn concept(id: &str) -> Concept {
        Concept {
            id: id.to_string(),
            description: format!("About {}", id),
        }
    }

    #[test]
    fn test_extract_concept_references() {
        assert_eq!(
            extract_concept_references("This is a [[concept]] and another [[concept2]]"),
            vec!["concept", "concept2"]
        );
        assert!(extract_concept_references("plain text").is_empty());
        assert!(extract_concept_references("").is_empty());
    }

    #[test]
    fn test_extract_keeps_stray_bracket() {
        assert_eq!(
            extract_concept_references("This has [[concept]] and [[nested [brackets]]]"),
            vec!["concept", "nested [brackets"]
        );
    }

    #[test]
    fn test_find_duplicates_in_discovery_order() {
        assert_eq!(find_duplicates(["a", "b", "a", "c", "b"]), vec!["a", "b"]);
        assert_eq!(find_duplicates(["b", "a", "a", "b", "b"]), vec!["a", "b"]);
        assert!(find_duplicates(["a", "b", "c"]).is_empty());
        assert!(find_duplicates(Vec::<&str>::new()).is_empty());
    }

    #[test]
    fn test_find_duplicates_of_duplicates_is_empty() {
        let once = find_duplicates(["x", "y", "x", "y", "z"]);
        assert!(find_duplicates(once).is_empty());
    }

    #[test]
    fn test_archetypal_spec_is_consistent() {
        assert!(validate(&archetypal_spec()).is_empty());
    }

    #[test]
    fn test_missing_business_objectives() {
        let mut spec = archetypal_spec();
        spec.business_objectives.clear();
        let issues = validate(&spec);
        assert_eq!(
            issues[0],
            Issue::MissingSection {
                section: "businessObjectives".into()
            }
        );
        // FE-0001 still covers BO-0001, which no longer exists.
        assert!(issues.contains(&Issue::InvalidBo {
            id: "FE-0001".into(),
            referenced_id: "BO-0001".into()
        }));
    }

    #[test]
    fn test_uncovered_items() {
        let mut spec = archetypal_spec();
        spec.business_objectives.push(BusinessObjective {
            id: "BO-0002".into(),
            description: "Orphan".into(),
        });
        spec.features.push(feature("FE-0002", &["BO-0001"], &[]));
        assert_eq!(
            validate_business_objective_coverage(&spec),
            vec![Issue::UncoveredItem {
                id: "BO-0002".into(),
                item_type: ItemType::BusinessObjective
            }]
        );
        assert_eq!(
            validate_feature_coverage(&spec),
            vec![Issue::UncoveredItem {
                id: "FE-0002".into(),
                item_type: ItemType::Feature
            }]
        );
    }

    #[test]
    fn test_each_dangling_reference_is_reported() {
        let mut spec = archetypal_spec();
        spec.features = vec![feature("FE-0001", &["BO-0001"], &["FE-0098", "FE-0099"])];
        let issues = validate(&spec);
        assert_eq!(
            issues,
            vec![
                Issue::InvalidPrereq {
                    id: "FE-0001".into(),
                    referenced_id: "FE-0098".into()
                },
                Issue::InvalidPrereq {
                    id: "FE-0001".into(),
                    referenced_id: "FE-0099".into()
                },
            ]
        );
    }

    #[test]
    fn test_invalid_covered_feature() {
        let mut spec = archetypal_spec();
        spec.acceptance_tests.push(AcceptanceTest {
            id: "AT-0002".into(),
            covers: "FE-0404".into(),
            given: "G".into(),
            when: "W".into(),
            then: "T".into(),
        });
        assert_eq!(
            validate(&spec),
            vec![Issue::InvalidFe {
                id: "AT-0002".into(),
                referenced_id: "FE-0404".into()
            }]
        );
    }

    #[test]
    fn test_two_cycle_reports_both_members() {
        let mut spec = archetypal_spec();
        spec.features = vec![
            feature("FE-0001", &["BO-0001"], &["FE-0002"]),
            feature("FE-0002", &["BO-0001"], &["FE-0001"]),
        ];
        assert_eq!(
            validate_feature_circular_dependencies(&spec),
            vec![
                Issue::CircularDep { id: "FE-0001".into() },
                Issue::CircularDep { id: "FE-0002".into() },
            ]
        );
    }

    #[test]
    fn test_no_cycle() {
        let mut spec = archetypal_spec();
        spec.features = vec![
            feature("FE-0001", &["BO-0001"], &["FE-0002"]),
            feature("FE-0002", &["BO-0001"], &[]),
        ];
        assert!(validate_feature_circular_dependencies(&spec).is_empty());
    }

    #[test]
    fn test_invalid_concept_reference() {
        let mut spec = archetypal_spec();
        spec.concepts = vec![concept("valid-concept")];
        spec.features[0].description = "Uses [[valid-concept]] and [[invalid-concept]]".into();
        assert_eq!(
            validate_concept_references(&spec),
            vec![Issue::InvalidConceptRef {
                id: "FE-0001".into(),
                concept_label: "invalid-concept".into()
            }]
        );
    }

    #[test]
    fn test_repeated_undefined_reference_reported_each_time() {
        let mut spec = archetypal_spec();
        spec.acceptance_tests[0].given = "[[ghost]]".into();
        spec.acceptance_tests[0].then = "[[ghost]] again".into();
        assert_eq!(validate_concept_references(&spec).len(), 2);
    }

    #[test]
    fn test_duplicate_ids_across_kinds() {
        let mut spec = archetypal_spec();
        spec.features.push(feature("FE-0001", &["BO-0001"], &[]));
        spec.features.push(feature("FE-0001", &["BO-0001"], &[]));
        assert_eq!(
            validate_id_uniqueness(&spec),
            vec![Issue::DuplicateId { id: "FE-0001".into() }]
        );
    }

    #[test]
    fn test_duplicate_concepts() {
        let mut spec = archetypal_spec();
        spec.concepts = vec![concept("card"), concept("card")];
        spec.features[0].description = "[[card]]".into();
        assert_eq!(
            validate(&spec),
            vec![Issue::DuplicateConcept {
                label: "card".into()
            }]
        );
    }

    #[test]
    fn test_unused_concepts() {
        let mut spec = archetypal_spec();
        spec.concepts = vec![concept("used-concept"), concept("unused-concept")];
        spec.features[0].description = "Uses [[used-concept]]".into();
        assert_eq!(
            validate_unused_concepts(&spec),
            vec![Issue::UnusedConcept {
                label: "unused-concept".into()
            }]
        );
    }

    #[test]
    fn test_concept_used_from_another_concept_counts() {
        let mut spec = archetypal_spec();
        spec.concepts = vec![
            Concept {
                id: "deck".into(),
                description: "A pile of [[card]]s".into(),
            },
            concept("card"),
        ];
        spec.business_objectives[0].description = "Build a [[deck]]".into();
        assert!(validate(&spec).is_empty());
    }

    #[test]
    fn test_check_order_is_stable() {
        let mut spec = archetypal_spec();
        spec.business_objectives.clear();
        spec.concepts = vec![concept("lonely")];
        spec.features = vec![feature("FE-0001", &[], &["FE-0001"])];
        let tags: Vec<&str> = validate(&spec).iter().map(Issue::tag).collect();
        assert_eq!(tags, vec!["missing_section", "circular_dep", "unused_concept"]);
    }
}
