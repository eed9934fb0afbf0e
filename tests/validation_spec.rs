mod common;

use common::*;
use s4::engine::{find_duplicates, has_circular_dependency, topological_sort_features, validate};
use s4::engine::graph::prerequisite_map;
use s4::models::*;
use speculate2::speculate;

speculate! {
    before {
        let mut spec = make_spec();
    }

    describe "validate" {
        it "reports nothing for a well-formed spec" {
            spec.concepts.push(Concept {
                id: "deck".into(),
                description: "A set of cards".into(),
            });
            spec.features[0].description = "Shuffle the [[deck]]".into();
            assert!(validate(&spec).is_empty());
        }

        it "is deterministic" {
            spec.business_objectives.clear();
            spec.features.push(make_feature("FE-0002", &["FE-0002", "FE-0404"]));
            assert_eq!(validate(&spec), validate(&spec));
        }

        it "reports every kind of issue in check order" {
            spec.business_objectives.clear();
            spec.concepts = vec![
                Concept { id: "dup".into(), description: String::new() },
                Concept { id: "dup".into(), description: String::new() },
            ];
            spec.features = vec![
                make_feature("FE-0001", &["FE-0404"]),
                make_feature("FE-0002", &["FE-0003"]),
                make_feature("FE-0003", &["FE-0002"]),
            ];
            spec.features[0].description = "Uses [[ghost]]".into();
            spec.acceptance_tests = vec![
                make_test("AT-0001", "FE-0001"),
                make_test("AT-0001", "FE-0999"),
            ];

            let tags: Vec<&str> = validate(&spec).iter().map(Issue::tag).collect();
            assert_eq!(tags, vec![
                "missing_section",
                "uncovered_item",
                "uncovered_item",
                "invalid_prereq",
                "invalid_bo",
                "invalid_bo",
                "invalid_bo",
                "invalid_fe",
                "circular_dep",
                "circular_dep",
                "invalid_concept_ref",
                "duplicate_id",
                "duplicate_concept",
                "unused_concept",
            ]);
        }
    }

    describe "graph utilities" {
        it "orders a DAG with prerequisites first" {
            let features = vec![
                make_feature("FE-0004", &["FE-0002", "FE-0003"]),
                make_feature("FE-0003", &["FE-0001"]),
                make_feature("FE-0002", &["FE-0001"]),
                make_feature("FE-0001", &[]),
            ];
            let order = topological_sort_features(&features);
            assert_eq!(order.len(), features.len());
            let pos = |id: &str| order.iter().position(|x| x == id).unwrap();
            for f in &features {
                for p in &f.prerequisites {
                    assert!(pos(p) < pos(&f.id));
                }
            }
        }

        it "flags only the members of a cycle that cannot escape it" {
            let features = vec![
                make_feature("FE-0001", &[]),
                make_feature("FE-0002", &["FE-0003"]),
                make_feature("FE-0003", &["FE-0002"]),
                make_feature("FE-0004", &["FE-0001"]),
            ];
            let map = prerequisite_map(&features);
            assert!(has_circular_dependency("FE-0002", &map));
            assert!(has_circular_dependency("FE-0003", &map));
            assert!(!has_circular_dependency("FE-0001", &map));
            assert!(!has_circular_dependency("FE-0004", &map));

            let mut order = topological_sort_features(&features);
            order.sort();
            assert_eq!(order, vec!["FE-0001", "FE-0002", "FE-0003", "FE-0004"]);
        }
    }

    describe "find_duplicates" {
        it "returns each duplicated value once" {
            assert_eq!(find_duplicates(vec![1, 1, 1, 2, 2, 3]), vec![1, 2]);
        }

        it "has nothing left to find in its own output" {
            let xs = vec!["a", "b", "a", "b", "c"];
            assert!(find_duplicates(find_duplicates(xs)).is_empty());
        }
    }
}
