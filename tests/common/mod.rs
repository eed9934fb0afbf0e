#![allow(dead_code)]

use s4::models::*;

pub const LIST: &str = "list-ats";
pub const LOCATE: &str = "locate {ID}";
pub const RUN_ALL: &str = "run-ats";

/// A consistent spec whose connectors are placeholders for a scripted executor.
pub fn make_spec() -> Spec {
    Spec {
        title: "Test Specification".into(),
        mission: "Test mission".into(),
        vision: "Test vision".into(),
        concepts: vec![],
        business_objectives: vec![BusinessObjective {
            id: "BO-0001".into(),
            description: "Test business objective".into(),
        }],
        features: vec![make_feature("FE-0001", &[])],
        acceptance_tests: vec![make_test("AT-0001", "FE-0001")],
        connectors: Connectors {
            list_acceptance_tests: LIST.into(),
            locate_acceptance_test: LOCATE.into(),
            run_acceptance_test: "run {ID}".into(),
            run_acceptance_tests: RUN_ALL.into(),
        },
        tools: vec![],
    }
}

pub fn make_feature(id: &str, prerequisites: &[&str]) -> Feature {
    Feature {
        id: id.into(),
        title: format!("Feature {}", id),
        description: String::new(),
        covers: vec!["BO-0001".into()],
        prerequisites: prerequisites.iter().map(|p| p.to_string()).collect(),
    }
}

pub fn make_test(id: &str, covers: &str) -> AcceptanceTest {
    AcceptanceTest {
        id: id.into(),
        covers: covers.into(),
        given: "G".into(),
        when: "W".into(),
        then: "T".into(),
    }
}

pub fn make_tool(id: &str, stop_on_error: bool) -> Tool {
    Tool {
        id: id.into(),
        command: format!("tool-{}", id),
        stop_on_error,
        recommended_next_actions: format!("Fix {}", id),
    }
}

/// `locate {ID}` as the scripted executor will see it.
pub fn locate(id: &str) -> String {
    LOCATE.replace("{ID}", id)
}

pub fn path_of(id: &str) -> String {
    format!("src/at/{}.test.ts", id)
}
