use crate::models::*;

/// A minimal spec with no consistency issues, shared by unit tests.
pub fn archetypal_spec() -> Spec {
    Spec {
        title: "Test Specification".into(),
        mission: "Test mission".into(),
        vision: "Test vision".into(),
        concepts: vec![],
        business_objectives: vec![BusinessObjective {
            id: "BO-0001".into(),
            description: "Test business objective".into(),
        }],
        features: vec![Feature {
            id: "FE-0001".into(),
            title: "Test Feature".into(),
            description: "Test feature description".into(),
            covers: vec!["BO-0001".into()],
            prerequisites: vec![],
        }],
        acceptance_tests: vec![AcceptanceTest {
            id: "AT-0001".into(),
            covers: "FE-0001".into(),
            given: "G".into(),
            when: "W".into(),
            then: "T".into(),
        }],
        connectors: Connectors {
            list_acceptance_tests: "echo \"AT-0001: GIVEN G, WHEN W, THEN T\"".into(),
            locate_acceptance_test: "echo \"src/at/{ID}.test.ts\"".into(),
            run_acceptance_test: "echo \"Done\"".into(),
            run_acceptance_tests: "echo \"ok 1 - src/at/AT-0001.test.ts > GIVEN G, WHEN W, THEN T\"".into(),
        },
        tools: vec![],
    }
}
