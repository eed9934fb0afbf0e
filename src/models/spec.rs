use serde::{Deserialize, Serialize};

const DEFAULT_CONNECTOR: &str = "echo";
const DEFAULT_NEXT_ACTIONS: &str = "Fix the issue and run the tool again";

/// The full declarative project description.
///
/// All ids of a given prefix are meant to be unique and every cross-reference
/// is meant to resolve, but neither is enforced here. Violations are reported
/// by [`crate::engine::validate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spec {
    pub title: String,
    pub mission: String,
    pub vision: String,
    #[serde(default)]
    pub concepts: Vec<Concept>,
    #[serde(default)]
    pub business_objectives: Vec<BusinessObjective>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub acceptance_tests: Vec<AcceptanceTest>,
    #[serde(default)]
    pub connectors: Connectors,
    #[serde(default)]
    pub tools: Vec<Tool>,
}

impl Spec {
    pub fn feature(&self, id: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.id == id)
    }

    pub fn acceptance_test(&self, id: &str) -> Option<&AcceptanceTest> {
        self.acceptance_tests.iter().find(|at| at.id == id)
    }
}

/// A glossary term. `id` is the label used inside `[[...]]` markers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Concept {
    pub id: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BusinessObjective {
    pub id: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Feature {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Business objective ids this feature addresses.
    #[serde(default)]
    pub covers: Vec<String>,
    /// Feature ids that must exist before this one.
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AcceptanceTest {
    pub id: String,
    /// The single feature id this test covers.
    pub covers: String,
    pub given: String,
    pub when: String,
    pub then: String,
}

impl AcceptanceTest {
    /// Canonical description, compared verbatim against implemented test titles.
    pub fn description(&self) -> String {
        format!("GIVEN {}, WHEN {}, THEN {}", self.given, self.when, self.then)
    }

    /// Free text scanned for `[[label]]` concept references.
    pub fn reference_text(&self) -> String {
        format!("{} {} {}", self.given, self.when, self.then)
    }
}

/// An auxiliary command, run after the acceptance tests during a status check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub id: String,
    pub command: String,
    #[serde(default = "default_true")]
    pub stop_on_error: bool,
    #[serde(default = "default_next_actions")]
    pub recommended_next_actions: String,
}

/// Shell command templates used to reach the real test suite.
///
/// `locate_acceptance_test` and `run_acceptance_test` contain the literal `{ID}`.
/// An empty `list_acceptance_tests` disables synchronization checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Connectors {
    pub list_acceptance_tests: String,
    pub locate_acceptance_test: String,
    pub run_acceptance_test: String,
    pub run_acceptance_tests: String,
}

impl Default for Connectors {
    fn default() -> Self {
        Self {
            list_acceptance_tests: DEFAULT_CONNECTOR.to_string(),
            locate_acceptance_test: DEFAULT_CONNECTOR.to_string(),
            run_acceptance_test: DEFAULT_CONNECTOR.to_string(),
            run_acceptance_tests: DEFAULT_CONNECTOR.to_string(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_next_actions() -> String {
    DEFAULT_NEXT_ACTIONS.to_string()
}
