use serde::Serialize;

use super::{TestResult, ToolRunResult};

/// Entity kind of an uncovered item, derived from its id prefix.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ItemType {
    #[serde(rename = "BO")]
    BusinessObjective,
    #[serde(rename = "FE")]
    Feature,
}

impl ItemType {
    /// `BO-` ids are business objectives; everything else is treated as a feature.
    pub fn from_id(id: &str) -> Self {
        if id.starts_with("BO-") {
            Self::BusinessObjective
        } else {
            Self::Feature
        }
    }
}

/// A fact about the spec or its environment.
///
/// Issues are always collected, never raised. Infrastructure failures travel
/// separately as [`crate::error::SystemError`].
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "_tag", rename_all = "snake_case")]
#[non_exhaustive]
pub enum Issue {
    // Validation
    MissingSection {
        section: String,
    },
    UncoveredItem {
        id: String,
        #[serde(rename = "itemType")]
        item_type: ItemType,
    },
    InvalidPrereq {
        id: String,
        #[serde(rename = "referencedId")]
        referenced_id: String,
    },
    InvalidBo {
        id: String,
        #[serde(rename = "referencedId")]
        referenced_id: String,
    },
    InvalidFe {
        id: String,
        #[serde(rename = "referencedId")]
        referenced_id: String,
    },
    CircularDep {
        id: String,
    },
    InvalidConceptRef {
        id: String,
        #[serde(rename = "conceptLabel")]
        concept_label: String,
    },
    DuplicateId {
        id: String,
    },
    DuplicateConcept {
        label: String,
    },
    UnusedConcept {
        label: String,
    },

    // Synchronization
    MissingAt {
        id: String,
        #[serde(rename = "filePath")]
        file_path: String,
    },
    DanglingAt {
        id: String,
        #[serde(rename = "filePath")]
        file_path: String,
    },
    MismatchingAt {
        id: String,
        expected: String,
        actual: String,
        #[serde(rename = "filePath")]
        file_path: String,
    },

    // Execution
    FailingTests {
        #[serde(rename = "testResults")]
        test_results: Vec<TestResult>,
    },
    FailingTools {
        failures: Vec<ToolRunResult>,
    },
}

/// The three flavours of reference check share one issue shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefIssueKind {
    InvalidPrereq,
    InvalidBo,
    InvalidFe,
}

impl RefIssueKind {
    pub fn issue(self, id: &str, referenced_id: &str) -> Issue {
        let (id, referenced_id) = (id.to_string(), referenced_id.to_string());
        match self {
            Self::InvalidPrereq => Issue::InvalidPrereq { id, referenced_id },
            Self::InvalidBo => Issue::InvalidBo { id, referenced_id },
            Self::InvalidFe => Issue::InvalidFe { id, referenced_id },
        }
    }
}

impl Issue {
    /// The wire tag, e.g. `"missing_at"`.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::MissingSection { .. } => "missing_section",
            Self::UncoveredItem { .. } => "uncovered_item",
            Self::InvalidPrereq { .. } => "invalid_prereq",
            Self::InvalidBo { .. } => "invalid_bo",
            Self::InvalidFe { .. } => "invalid_fe",
            Self::CircularDep { .. } => "circular_dep",
            Self::InvalidConceptRef { .. } => "invalid_concept_ref",
            Self::DuplicateId { .. } => "duplicate_id",
            Self::DuplicateConcept { .. } => "duplicate_concept",
            Self::UnusedConcept { .. } => "unused_concept",
            Self::MissingAt { .. } => "missing_at",
            Self::DanglingAt { .. } => "dangling_at",
            Self::MismatchingAt { .. } => "mismatching_at",
            Self::FailingTests { .. } => "failing_tests",
            Self::FailingTools { .. } => "failing_tools",
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingSection { .. }
                | Self::UncoveredItem { .. }
                | Self::InvalidPrereq { .. }
                | Self::InvalidBo { .. }
                | Self::InvalidFe { .. }
                | Self::CircularDep { .. }
                | Self::InvalidConceptRef { .. }
                | Self::DuplicateId { .. }
                | Self::DuplicateConcept { .. }
                | Self::UnusedConcept { .. }
        )
    }
}
