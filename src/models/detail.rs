use serde::Serialize;

use super::{AcceptanceTest, BusinessObjective, Feature};

/// Id and title of a related feature.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FeatureRef {
    pub id: String,
    pub title: String,
}

impl From<&Feature> for FeatureRef {
    fn from(f: &Feature) -> Self {
        Self {
            id: f.id.clone(),
            title: f.title.clone(),
        }
    }
}

/// A feature together with everything that points to or from it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureDetail {
    pub feature: Feature,
    pub business_objectives: Vec<BusinessObjective>,
    pub prerequisites: Vec<FeatureRef>,
    pub dependent_features: Vec<FeatureRef>,
    pub acceptance_tests: Vec<AcceptanceTest>,
}

/// An acceptance test with its covered feature and that feature's objectives.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptanceTestDetail {
    pub acceptance_test: AcceptanceTest,
    pub covered_feature: Feature,
    pub related_business_objectives: Vec<BusinessObjective>,
}
