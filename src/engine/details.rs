//! Relationship lookups for a single feature or acceptance test.

use crate::error::ValueError;
use crate::models::{AcceptanceTestDetail, FeatureDetail, FeatureRef, Spec};

pub fn feature_detail(spec: &Spec, feature_id: &str) -> Result<FeatureDetail, ValueError> {
    let feature = spec.feature(feature_id).ok_or_else(|| {
        ValueError::new(feature_id, format!("Feature \"{}\" not found in spec", feature_id))
    })?;

    let business_objectives = spec
        .business_objectives
        .iter()
        .filter(|bo| feature.covers.contains(&bo.id))
        .cloned()
        .collect();
    let prerequisites = spec
        .features
        .iter()
        .filter(|f| feature.prerequisites.contains(&f.id))
        .map(FeatureRef::from)
        .collect();
    let dependent_features = spec
        .features
        .iter()
        .filter(|f| f.prerequisites.iter().any(|p| p == feature_id))
        .map(FeatureRef::from)
        .collect();
    let acceptance_tests = spec
        .acceptance_tests
        .iter()
        .filter(|at| at.covers == feature_id)
        .cloned()
        .collect();

    Ok(FeatureDetail {
        feature: feature.clone(),
        business_objectives,
        prerequisites,
        dependent_features,
        acceptance_tests,
    })
}

pub fn acceptance_test_detail(
    spec: &Spec,
    acceptance_test_id: &str,
) -> Result<AcceptanceTestDetail, ValueError> {
    let acceptance_test = spec.acceptance_test(acceptance_test_id).ok_or_else(|| {
        ValueError::new(
            acceptance_test_id,
            format!("Acceptance test \"{}\" not found in spec", acceptance_test_id),
        )
    })?;
    let covered_feature = spec.feature(&acceptance_test.covers).ok_or_else(|| {
        ValueError::new(
            &acceptance_test.covers,
            format!("Feature \"{}\" not found in spec", acceptance_test.covers),
        )
    })?;

    let related_business_objectives = spec
        .business_objectives
        .iter()
        .filter(|bo| covered_feature.covers.contains(&bo.id))
        .cloned()
        .collect();

    Ok(AcceptanceTestDetail {
        acceptance_test: acceptance_test.clone(),
        covered_feature: covered_feature.clone(),
        related_business_objectives,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Feature;
    use crate::testing::archetypal_spec;

    fn spec_with_dependent() -> Spec {
        let mut spec = archetypal_spec();
        spec.features.push(Feature {
            id: "FE-0002".into(),
            title: "Builds on first".into(),
            description: String::new(),
            covers: vec![],
            prerequisites: vec!["FE-0001".into()],
        });
        spec
    }

    #[test]
    fn test_feature_detail() {
        let spec = spec_with_dependent();
        let detail = feature_detail(&spec, "FE-0001").unwrap();
        assert_eq!(detail.business_objectives[0].id, "BO-0001");
        assert!(detail.prerequisites.is_empty());
        assert_eq!(
            detail.dependent_features,
            vec![FeatureRef {
                id: "FE-0002".into(),
                title: "Builds on first".into()
            }]
        );
        assert_eq!(detail.acceptance_tests[0].id, "AT-0001");

        let dependent = feature_detail(&spec, "FE-0002").unwrap();
        assert_eq!(dependent.prerequisites[0].id, "FE-0001");
    }

    #[test]
    fn test_unknown_feature() {
        let err = feature_detail(&archetypal_spec(), "FE-9999").unwrap_err();
        assert_eq!(err.value, "FE-9999");
        assert_eq!(err.message, "Feature \"FE-9999\" not found in spec");
    }

    #[test]
    fn test_acceptance_test_detail() {
        let detail = acceptance_test_detail(&archetypal_spec(), "AT-0001").unwrap();
        assert_eq!(detail.covered_feature.id, "FE-0001");
        assert_eq!(detail.related_business_objectives[0].id, "BO-0001");
    }

    #[test]
    fn test_acceptance_test_with_dangling_feature() {
        let mut spec = archetypal_spec();
        spec.acceptance_tests[0].covers = "FE-0404".into();
        let err = acceptance_test_detail(&spec, "AT-0001").unwrap_err();
        assert_eq!(err.value, "FE-0404");
    }
}
