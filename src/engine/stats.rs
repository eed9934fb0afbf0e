use crate::models::{FeatureStat, FeatureStats, Spec, TestResult};

/// Passing vs. total covering tests for every feature, in spec order.
///
/// A covering test without any result counts as not passed.
pub fn calc_feature_stats(spec: &Spec, results: &[TestResult]) -> FeatureStats {
    spec.features
        .iter()
        .map(|feature| {
            let covering: Vec<_> = spec
                .acceptance_tests
                .iter()
                .filter(|at| at.covers == feature.id)
                .collect();
            let passed = covering
                .iter()
                .filter(|at| {
                    results
                        .iter()
                        .find(|r| r.id == at.id)
                        .is_some_and(|r| r.passed)
                })
                .count();
            let stat = FeatureStat {
                passed,
                total: covering.len(),
            };
            (feature.id.clone(), stat)
        })
        .collect()
}
