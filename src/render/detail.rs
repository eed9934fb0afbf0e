use crate::models::{AcceptanceTestDetail, FeatureDetail};

pub fn render_feature_detail(detail: &FeatureDetail) -> String {
    let feature = &detail.feature;
    let mut output = format!("# {}: {}\n\n{}\n", feature.id, feature.title, feature.description);

    output.push_str("\n## Business Objectives\n\n");
    push_list(
        &mut output,
        detail
            .business_objectives
            .iter()
            .map(|bo| format!("{}: {}", bo.id, bo.description)),
    );

    output.push_str("\n## Prerequisites\n\n");
    push_list(
        &mut output,
        detail
            .prerequisites
            .iter()
            .map(|f| format!("{}: {}", f.id, f.title)),
    );

    output.push_str("\n## Dependent Features\n\n");
    push_list(
        &mut output,
        detail
            .dependent_features
            .iter()
            .map(|f| format!("{}: {}", f.id, f.title)),
    );

    output.push_str("\n## Acceptance Tests\n\n");
    push_list(
        &mut output,
        detail
            .acceptance_tests
            .iter()
            .map(|at| format!("{}: {}", at.id, at.description())),
    );

    output
}

pub fn render_acceptance_test_detail(detail: &AcceptanceTestDetail) -> String {
    let at = &detail.acceptance_test;
    let feature = &detail.covered_feature;
    let mut output = format!(
        "# {}\n\nGIVEN {}\nWHEN {}\nTHEN {}\n",
        at.id, at.given, at.when, at.then
    );

    output.push_str(&format!(
        "\n## Covered Feature\n\n{}: {}\n{}\n",
        feature.id, feature.title, feature.description
    ));

    output.push_str("\n## Business Objectives\n\n");
    push_list(
        &mut output,
        detail
            .related_business_objectives
            .iter()
            .map(|bo| format!("{}: {}", bo.id, bo.description)),
    );

    output
}

fn push_list(output: &mut String, items: impl Iterator<Item = String>) {
    let mut empty = true;
    for item in items {
        output.push_str("- ");
        output.push_str(&item);
        output.push('\n');
        empty = false;
    }
    if empty {
        output.push_str("(none)\n");
    }
}
