//! Suggestion flow end to end: parse a unit query, match, score, group.

use dimsheet_formulas::{
    FormulaCatalog, find_computable, group_by_category, match_by_variables, parse_unit_query,
    score_formulas, search_text,
};
use dimsheet_model::AvailableExpression;

fn available_from_query(query: &str) -> Vec<AvailableExpression> {
    let parsed = parse_unit_query(query).unwrap();
    parsed
        .inputs
        .iter()
        .enumerate()
        .map(|(index, &unit)| AvailableExpression {
            name: format!("x_{index}"),
            value: 1.0,
            unit,
        })
        .collect()
}

#[test]
fn unit_query_drives_the_suggestion_pipeline() {
    let catalog = FormulaCatalog::builtin();
    let available = available_from_query("I:A, R:Ω");

    let matched = match_by_variables(catalog.formulas(), &available, true);
    assert!(matched.iter().any(|formula| formula.id == "ohms_law"));

    let scored = score_formulas(catalog.formulas(), &available);
    assert_eq!(scored[0].formula.id, "impedance");

    let computable = find_computable(catalog.formulas(), &available);
    assert!(
        computable
            .iter()
            .any(|entry| entry.formula.id == "power_i2r")
    );
}

#[test]
fn text_and_unit_search_intersect_like_the_sidebar() {
    let catalog = FormulaCatalog::builtin();
    let by_text = search_text(catalog.formulas(), "power");
    let available = available_from_query("V, A");
    let by_units = match_by_variables(catalog.formulas(), &available, true);

    let both: Vec<&str> = by_text
        .iter()
        .filter(|formula| by_units.iter().any(|matched| matched.id == formula.id))
        .map(|formula| formula.id.as_str())
        .collect();

    assert!(both.contains(&"power_vi"));
    assert!(!both.contains(&"power_i2r"));
}

#[test]
fn grouped_catalog_is_a_partition() {
    let catalog = FormulaCatalog::builtin();
    let groups = group_by_category(catalog.formulas());
    let total: usize = groups.iter().map(|(_, members)| members.len()).sum();
    assert_eq!(total, catalog.len());
}
