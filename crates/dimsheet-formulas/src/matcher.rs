//! Exact-unit formula matching against a set of available expressions.

use dimsheet_model::{AvailableExpression, Formula, UnitVec};

/// Formulas with at least one variable satisfied by the available set, or
/// with every variable satisfied when `require_all` is set.
///
/// An empty available set filters nothing: the caller gets the whole input
/// back instead of an empty suggestion panel.
#[must_use]
pub fn match_by_variables<'a>(
    formulas: &'a [Formula],
    available: &[AvailableExpression],
    require_all: bool,
) -> Vec<&'a Formula> {
    if available.is_empty() {
        return formulas.iter().collect();
    }

    formulas
        .iter()
        .filter(|formula| {
            if require_all {
                formula
                    .required_units()
                    .all(|unit| unit_available(available, unit))
            } else {
                formula
                    .required_units()
                    .any(|unit| unit_available(available, unit))
            }
        })
        .collect()
}

/// Formulas whose result unit equals `target` exactly.
#[must_use]
pub fn match_by_result<'a>(formulas: &'a [Formula], target: UnitVec) -> Vec<&'a Formula> {
    formulas
        .iter()
        .filter(|formula| formula.result_unit == target)
        .collect()
}

/// A formula paired with the variables the available set cannot supply.
#[derive(Debug)]
pub struct FormulaAvailability<'a> {
    pub formula: &'a Formula,
    pub missing_variables: Vec<String>,
}

/// Per-formula missing-variable report against the available set.
#[must_use]
pub fn availability_report<'a>(
    formulas: &'a [Formula],
    available: &[AvailableExpression],
) -> Vec<FormulaAvailability<'a>> {
    formulas
        .iter()
        .map(|formula| {
            let missing_variables = formula
                .variables
                .iter()
                .filter(|variable| !unit_available(available, variable.unit))
                .map(|variable| variable.name.clone())
                .collect();
            FormulaAvailability {
                formula,
                missing_variables,
            }
        })
        .collect()
}

/// Formulas every variable of which is covered by the available set.
#[must_use]
pub fn find_computable<'a>(
    formulas: &'a [Formula],
    available: &[AvailableExpression],
) -> Vec<FormulaAvailability<'a>> {
    availability_report(formulas, available)
        .into_iter()
        .filter(|entry| entry.missing_variables.is_empty())
        .collect()
}

fn unit_available(available: &[AvailableExpression], required: UnitVec) -> bool {
    available.iter().any(|expr| expr.unit == required)
}
