//! Relevance scoring for the formula suggestion panel.

use std::cmp::Ordering;

use dimsheet_model::{AvailableExpression, Formula};

/// Flat bonus when every variable of a formula is satisfied.
const ALL_VARIABLES_BONUS: f64 = 5.0;
/// Weight of the fewer-variables preference.
const SIMPLICITY_WEIGHT: f64 = 0.1;
/// Variable count the simplicity preference is measured against.
const SIMPLICITY_BASELINE: f64 = 10.0;

#[derive(Debug)]
pub struct ScoredFormula<'a> {
    pub formula: &'a Formula,
    pub score: f64,
}

/// Scores every formula against the available set and sorts descending.
///
/// One point per satisfied variable (two variables sharing a unit both
/// count), the all-variables bonus on top, and a small preference for
/// formulas with fewer variables. The sort is stable, so ties keep catalog
/// order.
#[must_use]
pub fn score_formulas<'a>(
    formulas: &'a [Formula],
    available: &[AvailableExpression],
) -> Vec<ScoredFormula<'a>> {
    let mut scored: Vec<ScoredFormula<'a>> = formulas
        .iter()
        .map(|formula| {
            let matched = formula
                .required_units()
                .filter(|&unit| available.iter().any(|expr| expr.unit == unit))
                .count();

            let mut score = matched as f64;
            if matched == formula.variable_count() {
                score += ALL_VARIABLES_BONUS;
            }
            score += (SIMPLICITY_BASELINE - formula.variable_count() as f64) * SIMPLICITY_WEIGHT;

            ScoredFormula { formula, score }
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored
}

#[cfg(test)]
mod tests {
    use dimsheet_model::UnitVec;
    use dimsheet_units::catalog::{AMPERE, FARAD, OHM};

    use super::*;
    use crate::catalog::FormulaCatalog;

    fn expr(name: &str, unit: UnitVec) -> AvailableExpression {
        AvailableExpression {
            name: name.to_owned(),
            value: 1.0,
            unit,
        }
    }

    #[test]
    fn scoring_keeps_every_formula() {
        let catalog = FormulaCatalog::builtin();
        let scored = score_formulas(catalog.formulas(), &[]);
        assert_eq!(scored.len(), catalog.len());
    }

    #[test]
    fn fully_satisfied_formulas_sort_first_and_ties_keep_catalog_order() {
        let catalog = FormulaCatalog::builtin();
        let available = [expr("I", AMPERE), expr("R", OHM)];
        let scored = score_formulas(catalog.formulas(), &available);

        // Impedance matches three variables outright; the two-variable
        // full matches follow in catalog order.
        let ids: Vec<&str> = scored
            .iter()
            .take(5)
            .map(|entry| entry.formula.id.as_str())
            .collect();
        assert_eq!(
            ids,
            [
                "impedance",
                "ohms_law",
                "power_i2r",
                "resistors_series",
                "resistors_parallel",
            ]
        );
        assert!((scored[0].score - 8.7).abs() < 1e-9);
        assert!((scored[1].score - 7.8).abs() < 1e-9);
    }

    #[test]
    fn one_available_unit_satisfies_every_variable_that_wants_it() {
        let catalog = FormulaCatalog::builtin();
        let available = [expr("C_1", FARAD)];
        let scored = score_formulas(catalog.formulas(), &available);
        let series = scored
            .iter()
            .find(|entry| entry.formula.id == "capacitors_series")
            .unwrap();
        // Both farad variables count, plus the all-variables bonus.
        assert!((series.score - 7.8).abs() < 1e-9);
    }

    #[test]
    fn zero_variable_formulas_take_the_full_bonus() {
        let constant = Formula {
            id: "answer".to_owned(),
            name: "Answer".to_owned(),
            latex: "42".to_owned(),
            variables: Vec::new(),
            result_unit: UnitVec::DIMENSIONLESS,
            description: None,
        };
        let scored = score_formulas(std::slice::from_ref(&constant), &[]);
        assert!((scored[0].score - 6.0).abs() < 1e-9);
    }
}
