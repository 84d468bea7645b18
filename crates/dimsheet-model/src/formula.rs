//! Formula and matching-input types shared by the catalog and the matcher.

use serde::{Deserialize, Serialize};

use crate::UnitVec;

/// One required variable of a formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaVariable {
    pub name: String,
    pub unit: UnitVec,
}

/// A catalog formula: display metadata plus the unit signature that drives
/// matching and scoring.
///
/// Variables keep their catalog order; matching ignores it but suggestion
/// panels present variables in the order the formula is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formula {
    pub id: String,
    pub name: String,
    pub latex: String,
    pub variables: Vec<FormulaVariable>,
    pub result_unit: UnitVec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Formula {
    #[must_use]
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Units required by this formula, in catalog order.
    pub fn required_units(&self) -> impl Iterator<Item = UnitVec> + '_ {
        self.variables.iter().map(|var| var.unit)
    }
}

/// An evaluated expression offered to the matcher.
///
/// Built by the host from sheet records that evaluated successfully with a
/// known dimensional signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableExpression {
    pub name: String,
    pub value: f64,
    pub unit: UnitVec,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_formula() -> Formula {
        Formula {
            id: "ohms_law".to_string(),
            name: "Ohm's Law".to_string(),
            latex: "V = IR".to_string(),
            variables: vec![
                FormulaVariable {
                    name: "I".to_string(),
                    unit: UnitVec::new([0, 0, 0, 1, 0, 0, 0]),
                },
                FormulaVariable {
                    name: "R".to_string(),
                    unit: UnitVec::new([2, -3, 1, -2, 0, 0, 0]),
                },
            ],
            result_unit: UnitVec::new([2, -3, 1, -1, 0, 0, 0]),
            description: Some("Voltage across a resistor".to_string()),
        }
    }

    #[test]
    fn required_units_follow_catalog_order() {
        let formula = sample_formula();
        let units: Vec<UnitVec> = formula.required_units().collect();
        assert_eq!(units.len(), 2);
        assert_eq!(units[0], UnitVec::new([0, 0, 0, 1, 0, 0, 0]));
        assert_eq!(formula.variable_count(), 2);
    }

    #[test]
    fn formula_round_trips_through_json() {
        let formula = sample_formula();
        let json = serde_json::to_string(&formula).expect("serialize formula");
        let round: Formula = serde_json::from_str(&json).expect("deserialize formula");
        assert_eq!(round, formula);
    }

    #[test]
    fn missing_description_deserializes_as_none() {
        let json = r#"{
            "id": "x",
            "name": "X",
            "latex": "x",
            "variables": [],
            "result_unit": [0,0,0,0,0,0,0]
        }"#;
        let formula: Formula = serde_json::from_str(json).expect("deserialize formula");
        assert!(formula.description.is_none());
    }
}
