//! Placeholder evaluator for worksheet runs.
//!
//! Real deployments plug an external math engine into the sheet; this
//! stand-in honors the same contract with canned rules so the whole cycle
//! can run end to end: math containing `error` fails with a syntax error,
//! blank math yields nothing, seeded constants resolve with their units,
//! and anything else echoes back. Unit text always comes back in escaped
//! form, so a second pass settles the sheet.

use std::collections::BTreeMap;

use dimsheet_engine::{EvalRequest, EvalResult, Evaluator, EvaluatorError};
use dimsheet_model::UnitVec;
use dimsheet_units::{escape_unit_tokens, lookup_symbol, unit_to_latex, value_to_latex};

/// Evaluator that echoes input back instead of computing.
#[derive(Debug, Default)]
pub struct EchoEvaluator {
    constants: BTreeMap<String, Constant>,
}

#[derive(Debug)]
struct Constant {
    value_text: String,
    unit_text: String,
}

impl EchoEvaluator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An evaluator seeded with a few physical constants.
    #[must_use]
    pub fn with_default_constants() -> Self {
        let mut evaluator = Self::new();
        evaluator.set_constant("\\pi", "3.14159", "\\text{rad}");
        evaluator.set_constant("c", "299792458", "m/s");
        evaluator.set_constant("g", "9.81", "m/s^2");
        evaluator
    }

    fn respond(&self, request: &EvalRequest) -> EvalResult {
        let math = request.math_text.trim();
        let mut result = EvalResult::empty(request.id, &request.unit_text);

        if math.is_empty() {
            return result;
        }
        if math.contains("error") {
            result.error = Some("Syntax Error".to_string());
            return result;
        }
        if let Some(constant) = self.constants.get(math) {
            result.value_latex = Some(constant.value_text.clone());
            result.value = constant.value_text.parse().ok();
            if !constant.unit_text.is_empty() {
                let resolved = resolve_unit(&constant.unit_text);
                result.unit_text = resolved.text;
                result.unit_from_evaluation = true;
                result.unit_vec = resolved.unit;
                result.unit_latex = resolved.unit.map(unit_to_latex);
            }
            return result;
        }

        // Echo: numbers come back through the display formatter, anything
        // else verbatim. The typed unit is normalized and, when it is a
        // bare catalog symbol, resolved to its dimensional signature.
        result.value = math.parse::<f64>().ok();
        result.value_latex = Some(match result.value {
            Some(value) => value_to_latex(value),
            None => math.to_string(),
        });
        let resolved = resolve_unit(&request.unit_text);
        result.unit_text = resolved.text;
        result.unit_vec = resolved.unit;
        result.unit_latex = resolved.unit.map(unit_to_latex);
        result
    }
}

impl Evaluator for EchoEvaluator {
    fn evaluate_batch(&self, requests: &[EvalRequest]) -> Result<Vec<EvalResult>, EvaluatorError> {
        Ok(requests.iter().map(|request| self.respond(request)).collect())
    }

    fn set_constant(&mut self, name: &str, value_text: &str, unit_text: &str) {
        self.constants.insert(
            name.to_string(),
            Constant {
                value_text: value_text.to_string(),
                unit_text: unit_text.to_string(),
            },
        );
    }
}

struct ResolvedUnit {
    text: String,
    unit: Option<UnitVec>,
}

/// Normalizes unit text and looks up bare catalog symbols.
///
/// Compound text ("m/s") keeps its escaped spelling without a vector; the
/// placeholder does not parse unit arithmetic.
fn resolve_unit(text: &str) -> ResolvedUnit {
    let symbol = text.trim().trim_start_matches('\\');
    ResolvedUnit {
        text: escape_unit_tokens(text),
        unit: lookup_symbol(symbol),
    }
}
