//! The evaluation capability boundary.
//!
//! The sheet never parses math or unit text; it ships both to an
//! [`Evaluator`] the host owns and injects by reference. Requests and
//! results are serde types because real evaluators sit across a process or
//! foreign-function boundary.

use dimsheet_model::{RecordId, UnitVec};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One record's content as sent to the evaluator, in list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalRequest {
    pub id: RecordId,
    pub math_text: String,
    pub unit_text: String,
}

/// One record's evaluation response, correlated strictly by id.
///
/// `unit_text` echoes the request's unit text unless the evaluator resolved
/// a unit itself; then `unit_from_evaluation` is set and `unit_text` carries
/// the resolved text. The merge writes it back into the record either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalResult {
    pub id: RecordId,
    /// Rendered value, when evaluation produced one. Blank math yields
    /// neither a value nor an error.
    pub value_latex: Option<String>,
    /// Plain numeric value, when the result is a number.
    pub value: Option<f64>,
    /// Dimensional signature of the result, when the evaluator derived one.
    pub unit_vec: Option<UnitVec>,
    /// Canonical LaTeX for `unit_vec`, when derived.
    pub unit_latex: Option<String>,
    /// Per-record failure; takes precedence over `value_latex` on merge.
    pub error: Option<String>,
    pub unit_from_evaluation: bool,
    pub unit_text: String,
}

impl EvalResult {
    /// A response carrying no value and no error, echoing the unit text.
    #[must_use]
    pub fn empty(id: RecordId, unit_text: &str) -> Self {
        Self {
            id,
            value_latex: None,
            value: None,
            unit_vec: None,
            unit_latex: None,
            error: None,
            unit_from_evaluation: false,
            unit_text: unit_text.to_string(),
        }
    }
}

/// Failure of the capability itself, as opposed to a per-record failure
/// (those travel inside [`EvalResult::error`]).
#[derive(Debug, Error)]
pub enum EvaluatorError {
    /// The capability is not initialized or reachable yet.
    #[error("evaluator not ready")]
    NotReady,
    /// The batch as a whole failed.
    #[error("evaluation failed: {message}")]
    Failed { message: String },
}

/// External evaluation capability.
///
/// Owned by the host, injected by reference on every cycle; the engine
/// never caches one. Implementations must correlate results by id and may
/// return them in any order, drop ids, or add unknown ids; the merge is
/// tolerant of all three.
pub trait Evaluator {
    fn evaluate_batch(&self, requests: &[EvalRequest]) -> Result<Vec<EvalResult>, EvaluatorError>;

    /// Seeds a named constant for subsequent evaluations.
    ///
    /// Hosts call this once at startup; evaluators without constant support
    /// ignore it.
    fn set_constant(&mut self, _name: &str, _value_text: &str, _unit_text: &str) {}
}
