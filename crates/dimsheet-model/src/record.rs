//! Expression records and their stable identities.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::UnitVec;

/// Stable identity of an expression record.
///
/// Ids are handed out by [`RecordIdGen`] in creation order and are never
/// reused within a sheet, so asynchronous evaluation results can always be
/// merged back by id even after records move or disappear.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Wraps a raw id, e.g. one read back from a host boundary. Fresh ids
    /// come from [`RecordIdGen`].
    #[must_use]
    pub const fn from_u64(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id source. One generator per sheet.
#[derive(Debug, Clone, Default)]
pub struct RecordIdGen {
    next: u64,
}

impl RecordIdGen {
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    pub fn next_id(&mut self) -> RecordId {
        let id = RecordId(self.next);
        self.next += 1;
        id
    }
}

/// Result of the most recent evaluation of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EvalOutcome {
    /// The evaluator produced a value.
    Value {
        /// Rendered result, LaTeX.
        value_latex: String,
        /// Plain numeric value, when the result is one (feeds the
        /// suggestion panel's available-expression set).
        value: Option<f64>,
        /// Dimensional signature of the result, when the evaluator derived one.
        unit_vec: Option<UnitVec>,
        /// Resolved unit text accompanying the value.
        unit_latex: String,
    },
    /// The evaluator rejected the expression.
    Error { message: String },
}

impl EvalOutcome {
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// One line of the expression sheet.
///
/// `math_text` and `unit_text` are raw user input; the engine never parses
/// them. `outcome` is `None` until the first evaluation response arrives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionRecord {
    pub id: RecordId,
    pub math_text: String,
    pub unit_text: String,
    /// Whether `unit_text` was resolved by the evaluator rather than typed.
    pub unit_from_evaluation: bool,
    pub outcome: Option<EvalOutcome>,
}

impl ExpressionRecord {
    #[must_use]
    pub fn empty(id: RecordId) -> Self {
        Self::with_content(id, "", "")
    }

    #[must_use]
    pub fn with_content(id: RecordId, math_text: &str, unit_text: &str) -> Self {
        Self {
            id,
            math_text: math_text.to_string(),
            unit_text: unit_text.to_string(),
            unit_from_evaluation: false,
            outcome: None,
        }
    }

    /// Blank records are skipped by Enter handling and batch no-op checks.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.math_text.trim().is_empty()
    }

    /// Clear the text fields in place, keeping the id.
    ///
    /// The stale outcome stays until the next evaluation pass replaces it.
    pub fn clear_content(&mut self) {
        self.math_text.clear();
        self.unit_text.clear();
    }

    /// Whether the unit slot has anything to show, typed or resolved.
    #[must_use]
    pub fn has_unit(&self) -> bool {
        !self.unit_text.is_empty() || self.unit_from_evaluation
    }
}
