//! Sequential expression sheet engine.
//!
//! [`ExpressionSheet`] owns an ordered, never-empty list of expression
//! records plus focus state, and drives the coalesced evaluate-and-merge
//! cycle against an injected [`Evaluator`] capability. It holds no global
//! state and performs no I/O of its own; hosts drain focus requests and
//! shuttle batches to whatever evaluation backend they own.

pub mod evaluator;
pub mod sheet;

pub use evaluator::{EvalRequest, EvalResult, Evaluator, EvaluatorError};
pub use sheet::{ExpressionSheet, FocusField, FocusRequest};
