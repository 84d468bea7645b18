//! Core data model: dimensional unit vectors, expression records, and
//! formula types shared across the workspace.

pub mod error;
pub mod formula;
pub mod record;
pub mod unit;

pub use error::ModelError;
pub use formula::{AvailableExpression, Formula, FormulaVariable};
pub use record::{EvalOutcome, ExpressionRecord, RecordId, RecordIdGen};
pub use unit::{DIMENSION_COUNT, UnitVec, slice_is_dimensionless};
