//! CLI library components for the dimsheet worksheet tool.

pub mod echo_eval;
pub mod logging;
pub mod worksheet;
