//! Unit catalogs, canonical LaTeX rendering, token normalization, and
//! numeric display formatting over `dimsheet-model` unit vectors.

pub mod catalog;
pub mod format;
pub mod normalize;
pub mod render;

pub use catalog::{BASE_UNITS, DERIVED_UNITS, lookup_symbol};
pub use format::value_to_latex;
pub use normalize::escape_unit_tokens;
pub use render::{unit_to_latex, unit_to_text};
