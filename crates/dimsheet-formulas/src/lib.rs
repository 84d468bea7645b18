//! Physics formula catalog and unit-driven suggestion logic.
//!
//! [`FormulaCatalog`] carries the builtin electromagnetism table and loads
//! user catalogs from TOML. The rest of the crate ranks and organizes
//! formulas against what a sheet already holds: exact unit matching
//! ([`matcher`]), relevance scoring ([`score`]), category grouping
//! ([`group`]), unit queries ([`query`]), and free-text search ([`search`]).

pub mod catalog;
pub mod error;
pub mod group;
pub mod matcher;
pub mod query;
pub mod score;
pub mod search;

pub use catalog::FormulaCatalog;
pub use error::FormulaError;
pub use group::{FALLBACK_CATEGORY, category_for, group_by_category};
pub use matcher::{
    FormulaAvailability, availability_report, find_computable, match_by_result, match_by_variables,
};
pub use query::{UnitQuery, parse_unit_query};
pub use score::{ScoredFormula, score_formulas};
pub use search::search_text;
