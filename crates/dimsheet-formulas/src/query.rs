//! Unit search query parsing (`"q:C, r:m → F:N"`).

use dimsheet_model::UnitVec;
use dimsheet_units::lookup_symbol;

/// Parsed unit query: the units the caller has, and optionally the one they
/// want out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitQuery {
    pub inputs: Vec<UnitVec>,
    pub output: Option<UnitVec>,
}

/// Parses `"q:C, r:m → N"` style queries.
///
/// Input tokens are comma-separated `var:unit` pairs or bare unit symbols;
/// tokens that resolve to no known symbol are skipped. The part after `→`
/// (ASCII `->` is accepted too) names the wanted result unit. Returns `None`
/// when no input token resolves.
#[must_use]
pub fn parse_unit_query(query: &str) -> Option<UnitQuery> {
    let query = query.replace("->", "→");
    let mut parts = query.split('→');
    let input_part = parts.next().unwrap_or_default();
    let output_part = parts.next();

    let inputs: Vec<UnitVec> = input_part
        .split(',')
        .filter_map(|token| lookup_symbol(unit_name(token)))
        .collect();
    if inputs.is_empty() {
        return None;
    }

    let output = output_part.and_then(|part| lookup_symbol(unit_name(part)));

    Some(UnitQuery { inputs, output })
}

/// `var:unit` → `unit`; bare tokens pass through.
fn unit_name(token: &str) -> &str {
    let token = token.trim();
    token.split(':').nth(1).unwrap_or(token).trim()
}
