//! Free-text formula search.

use dimsheet_model::Formula;

/// Case-insensitive text search over a formula list.
///
/// A blank query matches everything. Otherwise a formula matches when the
/// query is a substring of its name, LaTeX, or description, or an in-order
/// character subsequence of its name or LaTeX.
#[must_use]
pub fn search_text<'a>(formulas: &'a [Formula], query: &str) -> Vec<&'a Formula> {
    if query.trim().is_empty() {
        return formulas.iter().collect();
    }

    let needle = query.to_lowercase();
    formulas
        .iter()
        .filter(|formula| {
            let name = formula.name.to_lowercase();
            let latex = formula.latex.to_lowercase();
            name.contains(&needle)
                || latex.contains(&needle)
                || formula
                    .description
                    .as_deref()
                    .is_some_and(|description| description.to_lowercase().contains(&needle))
                || is_subsequence(&needle, &name)
                || is_subsequence(&needle, &latex)
        })
        .collect()
}

/// True when every char of `needle` appears in `haystack` in order.
fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut haystack = haystack.chars();
    needle
        .chars()
        .all(|wanted| haystack.any(|have| have == wanted))
}
