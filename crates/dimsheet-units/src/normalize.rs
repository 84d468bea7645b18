//! Free-text unit token escaping.
//!
//! Unit fields arrive as raw keyboard input ("5 kHz", "mol K"); downstream
//! rendering needs every unit token escaped ("5 \kHz"). The scanner walks
//! the input once trying the longest token first, and skips over anything
//! already escaped, so re-running it changes nothing.

use std::sync::LazyLock;

use crate::catalog::{NON_SI_TOKENS, SI_PREFIXES};

/// Base-unit spellings the scanner recognizes. Gram appears instead of
/// kilogram so every prefix applies; `kg` itself matches as `k` + `g`.
const TOKEN_BASE_UNITS: [&str; 7] = ["m", "s", "g", "A", "K", "mol", "cd"];

/// Derived-unit spellings for keyboard input; `Ohm` stands in for `Ω`.
const TOKEN_DERIVED_UNITS: [&str; 13] = [
    "Hz", "N", "Pa", "J", "W", "C", "V", "F", "Ohm", "Wb", "T", "H", "S",
];

/// Every recognized token, longest first so "mol" wins over "m" and "mm"
/// wins over "m".
static UNIT_TOKENS: LazyLock<Vec<String>> = LazyLock::new(|| {
    let mut tokens: Vec<String> = Vec::new();
    for base in TOKEN_BASE_UNITS {
        tokens.push(base.to_string());
        for prefix in SI_PREFIXES {
            tokens.push(format!("{prefix}{base}"));
        }
    }
    for derived in TOKEN_DERIVED_UNITS {
        tokens.push(derived.to_string());
        for prefix in SI_PREFIXES {
            tokens.push(format!("{prefix}{derived}"));
        }
    }
    for token in NON_SI_TOKENS {
        tokens.push(token.to_string());
    }
    tokens.sort_by(|a, b| b.len().cmp(&a.len()));
    tokens
});

/// Escape every unit token in `input` with a leading backslash.
///
/// Tokens are bare and prefixed base units, bare and prefixed derived
/// units, and the non-SI spellings from the catalog. Anything that is not
/// a token passes through untouched. Idempotent.
#[must_use]
pub fn escape_unit_tokens(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    let mut rest = input;

    while !rest.is_empty() {
        // An existing escape and its control word pass through untouched.
        if let Some(after_slash) = rest.strip_prefix('\\') {
            let word_end = after_slash
                .find(|c: char| !c.is_alphabetic())
                .unwrap_or(after_slash.len());
            let (word, tail) = after_slash.split_at(word_end);
            out.push('\\');
            out.push_str(word);
            rest = tail;
            // "\mu m" spells a prefixed unit; the token after the space
            // belongs to the escape and must not be escaped again.
            if word == "mu"
                && let Some(after_space) = rest.strip_prefix(' ')
                && let Some(token) = leading_token(after_space)
            {
                out.push(' ');
                out.push_str(token);
                rest = &after_space[token.len()..];
            }
            continue;
        }

        if let Some(token) = leading_token(rest) {
            out.push('\\');
            out.push_str(token);
            rest = &rest[token.len()..];
            continue;
        }

        let mut chars = rest.chars();
        let Some(ch) = chars.next() else { break };
        out.push(ch);
        rest = chars.as_str();
    }

    out
}

fn leading_token(input: &str) -> Option<&'static str> {
    UNIT_TOKENS
        .iter()
        .map(String::as_str)
        .find(|token| input.starts_with(token))
}
