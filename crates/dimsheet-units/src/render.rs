//! Canonical LaTeX rendering of unit vectors.
//!
//! A vector renders as the cheapest representation found by a brute-force
//! search: the plain base-unit expansion, one named derived unit substituted
//! into the numerator or denominator, or a pure ratio of two derived units.
//! Cost is the factor count plus a small penalty for needing a fraction bar;
//! only strictly cheaper candidates replace the current best, so earlier
//! catalog entries win ties. The search runs fresh on every call.

use dimsheet_model::UnitVec;

use crate::catalog::{BASE_UNITS, DERIVED_UNITS};

/// Extra cost charged when a representation needs a fraction bar.
const FRACTION_PENALTY: f64 = 0.5;

/// Render a unit vector as canonical LaTeX.
#[must_use]
pub fn unit_to_latex(unit: UnitVec) -> String {
    // A named unit renders as its own symbol, nothing to search.
    if let Some(derived) = DERIVED_UNITS.iter().find(|derived| derived.unit == unit) {
        return mathrm(derived.symbol);
    }

    let mut best = base_representation(unit);

    // One derived symbol in the numerator, the rest from base units.
    for derived in &DERIVED_UNITS {
        let remaining = base_representation(unit.divide(derived.unit));
        let mut num = Vec::with_capacity(remaining.num.len() + 1);
        num.push(mathrm(derived.symbol));
        num.extend(remaining.num);
        let candidate = Representation {
            num,
            den: remaining.den,
        };
        if candidate.complexity() < best.complexity() {
            best = candidate;
        }
    }

    // One derived symbol in the denominator.
    for derived in &DERIVED_UNITS {
        let remaining = base_representation(unit.multiply(derived.unit));
        let mut den = Vec::with_capacity(remaining.den.len() + 1);
        den.push(mathrm(derived.symbol));
        den.extend(remaining.den);
        let candidate = Representation {
            num: remaining.num,
            den,
        };
        if candidate.complexity() < best.complexity() {
            best = candidate;
        }
    }

    // A pure ratio of two derived symbols.
    for num_derived in &DERIVED_UNITS {
        for den_derived in &DERIVED_UNITS {
            if unit == num_derived.unit.divide(den_derived.unit) {
                let candidate = Representation {
                    num: vec![mathrm(num_derived.symbol)],
                    den: vec![mathrm(den_derived.symbol)],
                };
                if candidate.complexity() < best.complexity() {
                    best = candidate;
                }
            }
        }
    }

    best.into_latex()
}

/// Render a unit vector as plain text for logs and terminal output.
///
/// Multi-character catalog symbols (kg, mol, cd, Hz, Pa, Wb) render as
/// themselves; everything else falls back to a `·`-joined base expansion
/// with signed exponents.
#[must_use]
pub fn unit_to_text(unit: UnitVec) -> String {
    if let Some(base) = BASE_UNITS
        .iter()
        .find(|base| multi_char(base.symbol) && base.unit == unit)
    {
        return base.symbol.to_string();
    }
    if let Some(derived) = DERIVED_UNITS
        .iter()
        .find(|derived| multi_char(derived.symbol) && derived.unit == unit)
    {
        return derived.symbol.to_string();
    }

    let mut parts = Vec::new();
    for (base, exp) in BASE_UNITS.iter().zip(unit.exponents()) {
        if exp == 0 {
            continue;
        }
        if exp == 1 {
            parts.push(base.symbol.to_string());
        } else {
            parts.push(format!("{}^{}", base.symbol, exp));
        }
    }
    if parts.is_empty() {
        "1".to_string()
    } else {
        parts.join("·")
    }
}

/// A candidate rendering: factor strings above and below the bar.
struct Representation {
    num: Vec<String>,
    den: Vec<String>,
}

impl Representation {
    fn complexity(&self) -> f64 {
        let factors = (self.num.len() + self.den.len()) as f64;
        if self.den.is_empty() {
            factors
        } else {
            factors + FRACTION_PENALTY
        }
    }

    fn into_latex(self) -> String {
        if self.num.is_empty() && self.den.is_empty() {
            return "1".to_string();
        }
        if self.den.is_empty() {
            return self.num.join(" \\cdot ");
        }
        let den = self.den.join(" \\cdot ");
        if self.num.is_empty() {
            format!("\\frac{{1}}{{{den}}}")
        } else {
            format!("\\frac{{{}}}{{{den}}}", self.num.join(" \\cdot "))
        }
    }
}

/// Expand a vector into base-unit factors, positives above, negatives below.
fn base_representation(unit: UnitVec) -> Representation {
    let mut num = Vec::new();
    let mut den = Vec::new();
    for (base, exp) in BASE_UNITS.iter().zip(unit.exponents()) {
        if exp > 0 {
            num.push(powered(base.symbol, exp));
        } else if exp < 0 {
            den.push(powered(base.symbol, -exp));
        }
    }
    Representation { num, den }
}

fn powered(symbol: &str, exponent: i32) -> String {
    if exponent == 1 {
        mathrm(symbol)
    } else {
        format!("\\mathrm{{{symbol}}}^{{{exponent}}}")
    }
}

fn mathrm(symbol: &str) -> String {
    format!("\\mathrm{{{symbol}}}")
}

fn multi_char(symbol: &str) -> bool {
    symbol.chars().count() > 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FARAD, JOULE, KELVIN, METER, NEWTON, SECOND};

    #[test]
    fn named_units_render_as_their_symbol() {
        for derived in &DERIVED_UNITS {
            assert_eq!(
                unit_to_latex(derived.unit),
                format!("\\mathrm{{{}}}", derived.symbol),
                "symbol {}",
                derived.symbol
            );
        }
    }

    #[test]
    fn dimensionless_renders_as_one() {
        assert_eq!(unit_to_latex(UnitVec::DIMENSIONLESS), "1");
        assert_eq!(unit_to_text(UnitVec::DIMENSIONLESS), "1");
    }

    #[test]
    fn single_base_units_render_plainly() {
        assert_eq!(unit_to_latex(METER), "\\mathrm{m}");
        assert_eq!(unit_to_latex(METER.power(2)), "\\mathrm{m}^{2}");
        assert_eq!(unit_to_latex(UnitVec::new([0, 0, 1, 0, 0, 0, 0])), "\\mathrm{kg}");
    }

    #[test]
    fn acceleration_keeps_the_base_fraction() {
        let acceleration = METER.divide(SECOND.power(2));
        assert_eq!(
            unit_to_latex(acceleration),
            "\\frac{\\mathrm{m}}{\\mathrm{s}^{2}}"
        );
    }

    #[test]
    fn velocity_substitutes_hertz_in_the_numerator() {
        // m/s costs 2.5 as a fraction; Hz·m costs 2.
        let velocity = METER.divide(SECOND);
        assert_eq!(unit_to_latex(velocity), "\\mathrm{Hz} \\cdot \\mathrm{m}");
    }

    #[test]
    fn heat_capacity_substitutes_joule_over_kelvin() {
        let heat_capacity = JOULE.divide(KELVIN);
        assert_eq!(
            unit_to_latex(heat_capacity),
            "\\frac{\\mathrm{J}}{\\mathrm{K}}"
        );
    }

    #[test]
    fn derived_pair_wins_when_no_single_substitution_helps() {
        // F/N expands to four base factors, and no single substitution gets
        // below that; only the pair search finds the two-symbol ratio.
        let unit = FARAD.divide(NEWTON);
        assert_eq!(unit_to_latex(unit), "\\frac{\\mathrm{F}}{\\mathrm{N}}");
    }

    #[test]
    fn empty_numerator_renders_as_one_over_the_denominator() {
        // 1/(N·s): the denominator substitution wins at cost 2.5, and the
        // Hz/N pair later ties without replacing it.
        let unit = UnitVec::new([-1, 1, -1, 0, 0, 0, 0]);
        assert_eq!(
            unit_to_latex(unit),
            "\\frac{1}{\\mathrm{N} \\cdot \\mathrm{s}}"
        );
    }

    #[test]
    fn equal_complexity_keeps_the_earlier_candidate() {
        // C/N and m/V both describe this vector at cost 2.5; the denominator
        // search reaches m/V before the pair search reaches C/N.
        let unit = UnitVec::new([-1, 3, -1, 1, 0, 0, 0]);
        assert_eq!(unit_to_latex(unit), "\\frac{\\mathrm{m}}{\\mathrm{V}}");
    }

    #[test]
    fn rendering_is_deterministic_across_calls() {
        let unit = UnitVec::new([2, -2, 1, 0, -1, 0, 0]);
        assert_eq!(unit_to_latex(unit), unit_to_latex(unit));
    }

    #[test]
    fn plain_text_prefers_multi_char_symbols() {
        assert_eq!(unit_to_text(UnitVec::new([0, 0, 1, 0, 0, 0, 0])), "kg");
        assert_eq!(unit_to_text(UnitVec::new([0, -1, 0, 0, 0, 0, 0])), "Hz");
        assert_eq!(unit_to_text(UnitVec::new([2, -2, 1, -1, 0, 0, 0])), "Wb");
    }

    #[test]
    fn plain_text_falls_back_to_signed_base_factors() {
        // Single-character symbols like N are skipped by the plain formatter.
        let newton = UnitVec::new([1, -2, 1, 0, 0, 0, 0]);
        assert_eq!(unit_to_text(newton), "m·s^-2·kg");
        assert_eq!(unit_to_text(METER.divide(SECOND)), "m·s^-1");
    }
}
