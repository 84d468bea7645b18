//! Numeric display formatting for evaluation results.

/// Magnitude at or above which values render in scientific notation.
const SCI_UPPER_BOUND: f64 = 5e9;
/// Positive magnitude strictly below which values render in scientific
/// notation. Exactly 5e-4 stays plain.
const SCI_LOWER_BOUND: f64 = 5e-4;

/// Render a value as plain decimal or LaTeX scientific notation.
///
/// Very large and very small magnitudes become `c\times10^{e}` with the
/// coefficient rounded to 15 significant digits and trailing zeros dropped;
/// everything else renders as the shortest plain decimal.
#[must_use]
pub fn value_to_latex(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= SCI_UPPER_BOUND || (magnitude > 0.0 && magnitude < SCI_LOWER_BOUND) {
        let exponent = magnitude.log10().floor() as i32;
        let coefficient = value / 10f64.powi(exponent);
        // The coefficient carries one digit before the point, so 14 decimal
        // places give 15 significant digits.
        let rounded = (coefficient * 1e14).round() / 1e14;
        format!("{rounded}\\times10^{{{exponent}}}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moderate_values_stay_plain() {
        assert_eq!(value_to_latex(50.0), "50");
        assert_eq!(value_to_latex(500_000_000.0), "500000000");
        assert_eq!(value_to_latex(0.005), "0.005");
        assert_eq!(value_to_latex(0.0), "0");
        assert_eq!(value_to_latex(-273.15), "-273.15");
    }

    #[test]
    fn lower_bound_is_exclusive() {
        assert_eq!(value_to_latex(0.0005), "0.0005");
        assert_eq!(value_to_latex(0.0004), "4\\times10^{-4}");
    }

    #[test]
    fn upper_bound_is_inclusive() {
        assert_eq!(value_to_latex(5_000_000_000.0), "5\\times10^{9}");
        assert_eq!(value_to_latex(4_999_999_999.0), "4999999999");
    }

    #[test]
    fn coefficient_keeps_significant_digits() {
        assert_eq!(value_to_latex(5_060_600_000.0), "5.0606\\times10^{9}");
        assert_eq!(value_to_latex(0.000_000_05), "5\\times10^{-8}");
    }

    #[test]
    fn sign_stays_on_the_coefficient() {
        assert_eq!(value_to_latex(-5_000_000_000.0), "-5\\times10^{9}");
        assert_eq!(value_to_latex(-0.0004), "-4\\times10^{-4}");
    }
}
