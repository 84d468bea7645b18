//! Worksheet files for the `run` command.
//!
//! A worksheet is plain text with one record per line: the math text,
//! optionally followed by `;` and the unit text. Blank lines and `#`
//! comments are skipped.

use dimsheet_engine::{Evaluator, ExpressionSheet};

/// Parses worksheet text into (math, unit) content pairs for
/// [`ExpressionSheet::load`].
#[must_use]
pub fn parse_worksheet(input: &str) -> Vec<(String, String)> {
    input.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    match trimmed.split_once(';') {
        Some((math, unit)) => Some((math.trim().to_string(), unit.trim().to_string())),
        None => Some((trimmed.to_string(), String::new())),
    }
}

/// Runs evaluation cycles until the sheet is clean, up to `max_passes`.
///
/// One extra pass is normal: an evaluator that rewrites unit text re-dirties
/// the sheet once before its responses stabilize. The cap guards against
/// evaluators that never settle and against a capability that stays
/// unavailable. Returns the number of passes run.
pub fn evaluate_until_settled(
    sheet: &mut ExpressionSheet,
    evaluator: &dyn Evaluator,
    max_passes: usize,
) -> usize {
    let mut passes = 0;
    while passes < max_passes && sheet.is_dirty() {
        sheet.evaluate(evaluator);
        passes += 1;
    }
    passes
}

#[cfg(test)]
mod tests {
    use dimsheet_engine::{EvalRequest, EvalResult, EvaluatorError};

    use super::*;

    #[test]
    fn lines_split_on_the_first_semicolon() {
        let lines = parse_worksheet("F = q E ; N\nE ; V ; m");
        assert_eq!(
            lines,
            [
                ("F = q E".to_string(), "N".to_string()),
                ("E".to_string(), "V ; m".to_string()),
            ]
        );
    }

    #[test]
    fn lines_without_a_unit_get_an_empty_one() {
        let lines = parse_worksheet("1/2");
        assert_eq!(lines, [("1/2".to_string(), String::new())]);
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let lines = parse_worksheet("# capacitor bank\n\n   \nQ ; C\n");
        assert_eq!(lines, [("Q".to_string(), "C".to_string())]);
    }

    /// Rewrites every unit on every pass, so the sheet never settles.
    struct RestlessEvaluator;

    impl Evaluator for RestlessEvaluator {
        fn evaluate_batch(
            &self,
            requests: &[EvalRequest],
        ) -> Result<Vec<EvalResult>, EvaluatorError> {
            Ok(requests
                .iter()
                .map(|request| {
                    EvalResult::empty(request.id, &format!("{}x", request.unit_text))
                })
                .collect())
        }
    }

    #[test]
    fn settling_stops_at_the_pass_cap() {
        let mut sheet = ExpressionSheet::new();
        sheet.load(&parse_worksheet("a ; m"));
        let passes = evaluate_until_settled(&mut sheet, &RestlessEvaluator, 3);
        assert_eq!(passes, 3);
        assert!(sheet.is_dirty());
    }

    #[test]
    fn clean_sheets_run_zero_passes() {
        struct IdleEvaluator;
        impl Evaluator for IdleEvaluator {
            fn evaluate_batch(
                &self,
                requests: &[EvalRequest],
            ) -> Result<Vec<EvalResult>, EvaluatorError> {
                Ok(requests
                    .iter()
                    .map(|request| EvalResult::empty(request.id, &request.unit_text))
                    .collect())
            }
        }

        let mut sheet = ExpressionSheet::new();
        assert_eq!(evaluate_until_settled(&mut sheet, &IdleEvaluator, 4), 1);
        assert_eq!(evaluate_until_settled(&mut sheet, &IdleEvaluator, 4), 0);
    }
}
