//! Worksheet runs through the echo evaluator, end to end.

use dimsheet_cli::echo_eval::EchoEvaluator;
use dimsheet_cli::worksheet::{evaluate_until_settled, parse_worksheet};
use dimsheet_engine::ExpressionSheet;
use dimsheet_model::EvalOutcome;
use dimsheet_units::catalog::NEWTON;

fn settled_sheet(input: &str) -> ExpressionSheet {
    let mut sheet = ExpressionSheet::new();
    sheet.load(&parse_worksheet(input));
    let evaluator = EchoEvaluator::with_default_constants();
    evaluate_until_settled(&mut sheet, &evaluator, 4);
    sheet
}

fn value_latex(sheet: &ExpressionSheet, index: usize) -> &str {
    match &sheet.records()[index].outcome {
        Some(EvalOutcome::Value { value_latex, .. }) => value_latex,
        other => panic!("record {index} has no value: {other:?}"),
    }
}

#[test]
fn records_keep_worksheet_order_and_echo_values() {
    let sheet = settled_sheet("q E\n1/2\nx + y ; m");
    assert_eq!(sheet.records().len(), 3);
    assert_eq!(value_latex(&sheet, 0), "q E");
    assert_eq!(value_latex(&sheet, 1), "1/2");
    assert_eq!(value_latex(&sheet, 2), "x + y");
    assert!(!sheet.is_dirty());
}

#[test]
fn typed_units_normalize_and_resolve() {
    let sheet = settled_sheet("F = q E ; N\n42 ; kHz");
    let records = sheet.records();

    assert_eq!(records[0].unit_text, "\\N");
    assert!(!records[0].unit_from_evaluation);
    match &records[0].outcome {
        Some(EvalOutcome::Value {
            unit_vec,
            unit_latex,
            ..
        }) => {
            assert_eq!(*unit_vec, Some(NEWTON));
            assert_eq!(unit_latex, "\\mathrm{N}");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    // Prefixed symbols normalize but carry no catalog vector.
    assert_eq!(records[1].unit_text, "\\kHz");
    match &records[1].outcome {
        Some(EvalOutcome::Value { unit_vec, .. }) => assert_eq!(*unit_vec, None),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn constants_resolve_and_mark_the_unit() {
    let sheet = settled_sheet("\\pi");
    let record = &sheet.records()[0];
    assert_eq!(value_latex(&sheet, 0), "3.14159");
    assert_eq!(record.unit_text, "\\text{rad}");
    assert!(record.unit_from_evaluation);
}

#[test]
fn error_records_fail_individually() {
    let sheet = settled_sheet("1 + 1\nerror here\nc");
    let records = sheet.records();
    assert!(matches!(
        records[1].outcome,
        Some(EvalOutcome::Error { ref message }) if message == "Syntax Error"
    ));
    assert_eq!(value_latex(&sheet, 0), "1 + 1");
    assert_eq!(value_latex(&sheet, 2), "299792458");
    assert!(!sheet.is_dirty());
}

#[test]
fn unit_rewrites_settle_in_two_passes() {
    let mut sheet = ExpressionSheet::new();
    sheet.load(&parse_worksheet("42 ; kHz"));
    let evaluator = EchoEvaluator::with_default_constants();

    let passes = evaluate_until_settled(&mut sheet, &evaluator, 4);
    assert_eq!(passes, 2);
    assert!(!sheet.is_dirty());
    assert_eq!(sheet.records()[0].unit_text, "\\kHz");
}

#[test]
fn empty_worksheets_load_a_single_blank_record() {
    let sheet = settled_sheet("# nothing but comments\n\n");
    assert_eq!(sheet.records().len(), 1);
    assert_eq!(sheet.records()[0].outcome, None);
    assert!(!sheet.is_dirty());
}
