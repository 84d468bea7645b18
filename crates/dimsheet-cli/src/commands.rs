//! Subcommand implementations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use tracing::{debug, info};

use dimsheet_cli::echo_eval::EchoEvaluator;
use dimsheet_cli::worksheet::{evaluate_until_settled, parse_worksheet};
use dimsheet_engine::ExpressionSheet;
use dimsheet_formulas::{
    FormulaCatalog, UnitQuery, find_computable, group_by_category, match_by_result,
    match_by_variables, parse_unit_query, score_formulas, search_text,
};
use dimsheet_model::{AvailableExpression, EvalOutcome, ExpressionRecord, Formula, UnitVec};
use dimsheet_units::{escape_unit_tokens, lookup_symbol, unit_to_latex, unit_to_text};

use crate::cli::{FormulasArgs, NormalizeArgs, RenderArgs, RunArgs};

/// Unit rewrites settle after one extra pass; anything deeper means the
/// evaluator keeps changing its answers.
const MAX_EVAL_PASSES: usize = 4;

pub fn run_render(args: &RenderArgs) -> Result<()> {
    let unit = resolve_render_unit(args)?;
    println!("LaTeX: {}", unit_to_latex(unit));
    println!("Text:  {}", unit_to_text(unit));
    println!("Exponents: {:?}", unit.exponents());
    Ok(())
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<()> {
    println!("{}", escape_unit_tokens(&args.text));
    Ok(())
}

pub fn run_formulas(args: &FormulasArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    debug!(formulas = catalog.len(), "catalog loaded");

    let mut formulas: Vec<Formula> = match args.query.as_deref() {
        Some(text) => search_text(catalog.formulas(), text)
            .into_iter()
            .cloned()
            .collect(),
        None => catalog.formulas().to_vec(),
    };

    let mut available = Vec::new();
    if let Some(text) = args.units.as_deref() {
        let Some(query) = parse_unit_query(text) else {
            bail!("no unit in `{text}` resolves to a known symbol");
        };
        available = available_from_query(&query);
        formulas = match_by_variables(&formulas, &available, args.require_all)
            .into_iter()
            .cloned()
            .collect();
        if let Some(target) = query.output {
            formulas = match_by_result(&formulas, target)
                .into_iter()
                .cloned()
                .collect();
        }
        if args.computable {
            formulas = find_computable(&formulas, &available)
                .into_iter()
                .map(|entry| entry.formula.clone())
                .collect();
        }
    }

    // Rank against the available units; plain browsing keeps catalog order.
    let mut scores = None;
    if !available.is_empty() {
        let scored = score_formulas(&formulas, &available);
        let (ordered, values): (Vec<Formula>, Vec<f64>) = scored
            .into_iter()
            .map(|entry| (entry.formula.clone(), entry.score))
            .unzip();
        formulas = ordered;
        scores = Some(values);
    }

    if formulas.is_empty() {
        println!("No formulas matched.");
        return Ok(());
    }
    if args.grouped {
        print_grouped(&formulas);
    } else {
        print_formula_table(&formulas, scores.as_deref());
    }
    Ok(())
}

/// Returns whether any record failed evaluation.
pub fn run_worksheet(args: &RunArgs) -> Result<bool> {
    let input = fs::read_to_string(&args.file)
        .with_context(|| format!("read {}", args.file.display()))?;
    let mut sheet = ExpressionSheet::new();
    sheet.load(&parse_worksheet(&input));

    let evaluator = EchoEvaluator::with_default_constants();
    let passes = evaluate_until_settled(&mut sheet, &evaluator, MAX_EVAL_PASSES);
    let errors = sheet
        .records()
        .iter()
        .filter(|record| record.outcome.as_ref().is_some_and(EvalOutcome::is_error))
        .count();
    info!(
        records = sheet.records().len(),
        passes, errors, "worksheet evaluated"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(sheet.records())?);
    } else {
        print_records(sheet.records());
    }
    Ok(errors > 0)
}

fn resolve_render_unit(args: &RenderArgs) -> Result<UnitVec> {
    if let Some(list) = args.exponents.as_deref() {
        return parse_exponents(list);
    }
    let symbol = args.symbol.as_deref().unwrap_or_default();
    lookup_symbol(symbol).with_context(|| format!("unknown unit symbol `{symbol}`"))
}

/// Parses the `--exponents` list: seven comma-separated integers in the
/// base order m, s, kg, A, K, mol, cd.
fn parse_exponents(list: &str) -> Result<UnitVec> {
    let exponents = list
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<i32>()
                .with_context(|| format!("invalid exponent `{part}`"))
        })
        .collect::<Result<Vec<i32>>>()?;
    Ok(UnitVec::from_slice(&exponents)?)
}

fn load_catalog(path: Option<&Path>) -> Result<FormulaCatalog> {
    match path {
        Some(path) => FormulaCatalog::load_from_path(path)
            .with_context(|| format!("load catalog {}", path.display())),
        None => Ok(FormulaCatalog::builtin()),
    }
}

/// The matcher compares units only; names and values are synthetic.
fn available_from_query(query: &UnitQuery) -> Vec<AvailableExpression> {
    query
        .inputs
        .iter()
        .enumerate()
        .map(|(index, &unit)| AvailableExpression {
            name: format!("q{index}"),
            value: 1.0,
            unit,
        })
        .collect()
}

fn print_formula_table(formulas: &[Formula], scores: Option<&[f64]>) {
    let mut table = Table::new();
    let mut headers = vec![
        header_cell("Name"),
        header_cell("Expression"),
        header_cell("Variables"),
        header_cell("Result"),
    ];
    if scores.is_some() {
        headers.push(header_cell("Score"));
    }
    table.set_header(headers);
    apply_table_style(&mut table);
    if scores.is_some() {
        align_column(&mut table, 4, CellAlignment::Right);
    }
    for (index, formula) in formulas.iter().enumerate() {
        let mut row = formula_row(formula);
        if let Some(scores) = scores {
            row.push(Cell::new(format!("{:.1}", scores[index])));
        }
        table.add_row(row);
    }
    println!("{table}");
}

fn print_grouped(formulas: &[Formula]) {
    for (index, (category, members)) in group_by_category(formulas).into_iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("{category} ({})", members.len());
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Name"),
            header_cell("Expression"),
            header_cell("Variables"),
            header_cell("Result"),
        ]);
        apply_table_style(&mut table);
        for formula in members {
            table.add_row(formula_row(formula));
        }
        println!("{table}");
    }
}

fn formula_row(formula: &Formula) -> Vec<Cell> {
    vec![
        Cell::new(&formula.name),
        Cell::new(&formula.latex),
        Cell::new(variables_column(formula)),
        Cell::new(unit_to_text(formula.result_unit)),
    ]
}

fn variables_column(formula: &Formula) -> String {
    formula
        .variables
        .iter()
        .map(|variable| format!("{}:{}", variable.name, unit_to_text(variable.unit)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_records(records: &[ExpressionRecord]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Expression"),
        header_cell("Unit"),
        header_cell("Value"),
        header_cell("Result Unit"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, record) in records.iter().enumerate() {
        table.add_row(record_row(index + 1, record));
    }
    println!("{table}");
}

fn record_row(line: usize, record: &ExpressionRecord) -> Vec<Cell> {
    let mut row = vec![Cell::new(line), Cell::new(&record.math_text), unit_cell(record)];
    match &record.outcome {
        Some(EvalOutcome::Value {
            value_latex,
            unit_latex,
            ..
        }) => {
            row.push(Cell::new(value_latex));
            row.push(if unit_latex.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(unit_latex)
            });
            row.push(Cell::new("ok").fg(Color::Green));
        }
        Some(EvalOutcome::Error { message }) => {
            row.push(dim_cell("-"));
            row.push(dim_cell("-"));
            row.push(Cell::new(message).fg(Color::Red));
        }
        None => {
            row.push(dim_cell("-"));
            row.push(dim_cell("-"));
            row.push(dim_cell("-"));
        }
    }
    row
}

/// Evaluator-resolved units render dimmed to set them apart from typed ones.
fn unit_cell(record: &ExpressionRecord) -> Cell {
    if record.unit_text.is_empty() {
        dim_cell("-")
    } else if record.unit_from_evaluation {
        Cell::new(&record.unit_text).fg(Color::DarkGrey)
    } else {
        Cell::new(&record.unit_text)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponent_lists_parse_in_slot_order() {
        let unit = parse_exponents("2, -3, 1, -2, 0, 0, 0").expect("seven slots");
        assert_eq!(unit, UnitVec::new([2, -3, 1, -2, 0, 0, 0]));
    }

    #[test]
    fn bad_exponent_lists_are_rejected() {
        assert!(parse_exponents("1, 2, 3").is_err());
        assert!(parse_exponents("1, 2, x, 4, 5, 6, 7").is_err());
    }

    #[test]
    fn unit_queries_become_available_expressions() {
        let query = parse_unit_query("q:C, r:m").expect("two inputs");
        let available = available_from_query(&query);
        assert_eq!(available.len(), 2);
        assert_eq!(available[0].unit, lookup_symbol("C").expect("coulomb"));
        assert_eq!(available[1].unit, lookup_symbol("m").expect("meter"));
    }

    #[test]
    fn variable_columns_join_name_unit_pairs() {
        let catalog = FormulaCatalog::builtin();
        let formula = catalog.get("ohms_law").expect("builtin entry");
        assert_eq!(variables_column(formula), "I:A, R:m^2·s^-3·kg·A^-2");
    }
}
