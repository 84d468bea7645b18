//! CLI argument definitions for the dimsheet tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dimsheet",
    version,
    about = "Unit-aware expression worksheet",
    long_about = "Evaluate worksheets of physics expressions with dimensional units.\n\n\
                  Renders unit vectors as canonical LaTeX, normalizes typed unit text,\n\
                  and suggests matching physics formulas from the builtin catalog."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a unit as canonical LaTeX and plain text.
    Render(RenderArgs),

    /// Escape recognized unit tokens in free-form unit text.
    Normalize(NormalizeArgs),

    /// List catalog formulas, filtered and ranked by available units.
    Formulas(FormulasArgs),

    /// Evaluate a worksheet file and print the results.
    Run(RunArgs),
}

#[derive(Parser)]
pub struct RenderArgs {
    /// Catalog unit symbol (base like `m`, derived like `Hz` or `Ohm`).
    #[arg(value_name = "SYMBOL", required_unless_present = "exponents")]
    pub symbol: Option<String>,

    /// Raw exponents instead of a symbol: seven comma-separated integers
    /// in the base order m, s, kg, A, K, mol, cd.
    #[arg(
        long = "exponents",
        value_name = "LIST",
        conflicts_with = "symbol",
        allow_hyphen_values = true
    )]
    pub exponents: Option<String>,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Unit text to escape, e.g. `5 kHz` becomes `5 \kHz`.
    #[arg(value_name = "TEXT")]
    pub text: String,
}

#[derive(Parser)]
pub struct FormulasArgs {
    /// Free-text search over formula names, LaTeX, and descriptions.
    #[arg(long = "query", value_name = "TEXT")]
    pub query: Option<String>,

    /// Available units, e.g. "q:C, r:m -> N"; the part after the arrow
    /// names the wanted result unit.
    #[arg(long = "units", value_name = "QUERY")]
    pub units: Option<String>,

    /// Keep only formulas whose every variable unit is available.
    #[arg(long = "require-all", requires = "units")]
    pub require_all: bool,

    /// Keep only formulas computable from the available units.
    #[arg(long = "computable", requires = "units")]
    pub computable: bool,

    /// Group the output by category.
    #[arg(long = "grouped")]
    pub grouped: bool,

    /// Load a TOML formula catalog instead of the builtin one.
    #[arg(long = "catalog", value_name = "FILE")]
    pub catalog: Option<PathBuf>,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Worksheet file with one `math ; unit` line per record.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print records as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
