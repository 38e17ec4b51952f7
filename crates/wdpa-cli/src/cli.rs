//! CLI argument definitions for `wdpa-qa`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use wdpa_model::SchemaVariant;

#[derive(Parser)]
#[command(
    name = "wdpa-qa",
    version,
    about = "Quality assurance checks for World Database on Protected Areas tables",
    long_about = "Run the WDPA quality assurance rules against a polygon or point table.\n\n\
                  Exits with 0 when every rule passes, 1 when a rule found violations or\n\
                  could not run, and 2 on usage or input errors."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
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
    /// Check a polygon table.
    Poly(CheckArgs),

    /// Check a point table.
    Point(CheckArgs),

    /// List the rules that apply to each schema variant.
    Rules(RulesArgs),
}

#[derive(Args)]
pub struct CheckArgs {
    /// WDPA table exported as CSV.
    #[arg(value_name = "CSV")]
    pub dataset: PathBuf,

    /// Country code list with an `alpha-3` column.
    ///
    /// Without it the ISO3 and PARENT_ISO3 rules are reported as not evaluated.
    #[arg(long = "iso3", value_name = "CSV")]
    pub iso3: Option<PathBuf>,

    /// Source table CSV; adds the METADATAID cross-reference rule.
    #[arg(long = "source-table", value_name = "CSV")]
    pub source_table: Option<PathBuf>,

    /// JSON file overriding rule parameters.
    #[arg(long = "config", value_name = "JSON")]
    pub config: Option<PathBuf>,

    /// Print the rule-to-outcome mapping as JSON instead of tables.
    #[arg(long = "json", conflicts_with = "records")]
    pub json: bool,

    /// Print the offending rows of one rule.
    #[arg(long = "records", value_name = "RULE")]
    pub records: Option<String>,
}

#[derive(Args)]
pub struct RulesArgs {
    /// Only list this variant.
    #[arg(long = "variant", value_enum)]
    pub variant: Option<VariantArg>,

    /// JSON file overriding rule parameters.
    #[arg(long = "config", value_name = "JSON")]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum VariantArg {
    #[value(alias = "polygon")]
    Poly,
    Point,
}

impl From<VariantArg> for SchemaVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Poly => SchemaVariant::Polygon,
            VariantArg::Point => SchemaVariant::Point,
        }
    }
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
