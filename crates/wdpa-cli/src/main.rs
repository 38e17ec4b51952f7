//! WDPA quality assurance CLI.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;
use wdpa_cli::commands::{print_records, render_json, run_check, run_rules};
use wdpa_cli::logging::{LogConfig, LogFormat, init_logging};
use wdpa_cli::summary::print_summary;
use wdpa_cli::types::CheckRequest;
use wdpa_model::SchemaVariant;

mod cli;

use crate::cli::{CheckArgs, Cli, Command, LogFormatArg, LogLevelArg};

const EXIT_VIOLATIONS: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::from(EXIT_ERROR);
    }
    match cli.command {
        Command::Poly(args) => check(SchemaVariant::Polygon, args),
        Command::Point(args) => check(SchemaVariant::Point, args),
        Command::Rules(args) => {
            match run_rules(args.variant.map(Into::into), args.config.as_deref()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(error) => {
                    eprintln!("error: {error:#}");
                    ExitCode::from(EXIT_ERROR)
                }
            }
        }
    }
}

fn check(variant: SchemaVariant, args: CheckArgs) -> ExitCode {
    let request = CheckRequest {
        variant,
        dataset: args.dataset,
        reference_codes: args.iso3,
        source_table: args.source_table,
        config: args.config,
    };
    let run = match run_check(&request) {
        Ok(run) => run,
        Err(error) => {
            eprintln!("error: {error:#}");
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let printed = if let Some(rule) = &args.records {
        print_records(&run, rule)
    } else if args.json {
        render_json(&run.report).map(|json| println!("{json}"))
    } else {
        print_summary(&run);
        Ok(())
    };
    if let Err(error) = printed {
        eprintln!("error: {error:#}");
        return ExitCode::from(EXIT_ERROR);
    }
    if run.report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_VIOLATIONS)
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !(cli.verbosity.is_present() || cli.log_level.is_some()),
        ..LogConfig::default()
    };
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
