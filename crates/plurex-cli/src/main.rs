//! plurex CLI entry point.
//!
//! Provides command-line tools for working with condition expressions:
//! - `plurex eval` - Evaluate one expression against parameters
//! - `plurex check` - Validate expression syntax and structure
//! - `plurex select` - Pick the first matching translation alternative

mod commands;
mod output;

use std::env;
use std::io::{self, IsTerminal};
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{CheckArgs, EvalArgs, SelectArgs, run_check, run_eval, run_select};
use tracing_subscriber::EnvFilter;

/// Plural and gender condition expression tools.
#[derive(Debug, Parser)]
#[command(name = "plurex")]
#[command(about = "Plural and gender condition expression tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Log evaluation details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate a condition expression
    Eval(EvalArgs),
    /// Check expression syntax and structure
    Check(CheckArgs),
    /// Select the first alternative whose condition holds
    Select(SelectArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Whether table cells should carry color codes.
///
/// comfy-table colors independently of owo-colors, so `auto` repeats the
/// terminal and `NO_COLOR` checks here.
fn table_colors(color_when: ColorWhen) -> bool {
    match color_when {
        ColorWhen::Auto => io::stdout().is_terminal() && env::var_os("NO_COLOR").is_none(),
        ColorWhen::Always => true,
        ColorWhen::Never => false,
    }
}

/// Install the stderr log subscriber. `--verbose` wins over `RUST_LOG`.
fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("plurex=debug,plurex_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "plurex=warn".into())
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(0)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Eval(args) => run_eval(args),
        Commands::Check(args) => run_check(args),
        Commands::Select(args) => run_select(args, table_colors(cli.color)),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
