//! Implementation of the `plurex select` command.

use std::collections::HashMap;

use miette::IntoDiagnostic;
use plurex::{ErrorPolicy, Evaluator, Value};
use serde::Serialize;

use crate::commands::params::{build_context, build_evaluator, parse_key_val};
use crate::output::table::{AlternativeOutcome, format_alternatives_table};

/// Arguments for the select command.
#[derive(Debug, clap::Args)]
pub struct SelectArgs {
    /// Language tag for plural rules (e.g., en, ru, pt-BR)
    #[arg(long, env = "PLUREX_LANG", default_value = "en")]
    pub lang: String,

    /// Alternatives in 'condition => text' format, tried in order (repeatable)
    #[arg(short = 'a', long = "alt", required = true)]
    pub alternatives: Vec<String>,

    /// Parameters in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Use ordinal plural rules instead of cardinal
    #[arg(long)]
    pub ordinal: bool,

    /// Skip alternatives that fail to evaluate instead of stopping
    #[arg(long)]
    pub skip_errors: bool,

    /// Print every alternative's outcome as a table
    #[arg(long, conflicts_with = "json")]
    pub table: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for select results.
#[derive(Serialize)]
struct SelectOutput {
    index: Option<usize>,
    text: Option<String>,
}

/// Split a `condition => text` alternative.
fn parse_alternative(s: &str) -> Result<(String, String), String> {
    let (condition, text) = s
        .split_once("=>")
        .ok_or_else(|| format!("invalid alternative '{}': expected 'condition => text'", s))?;
    Ok((condition.trim().to_string(), text.trim().to_string()))
}

/// Run the select command.
pub fn run_select(args: SelectArgs, colored: bool) -> miette::Result<i32> {
    let mut alternatives = Vec::new();
    for raw in &args.alternatives {
        match parse_alternative(raw) {
            Ok(alternative) => alternatives.push(alternative),
            Err(message) => {
                eprintln!("{}", message);
                return Ok(exitcode::USAGE);
            }
        }
    }

    let policy = if args.skip_errors {
        ErrorPolicy::Skip
    } else {
        ErrorPolicy::Propagate
    };
    let evaluator = build_evaluator(&args.lang, args.ordinal, policy);
    let context = build_context(args.params);

    if args.table {
        return print_table(&evaluator, alternatives, &context, colored);
    }

    let indexed = alternatives
        .into_iter()
        .enumerate()
        .map(|(index, (condition, text))| (condition, (index, text)));
    match evaluator.select(indexed, &context) {
        Ok(chosen) => {
            if args.json {
                let output = SelectOutput {
                    index: chosen.as_ref().map(|(index, _)| *index),
                    text: chosen.map(|(_, text)| text),
                };
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else if let Some((_, text)) = chosen {
                println!("{}", text);
            } else {
                eprintln!("no alternative matched");
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({ "error": e.to_string() });
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!("Evaluation error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}

/// Evaluate every alternative and print the outcomes as a table.
///
/// Selection follows the evaluator's error policy: under `Propagate` an
/// error before the first match means nothing is selected.
fn print_table(
    evaluator: &Evaluator,
    alternatives: Vec<(String, String)>,
    context: &HashMap<String, Value>,
    colored: bool,
) -> miette::Result<i32> {
    let mut outcomes: Vec<AlternativeOutcome> = alternatives
        .into_iter()
        .map(|(expression, text)| {
            let result = evaluator
                .evaluate(&expression, context)
                .map_err(|e| e.to_string());
            AlternativeOutcome {
                expression,
                text,
                result,
                selected: false,
            }
        })
        .collect();

    let mut failed = false;
    for outcome in &mut outcomes {
        match outcome.result {
            Ok(true) => {
                outcome.selected = true;
                break;
            }
            Ok(false) => {}
            Err(_) if evaluator.on_error() == ErrorPolicy::Skip => {}
            Err(_) => {
                failed = true;
                break;
            }
        }
    }

    println!("{}", format_alternatives_table(&outcomes, colored));
    if failed {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
