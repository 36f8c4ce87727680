//! Implementation of the `plurex eval` command.

use miette::{IntoDiagnostic, Report};
use plurex::{ErrorPolicy, EvalError};
use serde::Serialize;
use tracing::debug;

use crate::commands::params::{
    build_context, build_evaluator, parse_key_val, print_warnings,
};
use crate::output::SyntaxDiagnostic;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Language tag for plural rules (e.g., en, ru, pt-BR)
    #[arg(long, env = "PLUREX_LANG", default_value = "en")]
    pub lang: String,

    /// Condition expression to evaluate
    #[arg(short = 'e', long = "expr")]
    pub expression: String,

    /// Parameters in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Use ordinal plural rules (1st, 2nd, 3rd) instead of cardinal
    #[arg(long)]
    pub ordinal: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalOutput {
    pub expression: String,
    pub language: String,
    pub result: bool,
    pub warnings: Vec<String>,
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let evaluator = build_evaluator(&args.lang, args.ordinal, ErrorPolicy::Propagate);
    let context = build_context(args.params);
    debug!(expression = %args.expression, language = %args.lang, "evaluating");

    match evaluator.evaluate_with_warnings(&args.expression, &context) {
        Ok((result, warnings)) => {
            if args.json {
                let output = EvalOutput {
                    expression: args.expression,
                    language: args.lang,
                    result,
                    warnings: warnings.iter().map(ToString::to_string).collect(),
                };
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                print_warnings(&warnings);
                println!("{}", result);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "expression": args.expression,
                    "error": e.to_string()
                });
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else if let EvalError::Syntax(err) = &e {
                let diagnostic =
                    SyntaxDiagnostic::from_syntax_error("expression", &args.expression, err);
                eprintln!("{:?}", Report::new(diagnostic));
            } else {
                eprintln!("Evaluation error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}
