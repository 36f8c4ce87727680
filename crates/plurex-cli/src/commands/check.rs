//! Implementation of the `plurex check` command.

use miette::{IntoDiagnostic, Report};
use owo_colors::{OwoColorize, Stream};
use plurex::{EvalError, Expression};
use serde::Serialize;

use crate::output::SyntaxDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Expressions to check
    #[arg(required = true)]
    pub expressions: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked expression.
#[derive(Debug, Serialize)]
struct CheckJson {
    expression: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Parse and structure-check an expression without evaluating it.
fn check_expression(source: &str) -> Result<(), EvalError> {
    Expression::parse(source)?.check()
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let results: Vec<(String, Result<(), EvalError>)> = args
        .expressions
        .into_iter()
        .map(|source| {
            let result = check_expression(&source);
            (source, result)
        })
        .collect();
    let any_invalid = results.iter().any(|(_, result)| result.is_err());

    if args.json {
        let json_data: Vec<CheckJson> = results
            .iter()
            .map(|(expression, result)| CheckJson {
                expression: expression.clone(),
                valid: result.is_ok(),
                error: result.as_ref().err().map(ToString::to_string),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json_data).into_diagnostic()?);
    } else {
        for (index, (expression, result)) in results.iter().enumerate() {
            match result {
                Ok(()) => println!(
                    "{} {}",
                    "ok".if_supports_color(Stream::Stdout, |t| t.green()),
                    expression
                ),
                Err(EvalError::Syntax(err)) => {
                    let name = format!("expression {}", index + 1);
                    let diagnostic = SyntaxDiagnostic::from_syntax_error(&name, expression, err);
                    eprintln!("{:?}", Report::new(diagnostic));
                }
                Err(err) => eprintln!("{}: {}", expression, err),
            }
        }
    }

    if any_invalid {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
