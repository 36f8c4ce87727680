//! Table formatting utilities for CLI output.

use comfy_table::{Cell, Color, ContentArrangement, Table, presets};

/// How one alternative fared during selection.
pub struct AlternativeOutcome {
    /// Condition expression source.
    pub expression: String,
    /// Text chosen when the condition holds.
    pub text: String,
    /// Evaluation result, or the error message.
    pub result: Result<bool, String>,
    /// Whether this alternative was selected.
    pub selected: bool,
}

/// Format alternative outcomes as an ASCII table.
///
/// Results are colored when `colored` is set: green for a holding
/// condition, red for an error.
pub fn format_alternatives_table(outcomes: &[AlternativeOutcome], colored: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Condition", "Result", "Text"]);

    for (index, outcome) in outcomes.iter().enumerate() {
        let (result, color) = match &outcome.result {
            Ok(true) => ("true".to_string(), Color::Green),
            Ok(false) => ("false".to_string(), Color::Reset),
            Err(message) => (format!("error: {message}"), Color::Red),
        };
        let marker = if outcome.selected { "*" } else { "" };
        let mut result_cell = Cell::new(result);
        if colored {
            result_cell = result_cell.fg(color);
        }
        table.add_row(vec![
            Cell::new(format!("{}{}", index + 1, marker)),
            Cell::new(&outcome.expression),
            result_cell,
            Cell::new(&outcome.text),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_row_is_marked() {
        let outcomes = vec![
            AlternativeOutcome {
                expression: "n == ONE".to_string(),
                text: "one".to_string(),
                result: Ok(false),
                selected: false,
            },
            AlternativeOutcome {
                expression: "n == OTHER".to_string(),
                text: "many".to_string(),
                result: Ok(true),
                selected: true,
            },
            AlternativeOutcome {
                expression: "n > ONE".to_string(),
                text: "never".to_string(),
                result: Err("operator '>' is not supported for PLURAL operands".to_string()),
                selected: false,
            },
        ];
        let rendered = format_alternatives_table(&outcomes, false).to_string();
        assert!(rendered.contains("2*"));
        assert!(rendered.contains("n == OTHER"));
        assert!(rendered.contains("error:"));
        assert!(!rendered.contains("1*"));
    }
}
