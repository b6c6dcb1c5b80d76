use crate::domain::model::{ExecutionOutcome, Row, SqlValue};
use crate::presentation::messages::Locale;
use thiserror::Error;
use tracing::{error, warn};

const COUNT_MARKER: &str = "COUNT(*)";
const COLUMN_SEPARATOR: &str = " | ";
const ROW_SEPARATOR: &str = "\n";
const NULL_PLACEHOLDER: &str = "NULL";

#[derive(Error, Debug)]
enum FormatFault {
    #[error("column {column} holds text that is not valid UTF-8")]
    InvalidText { column: usize },
}

/// Turn an execution outcome into the sentence shown to the user.
///
/// Never fails: rendering problems become the localized formatting-error
/// sentence.
pub fn format(outcome: &ExecutionOutcome, query_text: &str, locale: Locale) -> String {
    let messages = locale.messages();

    let rows = match outcome {
        ExecutionOutcome::ExecutionError(msg) => return (messages.execution_error)(msg),
        ExecutionOutcome::Rows(rows) if rows.is_empty() => return messages.no_results.to_string(),
        ExecutionOutcome::Rows(rows) => rows,
    };

    if query_text.to_uppercase().contains(COUNT_MARKER) {
        return match leading_count(rows) {
            Some(n) => (messages.match_count)(n),
            None => {
                warn!("Could not parse COUNT(*) result");
                messages.count_unknown.to_string()
            }
        };
    }

    match render_rows(rows) {
        Ok(text) => text,
        Err(e) => {
            error!("Error formatting response: {}", e);
            messages.formatting_error.to_string()
        }
    }
}

/// First column of the first row read as an integer count.
fn leading_count(rows: &[Row]) -> Option<i64> {
    match rows.first()?.first()? {
        SqlValue::Integer(n) => Some(*n),
        SqlValue::Real(r) if r.fract() == 0.0 && r.is_finite() => Some(*r as i64),
        SqlValue::Text(bytes) => std::str::from_utf8(bytes).ok()?.trim().parse().ok(),
        _ => None,
    }
}

fn render_rows(rows: &[Row]) -> Result<String, FormatFault> {
    let lines = rows
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(column, value)| render_value(column, value))
                .collect::<Result<Vec<_>, _>>()
                .map(|cells| cells.join(COLUMN_SEPARATOR))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(lines.join(ROW_SEPARATOR))
}

fn render_value(column: usize, value: &SqlValue) -> Result<String, FormatFault> {
    Ok(match value {
        SqlValue::Null => NULL_PLACEHOLDER.to_string(),
        SqlValue::Integer(i) => i.to_string(),
        SqlValue::Real(r) => r.to_string(),
        SqlValue::Text(bytes) => std::str::from_utf8(bytes)
            .map_err(|_| FormatFault::InvalidText { column })?
            .to_string(),
        SqlValue::Blob(bytes) => format!("x'{}'", hex::encode(bytes)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(rows: Vec<Row>) -> ExecutionOutcome {
        ExecutionOutcome::Rows(rows)
    }

    #[test]
    fn test_count_from_integer() {
        let out = format(
            &rows(vec![vec![SqlValue::Integer(7)]]),
            "select count(*) from Students",
            Locale::English,
        );
        assert_eq!(out, "There are 7 results matching the query.");
    }

    #[test]
    fn test_count_from_integral_real_and_text() {
        let sql = "SELECT COUNT(*) FROM t";
        assert!(format(&rows(vec![vec![SqlValue::Real(3.0)]]), sql, Locale::English).contains('3'));
        assert!(format(&rows(vec![vec![SqlValue::text(" 12 ")]]), sql, Locale::English).contains("12"));
    }

    #[test]
    fn test_count_not_numeric() {
        let out = format(
            &rows(vec![vec![SqlValue::text("many")]]),
            "SELECT COUNT(*) FROM t",
            Locale::English,
        );
        assert_eq!(out, "Could not determine the number of results.");

        let out = format(&rows(vec![vec![]]), "SELECT COUNT(*) FROM t", Locale::English);
        assert_eq!(out, "Could not determine the number of results.");
    }

    #[test]
    fn test_tabular_rendering() {
        let out = format(
            &rows(vec![
                vec![SqlValue::text("أحمد"), SqlValue::Integer(1), SqlValue::Null],
                vec![SqlValue::text("نورة"), SqlValue::Real(2.5), SqlValue::Blob(vec![0xde, 0xad])],
            ]),
            "SELECT FirstName, x, y FROM Students",
            Locale::English,
        );
        assert_eq!(out, "أحمد | 1 | NULL\nنورة | 2.5 | x'dead'");
    }

    #[test]
    fn test_invalid_utf8_becomes_formatting_error() {
        let out = format(
            &rows(vec![vec![SqlValue::Text(vec![0xff, 0xfe])]]),
            "SELECT name FROM t",
            Locale::Arabic,
        );
        assert_eq!(out, "حدث خطأ أثناء تنسيق الرد.");
    }
}
