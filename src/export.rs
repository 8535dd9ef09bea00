//! CSV export of session history.
//!
//! One row per attempt in chronological order. Fields containing a comma,
//! quote, or newline are wrapped in double quotes with inner quotes doubled;
//! [`parse_csv`] reverses that exactly.

use chrono::{DateTime, Datelike, SecondsFormat, Utc};

use crate::{error::ExportError, session::stats::AttemptLog};

pub const HEADER: [&str; 6] = ["Problem", "StudentAnswer", "Correct", "TimeSeconds", "HintUsed", "Timestamp"];

/// One exported row, read back from CSV text.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedRow {
    pub problem_text: String,
    pub student_answer: String,
    pub correct: bool,
    pub time_seconds: f64,
    pub hint_used: bool,
    pub timestamp: String,
}

/// Quote a field if it contains a comma, quote, or line break.
pub fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

pub fn to_csv(history: &AttemptLog) -> Result<String, ExportError> {
    if history.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut lines = Vec::with_capacity(history.len() + 1);
    lines.push(HEADER.join(","));
    for attempt in history.iter() {
        let fields = [
            escape_field(attempt.problem_text()),
            escape_field(attempt.student_answer()),
            yes_no(attempt.is_correct()).to_string(),
            attempt.elapsed_seconds().to_string(),
            yes_no(attempt.hint_used()).to_string(),
            attempt.timestamp().to_rfc3339_opts(SecondsFormat::Millis, true),
        ];
        lines.push(fields.join(","));
    }
    Ok(lines.join("\n"))
}

/// Suggested download name, dated by the session start.
pub fn file_name(created_at: DateTime<Utc>) -> String {
    format!(
        "numbersense_session_{:04}-{:02}-{:02}.csv",
        created_at.year(),
        created_at.month(),
        created_at.day()
    )
}

/// Split CSV text into records of raw (unquoted) fields.
fn records(text: &str) -> Result<Vec<(usize, Vec<String>)>, ExportError> {
    let mut out = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1usize;
    let mut record_line = 1usize;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\n' => {
                record.push(std::mem::take(&mut field));
                out.push((record_line, std::mem::take(&mut record)));
                line += 1;
                record_line = line;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(ExportError::Malformed { line: record_line, reason: "unterminated quote".into() });
    }
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        out.push((record_line, record));
    }
    Ok(out)
}

fn parse_flag(value: &str, line: usize) -> Result<bool, ExportError> {
    match value {
        "Yes" => Ok(true),
        "No"  => Ok(false),
        other => Err(ExportError::Malformed { line, reason: format!("expected Yes/No, got {other:?}") }),
    }
}

/// Read exported CSV back into rows.
pub fn parse_csv(text: &str) -> Result<Vec<ExportedRow>, ExportError> {
    let mut recs = records(text)?.into_iter();

    match recs.next() {
        Some((_, header)) if header == HEADER => {}
        _ => return Err(ExportError::Malformed { line: 1, reason: "missing header".into() }),
    }

    recs.map(|(line, fields)| -> Result<ExportedRow, ExportError> {
        let [problem, answer, correct, secs, hint, stamp]: [String; 6] =
            fields.try_into().map_err(|f: Vec<String>| ExportError::Malformed {
                line,
                reason: format!("expected 6 fields, got {}", f.len()),
            })?;
        let time_seconds = secs.parse::<f64>().map_err(|_| ExportError::Malformed {
            line,
            reason: format!("bad TimeSeconds {secs:?}"),
        })?;
        Ok(ExportedRow {
            problem_text: problem,
            student_answer: answer,
            correct: parse_flag(&correct, line)?,
            time_seconds,
            hint_used: parse_flag(&hint, line)?,
            timestamp: stamp,
        })
    })
    .collect()
}
