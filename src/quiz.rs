//! Single-pass quiz over (question, answer) records loaded from CSV.
//!
//! Independent of the task store; records live only for one run.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    pub question: String,
    pub answer: String,
}

/// Load all records from a headerless two-column CSV file. Any open or
/// parse failure is an error; the quiz cannot run on a partial file.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: Record =
            result.with_context(|| format!("failed to parse {}", path.display()))?;
        records.push(record);
    }
    Ok(records)
}

/// Ask every question in order, scoring trimmed, case-insensitive matches.
/// Exhausted input leaves the remaining answers empty, so they score as
/// wrong. Returns the number of correct answers.
pub fn run(records: &[Record], input: &mut impl BufRead, out: &mut impl Write) -> Result<usize> {
    let mut score = 0;
    for record in records {
        writeln!(out, "{}", record.question)?;
        out.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;
        let answer = record.answer.trim();

        if line.trim().to_lowercase() == answer.to_lowercase() {
            writeln!(out, "Correct!")?;
            score += 1;
        } else {
            writeln!(out, "Wrong! The correct answer is: {answer}")?;
        }
    }
    Ok(score)
}

pub fn summary(score: usize, total: usize) -> String {
    format!("Your score: {score} out of {total}")
}
