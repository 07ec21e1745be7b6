//! Parsing of labelled-abstract text files.
//!
//! The format groups sentences into abstracts:
//!
//! ```text
//! ###24293578
//! OBJECTIVE\tTo investigate the efficacy of ...
//! METHODS\tA total of 125 patients ...
//!
//! ###24854809
//! BACKGROUND\t...
//! ```
//!
//! Each abstract starts with a `###` id line and ends at a blank line; every
//! sentence line is `LABEL<TAB>sentence`.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};

/// One sentence of an abstract with its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbstractLine {
    /// Label before the tab, e.g. `METHODS`.
    pub target: String,
    /// Sentence text, lower-cased.
    pub text: String,
    /// Zero-based position of the sentence within its abstract.
    pub line_number: usize,
    /// Number of sentences in the abstract minus one.
    pub total_lines: usize,
}

/// Read a text file and return its lines with their terminators kept.
pub fn get_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.split_inclusive('\n').map(str::to_string).collect())
}

/// Parse labelled abstracts from text into per-sentence samples.
///
/// Each sentence line is split on tabs: the first field is the target and the
/// second the text. Any further fields are dropped.
///
/// An abstract still open at the end of the input is emitted as if a blank
/// line followed it.
pub fn preprocess_text_with_line_numbers(text: &str) -> Result<Vec<AbstractLine>> {
    let mut samples = Vec::new();
    // (1-based input line, sentence)
    let mut current: Vec<(usize, &str)> = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if line.starts_with("###") {
            current.clear();
        } else if line.trim().is_empty() {
            flush_abstract(&current, &mut samples)?;
            current.clear();
        } else {
            current.push((idx + 1, line));
        }
    }
    flush_abstract(&current, &mut samples)?;

    debug!("parsed {} abstract lines", samples.len());
    Ok(samples)
}

/// Read `path` and parse it with [`preprocess_text_with_line_numbers`].
pub fn preprocess_file_with_line_numbers(path: impl AsRef<Path>) -> Result<Vec<AbstractLine>> {
    let content = fs::read_to_string(path)?;
    preprocess_text_with_line_numbers(&content)
}

fn flush_abstract(lines: &[(usize, &str)], samples: &mut Vec<AbstractLine>) -> Result<()> {
    let total_lines = lines.len().saturating_sub(1);

    for (line_number, &(source_line, line)) in lines.iter().enumerate() {
        let mut fields = line.split('\t');
        let target = fields.next().unwrap_or_default();
        // Fields after the sentence are ignored.
        let sentence = fields.next().ok_or_else(|| ForecastError::ParseError {
            line: source_line,
            reason: "expected LABEL<TAB>sentence".to_string(),
        })?;

        samples.push(AbstractLine {
            target: target.to_string(),
            text: sentence.to_lowercase(),
            line_number,
            total_lines,
        });
    }
    Ok(())
}
