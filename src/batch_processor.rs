//! Runs a whole pasted block through parse, validate and de-duplicate.
//!
//! Every submission is a full re-scan: each non-empty line is parsed and
//! validated, then all lines (valid or not) go through the duplicate pass.
//! Validation problems are reported but the lines stay in the text; only
//! repeated addresses are removed.

use crate::config::Config;
use crate::duplicate_resolver;
use crate::entry_parser;
use crate::entry_validator;
use crate::types::{Candidate, Diagnostic, RawLine};
use tracing::{debug, info};

/// A line that made it through duplicate removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub line: usize,
    /// The line as pasted, without its line ending
    pub text: String,
    pub candidate: Candidate,
    pub valid: bool,
}

/// Everything the caller needs to redraw after a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    /// Input text with duplicate lines dropped, otherwise verbatim
    pub text: String,
    pub entries: Vec<Entry>,
    /// Validation reports in line order, then duplicate reports
    pub diagnostics: Vec<Diagnostic>,
    /// At least one line failed validation
    pub failed: bool,
}

impl BatchResult {
    /// Surviving lines as literal strings.
    pub fn entry_lines(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }

    /// Rendered `Line <n>: <message>` strings.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(|d| d.to_string()).collect()
    }

    pub fn duplicates_removed(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_duplicate)
    }

    /// Entries that passed validation, in order.
    pub fn valid_entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.valid)
    }
}

/// Stateless between submissions; holds only the rules.
#[derive(Debug, Clone, Default)]
pub struct BatchProcessor {
    config: Config,
}

impl BatchProcessor {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn process(&self, raw_text: &str) -> BatchResult {
        let physical: Vec<&str> = raw_text.split('\n').collect();
        let lines = split_lines(&physical);

        let mut diagnostics = Vec::new();
        let mut candidates = Vec::with_capacity(lines.len());
        let mut validity = Vec::with_capacity(lines.len());

        for line in &lines {
            let candidate = entry_parser::parse_with(&line.text, &self.config);
            let outcome = entry_validator::validate_with(&candidate, line.number, &self.config);
            validity.push(outcome.is_valid());
            if let Some(diagnostic) = outcome.into_diagnostic() {
                debug!("{}", diagnostic);
                diagnostics.push(diagnostic);
            }
            candidates.push(candidate);
        }
        let failed = !diagnostics.is_empty();

        let keys: Vec<(&str, usize)> = candidates
            .iter()
            .zip(&lines)
            .map(|(c, line)| (c.address.as_str(), line.number))
            .collect();
        let resolution = duplicate_resolver::resolve(&keys);
        let removed = resolution.removed_count();
        diagnostics.extend(resolution.diagnostics);

        let mut dropped = vec![false; physical.len()];
        let mut entries = Vec::with_capacity(lines.len() - removed);
        for (((line, candidate), valid), keep) in lines
            .into_iter()
            .zip(candidates)
            .zip(validity)
            .zip(resolution.keep)
        {
            if keep {
                entries.push(Entry {
                    line: line.number,
                    text: line.text,
                    candidate,
                    valid,
                });
            } else {
                dropped[line.physical_index] = true;
            }
        }

        let text = physical
            .iter()
            .zip(&dropped)
            .filter(|(_, dropped)| !**dropped)
            .map(|(line, _)| *line)
            .collect::<Vec<_>>()
            .join("\n");

        info!(
            "Processed {} lines: {} kept, {} duplicates removed, {} diagnostics",
            entries.len() + removed,
            entries.len(),
            removed,
            diagnostics.len()
        );

        BatchResult {
            text,
            entries,
            diagnostics,
            failed,
        }
    }
}

/// Process with the built-in rules.
pub fn process(raw_text: &str) -> BatchResult {
    BatchProcessor::default().process(raw_text)
}

/// Number the non-empty lines 1..N. A trailing `\r` is not part of a line.
fn split_lines(physical: &[&str]) -> Vec<RawLine> {
    physical
        .iter()
        .enumerate()
        .map(|(index, &line)| (index, line.strip_suffix('\r').unwrap_or(line)))
        .filter(|(_, line)| !line.is_empty())
        .enumerate()
        .map(|(n, (physical_index, text))| RawLine {
            number: n + 1,
            physical_index,
            text: text.to_string(),
        })
        .collect()
}

/// Line numbers for the input gutter: one per non-empty line, never fewer than one.
pub fn line_gutter(text: &str) -> Vec<usize> {
    let count = text
        .split('\n')
        .filter(|&line| !line.strip_suffix('\r').unwrap_or(line).is_empty())
        .count();
    (1..=count.max(1)).collect()
}
