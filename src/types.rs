//! Common types shared across the intake pipeline.

use std::fmt;

/// One non-empty line of the submitted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// 1-based position among non-empty lines, used in messages
    pub number: usize,
    /// 0-based index of the line in the submitted text, blank lines included
    pub physical_index: usize,
    pub text: String,
}

/// Unvalidated (address, amount) pair extracted from one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidate {
    pub address: String,
    pub amount: String,
}

impl Candidate {
    pub fn new(address: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            amount: amount.into(),
        }
    }

    /// The "unparseable line" marker: both fields empty.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.address.is_empty() && self.amount.is_empty()
    }
}

/// Everything that can be reported against a line.
///
/// None of these stop processing: they are collected as [`Diagnostic`]s.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagnosticKind {
    #[error("Missing address or amount")]
    MissingField,

    #[error("Invalid Ethereum address")]
    BadPrefix,

    #[error("Invalid Ethereum address length")]
    BadLength,

    // Inspects the amount token; the wording is what users already know.
    #[error("Invalid characters at the end of Ethereum address")]
    TrailingChars,

    #[error("Invalid amount")]
    BadAmount,

    #[error("Duplicate addresses ({}) removed", join_line_numbers(.lines))]
    DuplicateAddress { lines: Vec<usize> },
}

fn join_line_numbers(lines: &[usize]) -> String {
    lines
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result of validating a single candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(DiagnosticKind, usize),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// Convert a failure into the diagnostic it reports, if any.
    pub fn into_diagnostic(self) -> Option<Diagnostic> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(kind, line) => Some(Diagnostic::new(line, kind)),
        }
    }
}

/// A line-attributed report, rendered as `Line <n>: <message>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(line: usize, kind: DiagnosticKind) -> Self {
        Self { line, kind }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self.kind, DiagnosticKind::DuplicateAddress { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.kind)
    }
}
