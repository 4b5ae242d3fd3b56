//! Recipient list intake for batch disperse.
//!
//! Turns pasted `address=amount` text into an ordered, de-duplicated list of
//! entries plus line-attributed diagnostics.

pub mod batch_processor;
pub mod config;
pub mod duplicate_resolver;
pub mod entry_parser;
pub mod entry_validator;
pub mod summary;
pub mod types;
pub mod user_settings;
pub mod utils;

pub use batch_processor::{line_gutter, process, BatchProcessor, BatchResult, Entry};
pub use config::Config;
pub use types::{Candidate, Diagnostic, DiagnosticKind, ValidationOutcome};
