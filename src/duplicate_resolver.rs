//! Finds repeated addresses in a batch and decides which lines survive.
//!
//! The first occurrence of an address is kept, later ones are dropped.
//! Removal is expressed as a keep-mask over the input order, so dropping one
//! line never shifts the position of another.

use crate::types::{Diagnostic, DiagnosticKind};
use std::collections::HashMap;
use tracing::debug;

/// Outcome of a duplicate scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// `keep[i]` is false when entry `i` repeats an earlier address
    pub keep: Vec<bool>,
    /// One report per duplicate group, in first-seen order of the addresses
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    pub fn removed_count(&self) -> usize {
        self.keep.iter().filter(|kept| !**kept).count()
    }
}

/// Scan `entries` (address, line number) in order.
///
/// Addresses are compared as exact strings. The empty address that
/// unparseable lines carry is grouped like any other.
pub fn resolve<S: AsRef<str>>(entries: &[(S, usize)]) -> Resolution {
    // Distinct addresses in first-seen order, each with the positions using it.
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<usize>> = HashMap::new();

    for (position, (address, _)) in entries.iter().enumerate() {
        let address = address.as_ref();
        groups
            .entry(address)
            .or_insert_with(|| {
                order.push(address);
                Vec::new()
            })
            .push(position);
    }

    let mut keep = vec![true; entries.len()];
    let mut diagnostics = Vec::new();

    for address in order {
        let positions = &groups[address];
        if positions.len() < 2 {
            continue;
        }

        for &position in &positions[1..] {
            keep[position] = false;
        }

        let lines: Vec<usize> = positions.iter().map(|&p| entries[p].1).collect();
        debug!("Duplicate address {:?} on lines {:?}", address, lines);
        diagnostics.push(Diagnostic::new(
            lines[0],
            DiagnosticKind::DuplicateAddress { lines },
        ));
    }

    Resolution { keep, diagnostics }
}
