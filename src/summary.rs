//! Recipient preview for a processed batch.
//!
//! Counts the valid surviving entries and totals their amounts in wei, the
//! same figures shown before a disperse is sent.

use crate::batch_processor::BatchResult;
use crate::config::Config;
use crate::utils;
use ethers::types::U256;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub line: usize,
    pub address: String,
    /// None when the amount is valid but not a plain decimal (e.g. `0x10`, `1e18`)
    pub amount_wei: Option<U256>,
    pub amount_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub recipients: Vec<Recipient>,
    /// Clamped at `U256::MAX` when `overflow` is set
    pub total_wei: U256,
    /// The real total does not fit in uint256
    pub overflow: bool,
    /// Valid entries whose amount could not be converted to wei
    pub unpriced: usize,
    /// Entries left out because they failed validation
    pub invalid: usize,
    native_token: String,
    preview_limit: usize,
    delimiter_hint: String,
}

impl BatchSummary {
    pub fn from_result(result: &BatchResult, config: &Config) -> Self {
        let recipients: Vec<Recipient> = result
            .valid_entries()
            .map(|entry| Recipient {
                line: entry.line,
                address: entry.candidate.address.clone(),
                amount_wei: utils::parse_eth_str_to_wei(&entry.candidate.amount).ok(),
                amount_text: entry.candidate.amount.clone(),
            })
            .collect();

        let (total_wei, overflow) =
            utils::saturating_sum_wei(recipients.iter().filter_map(|r| r.amount_wei));
        if overflow {
            tracing::warn!("Recipient amounts overflow uint256; total clamped");
        }
        let unpriced = recipients.iter().filter(|r| r.amount_wei.is_none()).count();
        let invalid = result.entries.len() - recipients.len();

        Self {
            recipients,
            total_wei,
            overflow,
            unpriced,
            invalid,
            native_token: config.native_token.clone(),
            preview_limit: config.preview_limit,
            delimiter_hint: config.delimiter_hint(),
        }
    }

    pub fn recipient_count(&self) -> usize {
        self.recipients.len()
    }

    pub fn headline(&self) -> String {
        if self.recipients.is_empty() {
            return format!(
                "No recipients found. Check your input format (address and amount separated by {}).",
                self.delimiter_hint
            );
        }
        let mut line = if self.overflow {
            format!(
                "{} recipients, total amount exceeds uint256 (over {} {})",
                self.recipients.len(),
                utils::format_ether(self.total_wei),
                self.native_token
            )
        } else {
            format!(
                "{} recipients, total amount: {} {}",
                self.recipients.len(),
                utils::format_ether(self.total_wei),
                self.native_token
            )
        };
        if self.unpriced > 0 {
            let _ = write!(line, " (+{} not in decimal form)", self.unpriced);
        }
        if self.invalid > 0 {
            let _ = write!(line, ", {} invalid lines skipped", self.invalid);
        }
        line
    }

    /// Numbered recipient lines, collapsed after the preview limit.
    pub fn preview(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .recipients
            .iter()
            .take(self.preview_limit)
            .enumerate()
            .map(|(i, r)| {
                let amount = match r.amount_wei {
                    Some(wei) => utils::format_ether(wei),
                    None => r.amount_text.clone(),
                };
                format!("{}. {} → {} {}", i + 1, r.address, amount, self.native_token)
            })
            .collect();

        if self.recipients.len() > self.preview_limit {
            lines.push(format!(
                "... and {} more recipients",
                self.recipients.len() - self.preview_limit
            ));
        }
        lines
    }
}
