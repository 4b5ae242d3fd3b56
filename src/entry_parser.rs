//! Splits one pasted line into an address/amount candidate.

use crate::config::Config;
use crate::types::Candidate;

/// Parse `line` with the built-in delimiters (`=`, `,` and space).
pub fn parse(line: &str) -> Candidate {
    parse_with(line, &Config::builtin())
}

/// Parse `line`, splitting on any of the configured delimiters.
///
/// Runs of delimiters count as one separator. Anything other than exactly
/// two tokens yields [`Candidate::empty`], which validation then reports as
/// a missing field.
pub fn parse_with(line: &str, config: &Config) -> Candidate {
    let mut tokens = line
        .split(|c: char| config.is_delimiter(c))
        .filter(|token| !token.is_empty());

    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(address), Some(amount), None) => Candidate::new(address, amount),
        _ => Candidate::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";

    #[test]
    fn test_parse_equals_separator() {
        let candidate = parse(&format!("{}=0.5", ADDR));
        assert_eq!(candidate, Candidate::new(ADDR, "0.5"));
    }

    #[test]
    fn test_parse_comma_separator() {
        let candidate = parse(&format!("{},12", ADDR));
        assert_eq!(candidate, Candidate::new(ADDR, "12"));
    }

    #[test]
    fn test_parse_space_separator() {
        let candidate = parse(&format!("{} 7", ADDR));
        assert_eq!(candidate, Candidate::new(ADDR, "7"));
    }

    #[test]
    fn test_parse_mixed_delimiter_run() {
        let candidate = parse(&format!("  {} ,= ,100  ", ADDR));
        assert_eq!(candidate, Candidate::new(ADDR, "100"));
    }

    #[test]
    fn test_parse_single_token_is_empty() {
        assert!(parse(ADDR).is_empty());
    }

    #[test]
    fn test_parse_three_tokens_is_empty() {
        assert!(parse(&format!("{} 1 2", ADDR)).is_empty());
    }

    #[test]
    fn test_parse_only_delimiters_is_empty() {
        assert!(parse(" ,= ").is_empty());
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_parse_tab_is_not_a_delimiter() {
        // Tab stays inside the token, so this is one token.
        assert!(parse(&format!("{}\t5", ADDR)).is_empty());
    }

    #[test]
    fn test_parse_with_custom_delimiters() {
        let mut config = Config::builtin();
        config.delimiters = vec![';'];
        let candidate = parse_with("a;b", &config);
        assert_eq!(candidate, Candidate::new("a", "b"));
        assert!(parse_with("a=b", &config).is_empty());
    }
}
