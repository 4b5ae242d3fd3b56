use std::env;

/// Prefix every recipient address must start with
pub const DEFAULT_ADDRESS_PREFIX: &str = "0x";

/// Full address length in characters, prefix included (20 bytes hex-encoded + "0x")
pub const DEFAULT_ADDRESS_LENGTH: usize = 42;

/// Characters that separate the address from the amount on a line
pub const DEFAULT_DELIMITERS: &[char] = &['=', ',', ' '];

/// How many recipients the summary preview lists before collapsing the rest
pub const DEFAULT_PREVIEW_LIMIT: usize = 10;

pub const DEFAULT_NATIVE_TOKEN: &str = "ETH";

/// Rules the intake pipeline checks pasted lines against.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub address_prefix: String,
    pub address_length: usize,
    pub delimiters: Vec<char>,
    pub native_token: String,
    pub preview_limit: usize,
}

impl Config {
    /// Defaults only, ignoring the environment.
    pub fn builtin() -> Self {
        Self {
            address_prefix: DEFAULT_ADDRESS_PREFIX.to_string(),
            address_length: DEFAULT_ADDRESS_LENGTH,
            delimiters: DEFAULT_DELIMITERS.to_vec(),
            native_token: DEFAULT_NATIVE_TOKEN.to_string(),
            preview_limit: DEFAULT_PREVIEW_LIMIT,
        }
    }

    /// Apply `DISPERSE_*` environment overrides on top of the current values.
    /// Unset or unparsable variables leave the current value alone.
    pub fn apply_env_overrides(&mut self) {
        if let Some(prefix) = env::var("DISPERSE_ADDRESS_PREFIX").ok().filter(|v| !v.is_empty()) {
            self.address_prefix = prefix;
        }
        if let Some(length) = env::var("DISPERSE_ADDRESS_LENGTH")
            .ok()
            .and_then(|v| v.trim().parse().ok())
        {
            self.address_length = length;
        }
        if let Some(token) = env::var("DISPERSE_NATIVE_TOKEN").ok().filter(|v| !v.trim().is_empty()) {
            self.native_token = token.trim().to_string();
        }
        if let Some(limit) = env::var("DISPERSE_PREVIEW_LIMIT")
            .ok()
            .and_then(|v| v.trim().parse().ok())
        {
            self.preview_limit = limit;
        }
    }

    pub fn is_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(&c)
    }

    /// Human-readable list of accepted separators, e.g. for an input hint.
    pub fn delimiter_hint(&self) -> String {
        self.delimiters
            .iter()
            .map(|c| format!("'{}'", c))
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::builtin()
    }
}
