//! Fragment enums.

/// Output format selection (php, toml, json).
pub mod output_format;
