use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    php,
    toml,
    json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::php => write!(f, "php"),
            OutputFormat::toml => write!(f, "toml"),
            OutputFormat::json => write!(f, "json"),
        }
    }
}

impl OutputFormat {
    pub fn file_extension(&self) -> &'static str {
        match self {
            OutputFormat::php => ".php",
            OutputFormat::toml => ".toml",
            OutputFormat::json => ".json",
        }
    }
}
