use clap::Parser;
use crate::config::enums::cache_engine::CacheEngine;
use crate::fragment::enums::output_format::OutputFormat;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Cache engine to emit object cache configuration for.
    #[arg(long, value_enum, default_value_t = CacheEngine::redis)]
    pub engine: CacheEngine,
    /// Output format for the resolved configuration.
    #[arg(long, value_enum, default_value_t = OutputFormat::php)]
    pub format: OutputFormat,
    /// Write the configuration to this file instead of stdout.
    #[arg(long)]
    pub output: Option<String>,
    /// Log level (off, trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
