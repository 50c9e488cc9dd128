use clap::Parser;
use std::time::Duration;

use super::parsers::{
    parse_bool_env, parse_duration_secs, parse_positive_u64, parse_positive_usize,
};
use super::types::{OutputFormat, PositiveU64, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Concurrent load-testing harness for text-completion HTTP endpoints - bounded worker pool, per-request latency capture, and throughput/latency-distribution reports."
)]
pub struct BenchArgs {
    /// Base URL of the inference server
    #[arg(
        long,
        short = 'u',
        default_value = "http://localhost:8000",
        help_heading = "Target"
    )]
    pub url: String,

    /// Model identifier sent with every completion request
    #[arg(
        long,
        short = 'm',
        default_value = "Qwen/Qwen3-0.6B",
        help_heading = "Target"
    )]
    pub model: String,

    /// Prompt text sent with every completion request
    #[arg(
        long,
        short = 'p',
        default_value = "Write a short story about",
        help_heading = "Target"
    )]
    pub prompt: String,

    /// Maximum tokens to generate per request
    #[arg(
        long = "max-tokens",
        default_value = "50",
        value_parser = parse_positive_u64,
        help_heading = "Target"
    )]
    pub max_tokens: PositiveU64,

    /// Number of requests to send
    #[arg(
        long,
        short = 'n',
        default_value = "20",
        value_parser = parse_positive_u64,
        help_heading = "Load"
    )]
    pub requests: PositiveU64,

    /// Number of concurrent requests
    #[arg(
        long = "concurrent",
        short = 'c',
        default_value = "2",
        value_parser = parse_positive_usize,
        help_heading = "Load"
    )]
    pub concurrent: PositiveUsize,

    /// Per-request timeout in seconds
    #[arg(
        long,
        default_value = "120",
        value_parser = parse_duration_secs,
        help_heading = "Load"
    )]
    pub timeout: Duration,

    /// Write the JSON report to a file
    #[arg(long, short = 'o', help_heading = "Output")]
    pub output: Option<String>,

    /// Terminal output format
    #[arg(
        long = "output-format",
        default_value = "text",
        value_enum,
        help_heading = "Output"
    )]
    pub output_format: OutputFormat,

    /// Disable colored output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,

    /// Load options from a TOML or JSON config file
    #[arg(long)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
