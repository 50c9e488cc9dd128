use serde::Deserialize;

use crate::args::OutputFormat;

/// Optional file-based configuration; every field mirrors a CLI option and
/// loses to an explicit command-line value.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub model: Option<String>,
    pub prompt: Option<String>,
    pub max_tokens: Option<u64>,
    pub requests: Option<u64>,
    pub concurrent: Option<usize>,
    pub timeout: Option<u64>,
    pub output: Option<String>,
    pub output_format: Option<OutputFormat>,
    pub no_color: Option<bool>,
    pub verbose: Option<bool>,
}
