use std::time::Duration;

use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{BenchArgs, PositiveU64, PositiveUsize};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn ensure_positive_u64(value: u64, field: &str) -> AppResult<PositiveU64> {
    PositiveU64::try_from(value).map_err(|source| {
        AppError::config(ConfigError::InvalidField {
            field: field.to_owned(),
            source,
        })
    })
}

fn ensure_positive_usize(value: usize, field: &str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value).map_err(|source| {
        AppError::config(ConfigError::InvalidField {
            field: field.to_owned(),
            source,
        })
    })
}

/// Overlays config-file values onto the parsed CLI arguments wherever the
/// value did not come from the command line itself.
///
/// # Errors
///
/// Returns an error when a config value fails the same validation its CLI
/// counterpart enforces.
pub fn apply_config(
    args: &mut BenchArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = url;
    }

    if !is_cli(matches, "model")
        && let Some(model) = config.model.clone()
    {
        args.model = model;
    }

    if !is_cli(matches, "prompt")
        && let Some(prompt) = config.prompt.clone()
    {
        args.prompt = prompt;
    }

    if !is_cli(matches, "max_tokens")
        && let Some(value) = config.max_tokens
    {
        args.max_tokens = ensure_positive_u64(value, "max_tokens")?;
    }

    if !is_cli(matches, "requests")
        && let Some(value) = config.requests
    {
        args.requests = ensure_positive_u64(value, "requests")?;
    }

    if !is_cli(matches, "concurrent")
        && let Some(value) = config.concurrent
    {
        args.concurrent = ensure_positive_usize(value, "concurrent")?;
    }

    if !is_cli(matches, "timeout")
        && let Some(value) = config.timeout
    {
        args.timeout = Duration::from_secs(ensure_positive_u64(value, "timeout")?.get());
    }

    if !is_cli(matches, "output")
        && let Some(output) = config.output.clone()
    {
        args.output = Some(output);
    }

    if !is_cli(matches, "output_format")
        && let Some(format) = config.output_format
    {
        args.output_format = format;
    }

    if !is_cli(matches, "no_color")
        && let Some(value) = config.no_color
    {
        args.no_color = value;
    }

    if !is_cli(matches, "verbose")
        && let Some(value) = config.verbose
    {
        args.verbose = value;
    }

    Ok(())
}
