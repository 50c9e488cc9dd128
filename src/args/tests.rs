use std::ffi::OsString;
use std::time::Duration;

use clap::{CommandFactory, FromArgMatches};

use super::parsers::parse_bool_env;
use super::{BenchArgs, OutputFormat, PositiveU64, PositiveUsize};

fn parse_test_args<I, S>(argv: I) -> Result<BenchArgs, String>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let matches = BenchArgs::command()
        .try_get_matches_from(argv)
        .map_err(|err| format!("arg parse failed: {}", err))?;
    BenchArgs::from_arg_matches(&matches).map_err(|err| format!("arg extraction failed: {}", err))
}

#[test]
fn parse_args_defaults() -> Result<(), String> {
    let args = parse_test_args(["inferbench"])?;

    let expected_no_color = std::env::var("NO_COLOR")
        .ok()
        .and_then(|value| parse_bool_env(&value).ok())
        .unwrap_or(false);

    let checks = [
        (args.url == "http://localhost:8000", "Unexpected url"),
        (args.model == "Qwen/Qwen3-0.6B", "Unexpected model"),
        (
            args.prompt == "Write a short story about",
            "Unexpected prompt",
        ),
        (args.max_tokens.get() == 50, "Unexpected max_tokens"),
        (args.requests.get() == 20, "Unexpected requests"),
        (args.concurrent.get() == 2, "Unexpected concurrent"),
        (
            args.timeout == Duration::from_secs(120),
            "Unexpected timeout",
        ),
        (args.output.is_none(), "Expected output to be None"),
        (
            matches!(args.output_format, OutputFormat::Text),
            "Expected OutputFormat::Text",
        ),
        (
            args.no_color == expected_no_color,
            "Unexpected no_color default",
        ),
        (args.config.is_none(), "Expected config to be None"),
        (!args.verbose, "Expected verbose to be false"),
    ];

    for (ok, message) in checks {
        if !ok {
            return Err(message.to_owned());
        }
    }
    Ok(())
}

#[test]
fn parse_args_overrides() -> Result<(), String> {
    let args = parse_test_args([
        "inferbench",
        "-u",
        "http://10.0.0.1:9001",
        "-m",
        "meta-llama/Llama-3.1-8B",
        "-p",
        "Explain borrow checking",
        "--max-tokens",
        "128",
        "-n",
        "100",
        "-c",
        "8",
        "--timeout",
        "30",
        "-o",
        "report.json",
        "--output-format",
        "json",
        "-v",
    ])?;

    let checks = [
        (args.url == "http://10.0.0.1:9001", "Unexpected url"),
        (args.model == "meta-llama/Llama-3.1-8B", "Unexpected model"),
        (args.prompt == "Explain borrow checking", "Unexpected prompt"),
        (args.max_tokens.get() == 128, "Unexpected max_tokens"),
        (args.requests.get() == 100, "Unexpected requests"),
        (args.concurrent.get() == 8, "Unexpected concurrent"),
        (
            args.timeout == Duration::from_secs(30),
            "Unexpected timeout",
        ),
        (
            args.output.as_deref() == Some("report.json"),
            "Unexpected output",
        ),
        (
            matches!(args.output_format, OutputFormat::Json),
            "Expected OutputFormat::Json",
        ),
        (args.verbose, "Expected verbose to be true"),
    ];

    for (ok, message) in checks {
        if !ok {
            return Err(message.to_owned());
        }
    }
    Ok(())
}

#[test]
fn parse_args_rejects_zero_requests() {
    assert!(parse_test_args(["inferbench", "-n", "0"]).is_err());
}

#[test]
fn parse_args_rejects_zero_concurrency() {
    assert!(parse_test_args(["inferbench", "-c", "0"]).is_err());
}

#[test]
fn parse_args_rejects_zero_timeout() {
    assert!(parse_test_args(["inferbench", "--timeout", "0"]).is_err());
}

#[test]
fn parse_args_rejects_non_numeric_requests() {
    assert!(parse_test_args(["inferbench", "-n", "many"]).is_err());
}

#[test]
fn positive_u64_round_trips() -> Result<(), String> {
    let value = PositiveU64::try_from(7).map_err(|err| format!("conversion failed: {}", err))?;
    if u64::from(value) != 7 {
        return Err("Unexpected round-trip value".to_owned());
    }
    if PositiveU64::try_from(0).is_ok() {
        return Err("Expected zero to be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn positive_usize_round_trips() -> Result<(), String> {
    let value = PositiveUsize::try_from(3).map_err(|err| format!("conversion failed: {}", err))?;
    if usize::from(value) != 3 {
        return Err("Unexpected round-trip value".to_owned());
    }
    if PositiveUsize::try_from(0).is_ok() {
        return Err("Expected zero to be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn parse_bool_env_accepts_common_spellings() -> Result<(), String> {
    for value in ["1", "true", "YES", "on", " y "] {
        if !parse_bool_env(value).map_err(|err| format!("parse failed: {}", err))? {
            return Err(format!("Expected '{}' to parse as true", value));
        }
    }
    for value in ["0", "false", "No", "off", "n"] {
        if parse_bool_env(value).map_err(|err| format!("parse failed: {}", err))? {
            return Err(format!("Expected '{}' to parse as false", value));
        }
    }
    if parse_bool_env("sometimes").is_ok() {
        return Err("Expected 'sometimes' to be rejected".to_owned());
    }
    Ok(())
}
