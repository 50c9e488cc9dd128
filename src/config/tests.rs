use std::ffi::OsString;
use std::io::Write;
use std::time::Duration;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tempfile::TempDir;

use super::loader::load_config_file;
use super::{ConfigFile, apply_config, load_config};
use crate::args::{BenchArgs, OutputFormat};

fn parse_with_matches<I, S>(argv: I) -> Result<(BenchArgs, ArgMatches), String>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let matches = BenchArgs::command()
        .try_get_matches_from(argv)
        .map_err(|err| format!("arg parse failed: {}", err))?;
    let args = BenchArgs::from_arg_matches(&matches)
        .map_err(|err| format!("arg extraction failed: {}", err))?;
    Ok((args, matches))
}

fn write_config(dir: &TempDir, name: &str, content: &str) -> Result<String, String> {
    let path = dir.path().join(name);
    let mut file =
        std::fs::File::create(&path).map_err(|err| format!("create config failed: {}", err))?;
    file.write_all(content.as_bytes())
        .map_err(|err| format!("write config failed: {}", err))?;
    Ok(path.to_string_lossy().into_owned())
}

fn tempdir() -> Result<TempDir, String> {
    tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))
}

#[test]
fn load_toml_config() -> Result<(), String> {
    let dir = tempdir()?;
    let path = write_config(
        &dir,
        "inferbench.toml",
        "url = \"http://10.1.1.1:8000\"\nrequests = 50\nconcurrent = 4\ntimeout = 15\n",
    )?;

    let config = load_config(Some(&path))
        .map_err(|err| format!("load failed: {}", err))?
        .ok_or_else(|| "expected config to load".to_owned())?;

    let checks = [
        (
            config.url.as_deref() == Some("http://10.1.1.1:8000"),
            "Unexpected url",
        ),
        (config.requests == Some(50), "Unexpected requests"),
        (config.concurrent == Some(4), "Unexpected concurrent"),
        (config.timeout == Some(15), "Unexpected timeout"),
        (config.model.is_none(), "Expected model to be None"),
    ];
    for (ok, message) in checks {
        if !ok {
            return Err(message.to_owned());
        }
    }
    Ok(())
}

#[test]
fn load_json_config() -> Result<(), String> {
    let dir = tempdir()?;
    let path = write_config(
        &dir,
        "bench.json",
        "{\"model\": \"test-model\", \"max_tokens\": 64, \"output_format\": \"json\"}",
    )?;

    let config = load_config(Some(&path))
        .map_err(|err| format!("load failed: {}", err))?
        .ok_or_else(|| "expected config to load".to_owned())?;

    let checks = [
        (config.model.as_deref() == Some("test-model"), "Unexpected model"),
        (config.max_tokens == Some(64), "Unexpected max_tokens"),
        (
            matches!(config.output_format, Some(OutputFormat::Json)),
            "Expected OutputFormat::Json",
        ),
    ];
    for (ok, message) in checks {
        if !ok {
            return Err(message.to_owned());
        }
    }
    Ok(())
}

#[test]
fn load_rejects_unknown_extension() -> Result<(), String> {
    let dir = tempdir()?;
    let path = write_config(&dir, "inferbench.yaml", "url: nope\n")?;

    if load_config(Some(&path)).is_ok() {
        return Err("Expected unsupported extension to be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn load_rejects_missing_file() {
    assert!(load_config(Some("/definitely/not/a/real/config.toml")).is_err());
}

#[test]
fn load_rejects_malformed_toml() -> Result<(), String> {
    let dir = tempdir()?;
    let path = write_config(&dir, "broken.toml", "url = \n")?;

    if load_config_file(std::path::Path::new(&path)).is_ok() {
        return Err("Expected malformed TOML to be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn apply_fills_in_non_cli_values() -> Result<(), String> {
    let (mut args, matches) = parse_with_matches(["inferbench"])?;
    let config = ConfigFile {
        url: Some("http://config-host:9000".to_owned()),
        requests: Some(50),
        timeout: Some(15),
        ..ConfigFile::default()
    };

    apply_config(&mut args, &matches, &config).map_err(|err| format!("apply failed: {}", err))?;

    let checks = [
        (args.url == "http://config-host:9000", "Unexpected url"),
        (args.requests.get() == 50, "Unexpected requests"),
        (args.timeout == Duration::from_secs(15), "Unexpected timeout"),
        // Untouched fields keep their defaults.
        (args.concurrent.get() == 2, "Unexpected concurrent"),
    ];
    for (ok, message) in checks {
        if !ok {
            return Err(message.to_owned());
        }
    }
    Ok(())
}

#[test]
fn apply_never_overrides_cli_values() -> Result<(), String> {
    let (mut args, matches) =
        parse_with_matches(["inferbench", "-n", "7", "-u", "http://cli-host:8000"])?;
    let config = ConfigFile {
        url: Some("http://config-host:9000".to_owned()),
        requests: Some(50),
        model: Some("config-model".to_owned()),
        ..ConfigFile::default()
    };

    apply_config(&mut args, &matches, &config).map_err(|err| format!("apply failed: {}", err))?;

    let checks = [
        (args.url == "http://cli-host:8000", "Unexpected url"),
        (args.requests.get() == 7, "Unexpected requests"),
        // No CLI value given, so the config wins here.
        (args.model == "config-model", "Unexpected model"),
    ];
    for (ok, message) in checks {
        if !ok {
            return Err(message.to_owned());
        }
    }
    Ok(())
}

#[test]
fn apply_rejects_zero_requests_from_config() -> Result<(), String> {
    let (mut args, matches) = parse_with_matches(["inferbench"])?;
    let config = ConfigFile {
        requests: Some(0),
        ..ConfigFile::default()
    };

    if apply_config(&mut args, &matches, &config).is_ok() {
        return Err("Expected zero requests to be rejected".to_owned());
    }
    Ok(())
}
