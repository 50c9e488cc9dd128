use std::io::IsTerminal;
use std::path::Path;

use crossterm::style::{Color, Stylize};

use super::format::{section_rule, summary_lines};
use crate::args::OutputFormat;
use crate::error::{AppError, AppResult, SinkError};
use crate::metrics::RunReport;

/// Prints the report to the terminal and optionally writes it to a file.
///
/// # Errors
///
/// Returns an error when the report cannot be serialized or the output file
/// cannot be written.
pub fn write_report(
    report: &RunReport,
    output: Option<&str>,
    format: OutputFormat,
    no_color: bool,
) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(report)?;

    match format {
        OutputFormat::Text => print_text_report(&rendered, report, no_color),
        OutputFormat::Json => println!("{}", rendered),
        OutputFormat::Quiet => {}
    }

    if let Some(path) = output {
        let path = Path::new(path);
        std::fs::write(path, format!("{}\n", rendered)).map_err(|source| {
            AppError::sink(SinkError::WriteReport {
                path: path.to_path_buf(),
                source,
            })
        })?;
    }

    Ok(())
}

fn print_text_report(rendered: &str, report: &RunReport, no_color: bool) {
    let use_color = !no_color && std::io::stdout().is_terminal();

    println!();
    println!("{}", section_rule());
    println!("Results");
    println!("{}", section_rule());
    println!("{}", rendered);
    println!();
    for line in summary_lines(report) {
        if use_color {
            println!("{}", line.with(Color::Cyan));
        } else {
            println!("{}", line);
        }
    }
}
