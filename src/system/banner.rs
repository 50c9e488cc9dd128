use std::io::IsTerminal;

use crossterm::style::{Color, Stylize};

use crate::args::BenchArgs;
use crate::sinks::format::section_rule;

/// Prints the configuration header shown before a run starts.
pub(crate) fn print_run_banner(args: &BenchArgs) {
    let use_color = !args.no_color && std::io::stdout().is_terminal();
    let title = format!(
        "inferbench v{} | inference endpoint benchmark",
        env!("CARGO_PKG_VERSION")
    );

    println!("{}", section_rule());
    if use_color {
        println!("{}", title.with(Color::Cyan));
    } else {
        println!("{}", title);
    }
    println!("{}", section_rule());
    for line in selection_lines(args) {
        println!("{}", line);
    }
    println!();
}

fn selection_lines(args: &BenchArgs) -> Vec<String> {
    vec![
        format!("url: {}", args.url),
        format!("model: {}", args.model),
        format!("requests: {}", args.requests.get()),
        format!("concurrent: {}", args.concurrent.get()),
        format!("max_tokens: {}", args.max_tokens.get()),
        format!("timeout_s: {}", args.timeout.as_secs()),
        format!("output_format: {}", args.output_format.as_str()),
    ]
}
