use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::{BenchArgs, OutputFormat};
use crate::bench::{self, BenchPlan};
use crate::config;
use crate::error::{AppError, AppResult, BenchError};
use crate::http;
use crate::metrics::RunReport;
use crate::sinks;
use crate::system;

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    if let Some(config_file) = config::load_config(args.config.as_deref())? {
        config::apply_config(&mut args, &matches, &config_file)?;
    }

    system::logger::init_logging(args.verbose, args.no_color);

    let plan = BenchPlan::from_args(&args)?;

    if matches!(args.output_format, OutputFormat::Text) {
        system::banner::print_run_banner(&args);
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let report = runtime.block_on(run_async(&plan))?;

    sinks::write_report(
        &report,
        args.output.as_deref(),
        args.output_format,
        args.no_color,
    )?;

    // Whole-run failure is the only condition that exits non-zero.
    if report.successful_requests == 0 {
        return Err(AppError::bench(BenchError::AllRequestsFailed {
            failed_requests: report.failed_requests,
        }));
    }
    Ok(())
}

async fn run_async(plan: &BenchPlan) -> AppResult<RunReport> {
    let client = http::build_client()?;
    Ok(bench::run(&client, plan).await)
}

fn parse_args() -> AppResult<(BenchArgs, ArgMatches)> {
    let matches = BenchArgs::command().get_matches();
    let args = BenchArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}
