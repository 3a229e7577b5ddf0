use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use hibp_check::{
    Args, BatchOptions, Error, collect_passwords, exit_code, parse_exit_code, run_batch,
    system_group_separator,
};
use hibp_range_client::{BreachChecker, ClientConfig, HttpRangeSource};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)";

fn init_tracing(verbose: u8) {
    let default_directive = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn progress_bar(len: usize, hidden: bool) -> ProgressBar {
    if hidden || len < 2 {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    match ProgressStyle::default_bar().template(PROGRESS_TEMPLATE) {
        Ok(style) => pb.set_style(style.progress_chars("#>-")),
        Err(e) => tracing::debug!(%e, "falling back to the default progress style"),
    }
    pb
}

async fn run(args: Args) -> Result<(), Error> {
    let stdin = io::stdin();
    let redirected = !stdin.is_terminal();
    let passwords = collect_passwords(args.passwords, stdin.lock(), redirected)?;

    let mut config = ClientConfig::default()
        .with_base_url(args.api_url)
        .with_timeout(Duration::from_secs(args.timeout.get()))
        .with_padding(args.padding);
    if let Some(user_agent) = args.user_agent {
        config.user_agent = user_agent;
    }

    let checker = BreachChecker::new(HttpRangeSource::new(&config)?);
    let options = BatchOptions {
        concurrency: args.concurrent_checks,
        on_network_error: args.on_network_error,
        group_separator: args.group_separator.unwrap_or_else(system_group_separator),
    };

    let progress = progress_bar(passwords.len(), args.no_progress);
    let mut out = io::stdout().lock();
    let result = run_batch(&checker, &passwords, &options, &mut out, &progress).await;
    progress.finish_and_clear();

    let summary = result?;
    if summary.checked > 1 {
        summary.write(&mut out)?;
    }
    out.flush()?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(parse_exit_code(&e));
        }
    };
    init_tracing(args.verbose);

    let result = run(args).await;
    match &result {
        Ok(()) => {}
        Err(Error::Check(e @ hibp_range_client::Error::Network { .. })) => {
            eprintln!("Could not connect to remote:\n\n{e}");
        }
        Err(e) => eprintln!("{e}"),
    }
    ExitCode::from(exit_code(&result))
}
