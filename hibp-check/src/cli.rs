use std::num::{NonZeroU64, NonZeroUsize};

use clap::Parser;
use hibp_range_client::{DEFAULT_API_URL, HIBP_API_URL_ENV};

use crate::batch::NetworkErrorPolicy;
use crate::error::Error;

/// Exit status for usage errors and aborted batches (-1 as seen by the shell).
pub const FAILURE_EXIT_CODE: u8 = 255;

#[derive(Parser, Debug)]
#[command(name = "hibp-check", version)]
#[command(about = "Check passwords against Have I Been Pwned without sending them anywhere")]
pub struct Args {
    /// Passwords to check. Without any, one password per line is read from
    /// redirected stdin. Options go before the passwords; put `--` first if a
    /// password looks like one of them.
    #[arg(allow_hyphen_values = true)]
    pub passwords: Vec<String>,

    /// Base URL of the range API
    #[arg(long, env = HIBP_API_URL_ENV, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// User-Agent header sent with every request
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: NonZeroU64,

    /// Ask the service to pad responses with fake entries
    #[arg(long)]
    pub padding: bool,

    /// Number of range requests in flight at once
    #[arg(short = 'j', long, default_value = "1")]
    pub concurrent_checks: NonZeroUsize,

    /// What to do when the service cannot be reached
    #[arg(long, value_enum, default_value_t = NetworkErrorPolicy::Abort)]
    pub on_network_error: NetworkErrorPolicy,

    /// Separator between groups of three digits in counts [default: from the
    /// system locale]
    #[arg(long)]
    pub group_separator: Option<String>,

    /// Disable progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Log more (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Process exit status for the outcome of a run.
pub fn exit_code(result: &Result<(), Error>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => FAILURE_EXIT_CODE,
    }
}

/// Process exit status for a failed argument parse. `--help` and
/// `--version` also arrive here and are not failures.
pub fn parse_exit_code(error: &clap::Error) -> u8 {
    if error.use_stderr() { FAILURE_EXIT_CODE } else { 0 }
}
