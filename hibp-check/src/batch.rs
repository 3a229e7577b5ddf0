use std::io::Write;
use std::num::NonZeroUsize;
use std::pin::pin;

use futures::StreamExt;
use hibp_range_client::{BreachChecker, RangeSource};
use indicatif::ProgressBar;
use tracing::{info, warn};

use crate::error::Error;
use crate::locale::FALLBACK_GROUP_SEPARATOR;
use crate::report::{Summary, write_report};

/// What to do when the range API cannot be reached for one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum NetworkErrorPolicy {
    /// Stop the whole batch on the first unreachable request.
    #[default]
    Abort,
    /// Report the failure for that password and carry on.
    Skip,
}

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub concurrency: NonZeroUsize,
    pub on_network_error: NetworkErrorPolicy,
    pub group_separator: String,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            concurrency: NonZeroUsize::MIN,
            on_network_error: NetworkErrorPolicy::default(),
            group_separator: FALLBACK_GROUP_SEPARATOR.to_string(),
        }
    }
}

/// Checks every password and writes one report per password to `out`, in
/// input order.
///
/// Reports are written through `progress` so they do not tear the bar.
pub async fn run_batch<S, W>(
    checker: &BreachChecker<S>,
    passwords: &[String],
    options: &BatchOptions,
    out: &mut W,
    progress: &ProgressBar,
) -> Result<Summary, Error>
where
    S: RangeSource,
    W: Write,
{
    let mut summary = Summary::default();
    let concurrency = options.concurrency.get();
    let mut results = pin!(checker.check_stream(passwords.iter().map(String::as_str), concurrency));

    while let Some(result) = results.next().await {
        progress.inc(1);
        match result {
            Ok(report) => {
                summary.record(&report);
                progress.suspend(|| write_report(out, &report, &options.group_separator))?;
            }
            Err(error) => match options.on_network_error {
                NetworkErrorPolicy::Abort => return Err(error.into()),
                NetworkErrorPolicy::Skip => {
                    warn!(%error, "skipping password after network failure");
                    summary.record_failure();
                    progress.suspend(|| writeln!(out, "Could not connect to remote: {error}"))?;
                }
            },
        }
    }

    info!(
        checked = summary.checked,
        pwned = summary.pwned,
        failed = summary.failed,
        "batch complete"
    );
    Ok(summary)
}
