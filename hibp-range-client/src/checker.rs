use futures::stream::{self, Stream, StreamExt};
use tracing::{debug, warn};

use crate::client::{RangeResponse, RangeSource};
use crate::digest::PasswordDigest;
use crate::error::Error;
use crate::range::{MalformedCount, seen_count};

/// Outcome of checking one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    NotPwned,
    Pwned { count: u64 },
}

impl Verdict {
    pub fn is_pwned(&self) -> bool {
        matches!(self, Verdict::Pwned { .. })
    }
}

/// A non-fatal problem that downgraded a check to [`Verdict::NotPwned`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    #[error("Request denied! Code: {status}")]
    RemoteRejection { status: u16 },

    #[error("Could not read seen-count: {0}")]
    MalformedCount(#[from] MalformedCount),
}

/// Everything a presentation layer needs to render one result without
/// hashing again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport<'p> {
    pub password: &'p str,
    pub digest: PasswordDigest,
    pub verdict: Verdict,
    pub diagnostic: Option<Diagnostic>,
}

/// Checks passwords against a range API using k-anonymity.
///
/// Only the 5 character prefix of each password's SHA1 leaves the process.
/// The source (usually an [`HttpRangeSource`](crate::HttpRangeSource)) is
/// owned by the checker and shared read-only by concurrent checks.
#[derive(Debug, Clone)]
pub struct BreachChecker<S> {
    source: S,
}

impl<S: RangeSource> BreachChecker<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Checks a single password.
    ///
    /// A non-200 response or a malformed count for the matching entry yields
    /// `NotPwned` with a [`Diagnostic`]. Only failing to reach the service at
    /// all is an `Err`; what to do about it is left to the caller.
    pub async fn check<'p>(&self, password: &'p str) -> Result<CheckReport<'p>, Error> {
        let digest = PasswordDigest::of(password);
        let (prefix, suffix) = digest.split();

        let (verdict, diagnostic) = match self.source.fetch_range(prefix).await? {
            RangeResponse::Candidates(body) => match seen_count(&body, suffix) {
                // Add-Padding entries carry a count of zero and are not real hashes.
                Ok(Some(0)) | Ok(None) => (Verdict::NotPwned, None),
                Ok(Some(count)) => (Verdict::Pwned { count }, None),
                Err(malformed) => {
                    warn!(%prefix, field = %malformed.field, "malformed seen-count");
                    (Verdict::NotPwned, Some(Diagnostic::MalformedCount(malformed)))
                }
            },
            RangeResponse::Rejected { status } => {
                warn!(%prefix, status, "range request rejected");
                (Verdict::NotPwned, Some(Diagnostic::RemoteRejection { status }))
            }
        };
        debug!(%prefix, pwned = verdict.is_pwned(), "check complete");

        Ok(CheckReport { password, digest, verdict, diagnostic })
    }

    /// Checks `passwords` with at most `concurrency` requests in flight.
    ///
    /// Items come out in input order regardless of which request finishes
    /// first, so the n-th item always belongs to the n-th password. Dropping
    /// the stream stops issuing requests.
    pub fn check_stream<'a, I>(
        &'a self,
        passwords: I,
        concurrency: usize,
    ) -> impl Stream<Item = Result<CheckReport<'a>, Error>> + 'a
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: 'a,
    {
        stream::iter(passwords)
            .map(move |password| self.check(password))
            .buffered(concurrency.max(1))
    }

    /// Collects [`check_stream`](Self::check_stream) into one result per
    /// password. A network failure for one password does not stop the rest.
    pub async fn check_all<'a, I>(
        &'a self,
        passwords: I,
        concurrency: usize,
    ) -> Vec<Result<CheckReport<'a>, Error>>
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: 'a,
    {
        self.check_stream(passwords, concurrency).collect().await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;
    use crate::digest::QueryPrefix;

    const PASSWORD_SUFFIX: &str = "1E4C9B93F3F0682250B6CF8331B7EE68FD8";

    #[derive(Clone)]
    enum Reply {
        Body(String),
        Status(u16),
    }

    /// Answers from a fixed table and records every prefix it was asked for.
    #[derive(Default)]
    struct StubSource {
        replies: HashMap<String, (Reply, Duration)>,
        requests: Mutex<Vec<String>>,
    }

    impl StubSource {
        fn reply(mut self, prefix: &str, reply: Reply) -> Self {
            self.replies.insert(prefix.to_string(), (reply, Duration::ZERO));
            self
        }

        fn delayed(mut self, prefix: &str, reply: Reply, delay: Duration) -> Self {
            self.replies.insert(prefix.to_string(), (reply, delay));
            self
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl RangeSource for StubSource {
        async fn fetch_range(&self, prefix: QueryPrefix<'_>) -> Result<RangeResponse, Error> {
            self.requests.lock().unwrap().push(prefix.to_string());
            let (reply, delay) = self
                .replies
                .get(prefix.as_str())
                .cloned()
                .unwrap_or((Reply::Body(String::new()), Duration::ZERO));
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            Ok(match reply {
                Reply::Body(body) => RangeResponse::Candidates(body),
                Reply::Status(status) => RangeResponse::Rejected { status },
            })
        }
    }

    #[tokio::test]
    async fn test_pwned_password() {
        let source = StubSource::default()
            .reply("5BAA6", Reply::Body(format!("{PASSWORD_SUFFIX}:3730471\r\n")));
        let checker = BreachChecker::new(source);

        let report = checker.check("password").await.unwrap();
        assert_eq!(report.password, "password");
        assert_eq!(report.digest.as_str(), "5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8");
        assert_eq!(report.verdict, Verdict::Pwned { count: 3730471 });
        assert_eq!(report.diagnostic, None);
        assert_eq!(checker.source().requests(), vec!["5BAA6"]);
    }

    #[tokio::test]
    async fn test_not_pwned_password() {
        let source = StubSource::default()
            .reply("5BAA6", Reply::Body("0000000000000000000000000000000000:5\r\n".to_string()));
        let checker = BreachChecker::new(source);

        let report = checker.check("password").await.unwrap();
        assert_eq!(report.verdict, Verdict::NotPwned);
        assert_eq!(report.diagnostic, None);
    }

    #[tokio::test]
    async fn test_rejection_degrades_to_not_pwned() {
        let source = StubSource::default().reply("5BAA6", Reply::Status(429));
        let checker = BreachChecker::new(source);

        let report = checker.check("password").await.unwrap();
        assert_eq!(report.verdict, Verdict::NotPwned);
        assert_eq!(report.diagnostic, Some(Diagnostic::RemoteRejection { status: 429 }));
        assert_eq!(report.diagnostic.unwrap().to_string(), "Request denied! Code: 429");
    }

    #[tokio::test]
    async fn test_malformed_count_degrades_to_not_pwned() {
        let source = StubSource::default()
            .reply("5BAA6", Reply::Body(format!("{PASSWORD_SUFFIX}:12a4\r\n")));
        let checker = BreachChecker::new(source);

        let report = checker.check("password").await.unwrap();
        assert_eq!(report.verdict, Verdict::NotPwned);
        let diagnostic = report.diagnostic.expect("diagnostic");
        assert!(matches!(diagnostic, Diagnostic::MalformedCount(_)));
        assert_eq!(
            diagnostic.to_string(),
            r#"Could not read seen-count: field "12a4" is not a non-negative integer"#
        );
    }

    #[tokio::test]
    async fn test_padding_entry_is_not_pwned() {
        let body = format!("{PASSWORD_SUFFIX}:0\r\n");
        let source = StubSource::default().reply("5BAA6", Reply::Body(body));
        let checker = BreachChecker::new(source);

        let report = checker.check("password").await.unwrap();
        assert_eq!(report.verdict, Verdict::NotPwned);
        assert_eq!(report.diagnostic, None);
    }

    #[tokio::test]
    async fn test_empty_password_queries_its_prefix() {
        let checker = BreachChecker::new(StubSource::default());

        let report = checker.check("").await.unwrap();
        assert_eq!(report.digest.as_str().len(), 40);
        assert_eq!(report.verdict, Verdict::NotPwned);
        assert_eq!(checker.source().requests(), vec!["DA39A"]);
    }

    #[tokio::test]
    async fn test_same_prefix_is_queried_per_password() {
        let source = StubSource::default()
            .reply("5BAA6", Reply::Body(format!("{PASSWORD_SUFFIX}:10\r\n")));
        let checker = BreachChecker::new(source);

        let results = checker.check_all(["password", "password"], 1).await;
        assert_eq!(results.len(), 2);
        assert_eq!(checker.source().requests(), vec!["5BAA6", "5BAA6"]);
    }

    #[tokio::test]
    async fn test_check_all_keeps_input_order() {
        // "password" is answered slowly, "" immediately.
        let source = StubSource::default()
            .delayed(
                "5BAA6",
                Reply::Body(format!("{PASSWORD_SUFFIX}:3730471\r\n")),
                Duration::from_millis(50),
            )
            .reply("DA39A", Reply::Status(503));
        let checker = BreachChecker::new(source);

        let passwords = vec!["password".to_string(), String::new()];
        let results = checker.check_all(passwords.iter().map(String::as_str), 8).await;

        let reports: Vec<_> = results.into_iter().map(Result::unwrap).collect();
        assert_eq!(reports[0].password, "password");
        assert_eq!(reports[0].verdict, Verdict::Pwned { count: 3730471 });
        assert_eq!(reports[1].password, "");
        assert_eq!(reports[1].diagnostic, Some(Diagnostic::RemoteRejection { status: 503 }));
    }

    #[tokio::test]
    async fn test_check_all_zero_concurrency_still_runs() {
        let checker = BreachChecker::new(StubSource::default());
        let results = checker.check_all(["a", "b", "c"], 0).await;
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(Result::is_ok));
    }
}
