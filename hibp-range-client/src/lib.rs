//! Breached password checker using the Have I Been Pwned range API.
//!
//! Passwords never leave the process. Each one is hashed with SHA1, and only
//! the first 5 hex characters of the digest are sent to
//! `GET /range/{prefix}`. The service answers with every known hash suffix
//! sharing that prefix, as CRLF separated `SUFFIX:COUNT` lines, and the match
//! against the remaining 35 characters happens locally (k-anonymity).
//!
//! ```no_run
//! use hibp_range_client::{BreachChecker, ClientConfig, HttpRangeSource, Verdict};
//!
//! # async fn run() -> Result<(), hibp_range_client::Error> {
//! let source = HttpRangeSource::new(&ClientConfig::from_env())?;
//! let checker = BreachChecker::new(source);
//!
//! let report = checker.check("password123").await?;
//! if let Verdict::Pwned { count } = report.verdict {
//!     println!("seen {count} times");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! A non-200 answer or a malformed count does not fail the check; it yields
//! [`Verdict::NotPwned`] with a [`Diagnostic`]. Only an unreachable service is
//! an [`Error`], and the caller decides whether that ends a batch.

pub mod checker;
pub mod client;
pub mod config;
pub mod digest;
pub mod error;
pub mod range;

pub use checker::{BreachChecker, CheckReport, Diagnostic, Verdict};
pub use client::{HttpRangeSource, RangeResponse, RangeSource};
pub use config::{ClientConfig, DEFAULT_API_URL, HIBP_API_URL_ENV, api_url_from_env};
pub use digest::{DigestSuffix, PREFIX_LEN, PasswordDigest, QueryPrefix};
pub use error::Error;
pub use range::{CandidateEntry, MalformedCount, candidates, seen_count};
