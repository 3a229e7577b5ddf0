//! Command line front end for [`hibp_range_client`].
//!
//! Passwords come from the arguments or from redirected stdin, are checked
//! through the range API, and are reported one block per password in input
//! order. Counts are grouped by thousands the way the user's locale does it.

pub mod batch;
pub mod cli;
pub mod error;
pub mod input;
pub mod locale;
pub mod report;

pub use batch::{BatchOptions, NetworkErrorPolicy, run_batch};
pub use cli::{Args, FAILURE_EXIT_CODE, exit_code, parse_exit_code};
pub use error::Error;
pub use input::collect_passwords;
pub use locale::{group_separator_for, system_group_separator};
pub use report::{Summary, group_thousands, write_report};
