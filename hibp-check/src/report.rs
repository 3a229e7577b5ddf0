use std::io::{self, Write};

use hibp_range_client::{CheckReport, Verdict};

/// Renders `n` with `separator` between every group of three digits.
pub fn group_thousands(n: u64, separator: &str) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(c);
    }
    grouped
}

/// Writes the report block for one password, preceded by its diagnostic if
/// there is one.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &CheckReport<'_>,
    separator: &str,
) -> io::Result<()> {
    if let Some(diagnostic) = &report.diagnostic {
        writeln!(out, "{diagnostic}")?;
    }

    match report.verdict {
        Verdict::NotPwned => writeln!(out, "Phew! This password has not been pwned!"),
        Verdict::Pwned { count } => {
            writeln!(
                out,
                "This password has been pwned, and it has been seen {} times!",
                group_thousands(count, separator)
            )?;
            writeln!(out, "Pwned Hash: {}", report.digest)?;
            writeln!(out, "Pwned Password: {}", report.password)?;
            writeln!(out)
        }
    }
}

/// Tally of a finished batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub checked: usize,
    pub pwned: usize,
    pub degraded: usize,
    pub failed: usize,
}

impl Summary {
    pub fn record(&mut self, report: &CheckReport<'_>) {
        self.checked += 1;
        if report.verdict.is_pwned() {
            self.pwned += 1;
        }
        if report.diagnostic.is_some() {
            self.degraded += 1;
        }
    }

    pub fn record_failure(&mut self) {
        self.checked += 1;
        self.failed += 1;
    }

    pub fn write<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "Checked {} passwords: {} pwned", self.checked, self.pwned)?;
        if self.degraded > 0 {
            write!(out, ", {} without a usable answer", self.degraded)?;
        }
        if self.failed > 0 {
            write!(out, ", {} unreachable", self.failed)?;
        }
        writeln!(out)
    }
}
