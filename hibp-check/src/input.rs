use std::io::BufRead;

use crate::error::Error;

/// Picks the passwords to check.
///
/// Command line arguments win. Without any, redirected stdin is read one
/// password per line (LF or CRLF). An interactive terminal, or redirected
/// input with no lines at all, is a usage error.
pub fn collect_passwords<R: BufRead>(
    args: Vec<String>,
    stdin: R,
    stdin_redirected: bool,
) -> Result<Vec<String>, Error> {
    if !args.is_empty() {
        return Ok(args);
    }
    if !stdin_redirected {
        return Err(Error::Usage);
    }

    let passwords = stdin.lines().collect::<Result<Vec<_>, _>>()?;
    if passwords.is_empty() {
        return Err(Error::Usage);
    }

    Ok(passwords)
}
