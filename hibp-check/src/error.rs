#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "Please specify at least one password!\n\n\
         The following format must be used: hibp-check [options] [password1] [password2] [...]\n\
         (use `hibp-check -- -password` for passwords starting with '-')\n\
         or one password per line on redirected stdin: hibp-check < passwords.txt"
    )]
    Usage,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Check(#[from] hibp_range_client::Error),
}
