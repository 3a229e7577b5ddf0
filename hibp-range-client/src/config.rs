use std::time::Duration;

/// Base URL of the public Pwned Passwords API.
pub const DEFAULT_API_URL: &str = "https://api.pwnedpasswords.com";

/// Environment variable name for overriding the range API base URL.
pub const HIBP_API_URL_ENV: &str = "HIBP_API_URL";

/// Default whole-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Returns the API base URL from the HIBP_API_URL environment variable,
/// or falls back to the public endpoint.
pub fn api_url_from_env() -> String {
    std::env::var(HIBP_API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Settings for [`HttpRangeSource`](crate::HttpRangeSource).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and host, optionally with a path. `/range/{prefix}` is appended.
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Send `Add-Padding: true` so every response is padded with fake
    /// zero-count entries.
    pub add_padding: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            add_padding: false,
        }
    }
}

impl ClientConfig {
    /// Defaults, with the base URL taken from the environment when set.
    pub fn from_env() -> Self {
        Self {
            base_url: api_url_from_env(),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_padding(mut self, add_padding: bool) -> Self {
        self.add_padding = add_padding;
        self
    }
}
