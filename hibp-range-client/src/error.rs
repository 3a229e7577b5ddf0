#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The range endpoint could not be reached (DNS, connect, TLS, timeout or
    /// a body that failed mid-read). Carries only the query prefix.
    #[error("HTTP request failed for prefix {prefix}: {source}")]
    Network {
        prefix: String,
        #[source]
        source: reqwest::Error,
    },
}
