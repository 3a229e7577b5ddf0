use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{StatusCode, Url};
use tracing::debug;

use crate::config::ClientConfig;
use crate::digest::QueryPrefix;
use crate::error::Error;

/// What came back for one range query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeResponse {
    /// HTTP 200 with the raw `SUFFIX:COUNT` body.
    Candidates(String),
    /// Any other status. The body is discarded.
    Rejected { status: u16 },
}

/// Somewhere that answers `/range/{prefix}` queries.
///
/// Implementations only ever see the [`QueryPrefix`]; the rest of the digest
/// stays with the caller.
pub trait RangeSource {
    fn fetch_range(
        &self,
        prefix: QueryPrefix<'_>,
    ) -> impl Future<Output = Result<RangeResponse, Error>> + Send;
}

/// [`RangeSource`] backed by a shared `reqwest::Client`.
///
/// Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct HttpRangeSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRangeSource {
    /// Builds a client from `config`.
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        if config.add_padding {
            headers.insert(
                HeaderName::from_static("add-padding"),
                HeaderValue::from_static("true"),
            );
        }

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .default_headers(headers)
            .build()
            .map_err(Error::HttpClient)?;

        Self::with_client(client, &config.base_url)
    }

    /// Wraps an existing client, e.g. one shared with other parts of an
    /// application.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, Error> {
        let url = Url::parse(base_url).map_err(|e| Error::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base_url}/range/{prefix}`
    pub fn range_url(&self, prefix: QueryPrefix<'_>) -> String {
        format!("{}/range/{}", self.base_url, prefix)
    }
}

impl RangeSource for HttpRangeSource {
    async fn fetch_range(&self, prefix: QueryPrefix<'_>) -> Result<RangeResponse, Error> {
        let url = self.range_url(prefix);
        let network = |source| Error::Network { prefix: prefix.to_string(), source };

        let response = self.client.get(&url).send().await.map_err(network)?;
        let status = response.status();
        debug!(%prefix, status = status.as_u16(), "range response");

        if status != StatusCode::OK {
            return Ok(RangeResponse::Rejected { status: status.as_u16() });
        }

        let body = response.text().await.map_err(network)?;
        Ok(RangeResponse::Candidates(body))
    }
}
