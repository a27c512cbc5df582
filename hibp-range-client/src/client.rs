use reqwest::{StatusCode, Url};
use tracing::debug;

use crate::config::ClientConfig;
use crate::digest::HashSplit;
use crate::error::Error;
use crate::range::{CandidateRecord, find_count, parse_range_body};

/// Checks passwords against a Pwned Passwords style range API.
///
/// Cloning is cheap and clones share one connection pool, so a single client
/// can serve any number of concurrent checks.
#[derive(Debug, Clone)]
pub struct RangeClient {
    base_url: String,
    http: reqwest::Client,
}

impl RangeClient {
    /// Builds a client, validating the base URL up front.
    ///
    /// The base URL must be an absolute `http` or `https` URL. It should end
    /// with a slash, since the prefix is appended to it as-is.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let base_url = validate_base_url(&config.base_url)?;

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .connect_timeout(config.connect_timeout)
            .tcp_keepalive(config.tcp_keepalive)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .timeout(config.request_timeout)
            .build()
            .map_err(Error::ClientBuild)?;

        Ok(Self { base_url, http })
    }

    /// Builds a client with default transport settings against `base_url`.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig::default().with_base_url(base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns how many times `password` appears in the breach corpus.
    ///
    /// `Ok(0)` means the range was fetched and parsed and the suffix was not in
    /// it. Only the 5-character hash prefix is sent over the network.
    pub async fn check(&self, password: &[u8]) -> Result<u64, Error> {
        let hash = HashSplit::from_password(password);
        let records = self.fetch_range(hash.prefix()).await?;

        Ok(find_count(&records, hash.suffix()))
    }

    /// Fetches and parses every candidate record for `prefix`.
    ///
    /// Fails on any status other than 200, and on a body without a single
    /// valid `SUFFIX:COUNT` line.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn fetch_range(&self, prefix: &str) -> Result<Vec<CandidateRecord>, Error> {
        let url = format!("{}{}", self.base_url, prefix);

        debug!("requesting range");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| Error::HttpRequest { prefix: prefix.to_string(), source })?;

        let status = response.status();
        debug!(%status, "range response");
        if status != StatusCode::OK {
            return Err(Error::UnexpectedStatus { prefix: prefix.to_string(), status });
        }

        let body = response
            .text()
            .await
            .map_err(|source| Error::HttpRequest { prefix: prefix.to_string(), source })?;

        let records = parse_range_body(&body);
        debug!(records = records.len(), "parsed range body");

        if records.is_empty() {
            return Err(Error::EmptyResponse { prefix: prefix.to_string() });
        }

        Ok(records)
    }
}

fn validate_base_url(base_url: &str) -> Result<String, Error> {
    let invalid = |reason: String| Error::InvalidBaseUrl { url: base_url.to_string(), reason };

    let url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url.into()),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}
