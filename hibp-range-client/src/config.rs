use std::time::Duration;

/// The public Pwned Passwords range endpoint, including the trailing slash.
pub const DEFAULT_BASE_URL: &str = "https://api.pwnedpasswords.com/range/";

/// Environment variable name for overriding the range endpoint.
pub const HIBP_RANGE_URL_ENV: &str = "HIBP_RANGE_URL";

/// The crate version, sent as part of the `User-Agent`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the base URL from the HIBP_RANGE_URL environment variable,
/// or falls back to [`DEFAULT_BASE_URL`].
pub fn base_url_from_env() -> String {
    std::env::var(HIBP_RANGE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

fn default_user_agent() -> String {
    format!("hibp-range-client/{VERSION} (+https://github.com/PrismaPhonic/hibp-rs)")
}

/// Transport settings for a [`RangeClient`](crate::RangeClient).
///
/// Consumed when the client is built; the client never changes it afterwards.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Prefix to which the 5-character hash prefix is appended verbatim.
    pub base_url: String,
    pub user_agent: String,
    /// TCP connect plus TLS handshake.
    pub connect_timeout: Duration,
    pub tcp_keepalive: Duration,
    pub pool_idle_timeout: Duration,
    pub pool_max_idle_per_host: usize,
    /// Deadline for the whole request, including reading the body.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let parallelism = std::thread::available_parallelism().map_or(1, |n| n.get());

        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: default_user_agent(),
            connect_timeout: Duration::from_secs(30),
            tcp_keepalive: Duration::from_secs(30),
            pool_idle_timeout: Duration::from_secs(30),
            pool_max_idle_per_host: parallelism + 1,
            request_timeout: Duration::from_secs(40),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}
