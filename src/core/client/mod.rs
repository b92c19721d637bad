//! Public client surface + builder.
//! Endpoint defaults and provider limits live in `constants`.

pub(crate) mod constants;

use crate::core::NsError;
use constants::{DEFAULT_BASE_NEWS, USER_AGENT};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use url::Url;

pub use constants::{MAX_TOTAL_RESULTS, PAGE_SIZE};

/// HTTP client for the news search API.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct NewsClient {
    http: Client,
    base_news: Url,
    api_key: String,
}

impl fmt::Debug for NewsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsClient")
            .field("base_news", &self.base_news.as_str())
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl NewsClient {
    /// Create a new builder.
    pub fn builder() -> NewsClientBuilder {
        NewsClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`NewsClient`]. Only the API key is required.
#[derive(Default)]
pub struct NewsClientBuilder {
    api_key: Option<String>,
    user_agent: Option<String>,
    base_news: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl NewsClientBuilder {
    /// Set the API key sent as the `apiKey` query parameter. Required.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the news API base (e.g., `https://newsapi.org/`).
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`NsError::MissingApiKey`] when no (non-blank) key was given, or an HTTP
    /// error if the underlying `reqwest` client cannot be constructed.
    pub fn build(self) -> Result<NewsClient, NsError> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or(NsError::MissingApiKey)?;
        let base_news = match self.base_news {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_NEWS)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(NewsClient {
            http,
            base_news,
            api_key,
        })
    }
}
