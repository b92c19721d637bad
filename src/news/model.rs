use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single article returned by the news search API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsArticle {
    /// The headline of the article.
    pub title: String,
    /// The display name of the publishing source (e.g., "Reuters").
    pub source: String,
    /// When the article was published, in UTC.
    pub published_at: DateTime<Utc>,
    /// A direct link to the article.
    pub url: String,
    /// The provider's short description, if any.
    pub description: Option<String>,
}

/// The provider answered with a status other than `"ok"`.
///
/// Pagination stops at the failing page; articles gathered from earlier pages are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderFailure {
    /// The 1-based page that failed.
    pub page: u32,
    /// The HTTP status code of the failing response.
    pub http_status: u16,
    /// The `status` field of the body (`"error"` in practice), if present.
    pub status: Option<String>,
    /// The provider error code (e.g., `"apiKeyInvalid"`, `"rateLimited"`).
    pub code: Option<String>,
    /// The provider's human-readable message.
    pub message: Option<String>,
}

impl std::fmt::Display for ProviderFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "news API error on page {} (HTTP {})", self.page, self.http_status)?;
        if let Some(code) = &self.code {
            write!(f, " [{code}]")?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

/// The outcome of one fetch: the kept articles, in provider order, plus any provider failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewsBatch {
    /// Articles published at or after the recency cutoff.
    pub articles: Vec<NewsArticle>,
    /// Number of page requests that were issued.
    pub pages_fetched: u32,
    /// Set when pagination stopped early because the provider reported a failure.
    pub failure: Option<ProviderFailure>,
}

impl NewsBatch {
    /// Returns `true` when the provider cut the fetch short.
    pub fn is_partial(&self) -> bool {
        self.failure.is_some()
    }
}
