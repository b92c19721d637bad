mod api;
mod model;
mod wire;

pub use model::{NewsArticle, NewsBatch, ProviderFailure};

use chrono::{DateTime, Utc};

use crate::core::{NewsClient, NsError};

/// Default recency window, in days.
pub const DEFAULT_DAYS: u32 = 1;
/// Default page budget. The provider ceiling caps it at two requests.
pub const DEFAULT_MAX_PAGES: u32 = 3;

/// Number of requests a fetch with the given page budget will issue at most.
pub const fn effective_pages(requested: u32) -> u32 {
    api::effective_pages(requested)
}

/// A builder for fetching recent articles that match a keyword.
///
/// Pages are requested one after another; a provider-reported failure ends pagination
/// early and is returned in [`NewsBatch::failure`] rather than as an error.
pub struct NewsBuilder {
    client: NewsClient,
    query: String,
    days: u32,
    max_pages: u32,
    now: Option<DateTime<Utc>>,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` for a given search keyword.
    pub fn new(client: &NewsClient, query: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            query: query.into(),
            days: DEFAULT_DAYS,
            max_pages: DEFAULT_MAX_PAGES,
            now: None,
        }
    }

    /// Keeps only articles published within the last `days` days.
    #[must_use]
    pub const fn days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    /// Sets the page budget. See [`effective_pages`].
    #[must_use]
    pub const fn max_pages(mut self, pages: u32) -> Self {
        self.max_pages = pages;
        self
    }

    /// Pins the reference time used for the recency cutoff. Defaults to `Utc::now()`.
    #[must_use]
    pub const fn now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Executes the requests and collects the articles.
    ///
    /// # Errors
    ///
    /// Returns an `NsError` on a network failure, a body that is not the expected JSON,
    /// or an article whose `publishedAt` is not `YYYY-MM-DDTHH:MM:SSZ`. Nothing is retried.
    #[tracing::instrument(skip(self), err, fields(query = %self.query, days = self.days))]
    pub async fn fetch(self) -> Result<NewsBatch, NsError> {
        api::fetch_news(
            &self.client,
            &self.query,
            self.days,
            self.max_pages,
            self.now.unwrap_or_else(Utc::now),
        )
        .await
    }
}
