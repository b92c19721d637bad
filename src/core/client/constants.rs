//! Centralized constants for default endpoints, UA and provider limits.

/// Default UA sent with every request.
pub(crate) const USER_AGENT: &str = concat!("news-sentiment/", env!("CARGO_PKG_VERSION"));

/// News search API base (`v2/everything` is joined onto it).
pub(crate) const DEFAULT_BASE_NEWS: &str = "https://newsapi.org/";

/// Path of the search endpoint, relative to the base.
pub(crate) const EVERYTHING_PATH: &str = "v2/everything";

/// Maximum articles the provider returns per page.
pub const PAGE_SIZE: u32 = 50;

/// Maximum total results the provider serves for one query (free tier).
pub const MAX_TOTAL_RESULTS: u32 = 100;
