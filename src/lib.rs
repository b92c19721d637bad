//! news-sentiment: keyword news search, headline sentiment scoring, and dashboard views.
//!
//! The pipeline is fetch → score → tabulate:
//! - [`NewsBuilder`] pages through the news search API and applies a recency cutoff.
//! - [`sentiment::analyze`] turns each headline into a compound score and a label.
//! - [`Dashboard`] holds the resulting [`ArticleTable`] and derives filtered views from it.
//!
//! ```no_run
//! # use news_sentiment::{Dashboard, FetchRequest, LexiconScorer, NewsClient};
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = NewsClient::builder().api_key("your-key").build()?;
//! let mut dashboard = Dashboard::new();
//! let report = dashboard
//!     .fetch(&client, &LexiconScorer::new(), FetchRequest::default())
//!     .await?;
//! println!("{} articles", report.rows);
//! if let Some(view) = dashboard.view() {
//!     for row in view.top_bullish(3) {
//!         println!("{} ({})", row.title, row.score);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod dashboard;
pub mod news;
pub mod render;
pub mod sentiment;

pub use crate::core::{NewsClient, NewsClientBuilder, NsError};
pub use dashboard::{
    ArticleRow, ArticleTable, Dashboard, DashboardState, FetchReport, FetchRequest,
    FilterSelection, FilteredView,
};
pub use news::{NewsArticle, NewsBatch, NewsBuilder, ProviderFailure};
pub use sentiment::{LexiconScorer, PolarityScorer, Sentiment, SentimentLabel};
