//! Session state for the dashboard and the views derived from it.
//!
//! A [`Dashboard`] is either empty or holds exactly one [`ArticleTable`], replaced wholesale by
//! each fetch. Filtering never touches the table; every view is recomputed from it.

mod export;
mod filter;
mod table;
mod views;

pub use export::{EXPORT_FILE_NAME, from_json, write_json};
pub use filter::{FilterSelection, MIN_SCORE_CEIL, MIN_SCORE_FLOOR, MIN_SCORE_STEP, min_score_steps};
pub use table::{ArticleRow, ArticleTable, round_score};
pub use views::{
    DetailLimit, FilteredView, HISTOGRAM_BINS, ScoreHistogram, SentimentCounts, SortColumn,
    SourceHeatmap, TOP_N, TrendPoint,
};

use crate::core::{NewsClient, NsError};
use crate::news::{NewsBuilder, ProviderFailure};
use crate::sentiment::PolarityScorer;

/// Parameters of one fetch action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Search keyword sent as `q`.
    pub query: String,
    /// Keep articles published within this many days.
    pub days: u32,
    /// Page budget; the provider ceiling still applies.
    pub max_pages: u32,
}

impl Default for FetchRequest {
    fn default() -> Self {
        Self {
            query: "crypto".to_string(),
            days: crate::news::DEFAULT_DAYS,
            max_pages: crate::news::DEFAULT_MAX_PAGES,
        }
    }
}

/// What a completed fetch produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchReport {
    /// Rows in the new session table.
    pub rows: usize,
    /// Pages requested, including a failed one.
    pub pages_fetched: u32,
    /// Present when the provider cut pagination short; the table holds the partial result.
    pub warning: Option<ProviderFailure>,
}

/// Whether a fetch has succeeded yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardState {
    /// No table; every view shows the "fetch first" prompt.
    Empty,
    /// A table is loaded and views can be derived from it.
    Loaded,
}

#[derive(Debug, Clone)]
struct Loaded {
    request: FetchRequest,
    table: ArticleTable,
    filters: FilterSelection,
    warning: Option<ProviderFailure>,
}

/// One dashboard session: the current table, the filter selection and the last fetch's warning.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    loaded: Option<Loaded>,
}

impl Dashboard {
    /// An empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// `Empty` until the first successful fetch.
    pub const fn state(&self) -> DashboardState {
        match self.loaded {
            Some(_) => DashboardState::Loaded,
            None => DashboardState::Empty,
        }
    }

    /// Fetches, scores and loads a new table, replacing the current one.
    ///
    /// # Errors
    ///
    /// Propagates any fetch error; the dashboard is left exactly as it was.
    pub async fn fetch<S: PolarityScorer + ?Sized>(
        &mut self,
        client: &NewsClient,
        scorer: &S,
        request: FetchRequest,
    ) -> Result<FetchReport, NsError> {
        let batch = NewsBuilder::new(client, request.query.clone())
            .days(request.days)
            .max_pages(request.max_pages)
            .fetch()
            .await?;

        let table = ArticleTable::from_articles(&batch.articles, scorer);
        let report = FetchReport {
            rows: table.len(),
            pages_fetched: batch.pages_fetched,
            warning: batch.failure.clone(),
        };
        self.load(request, table, batch.failure);
        Ok(report)
    }

    /// Installs `table` as the session table and resets the filters to select everything in it.
    ///
    /// This is the only place the session table changes.
    pub fn load(
        &mut self,
        request: FetchRequest,
        table: ArticleTable,
        warning: Option<ProviderFailure>,
    ) {
        tracing::debug!(query = %request.query, rows = table.len(), "session table replaced");
        self.loaded = Some(Loaded {
            filters: FilterSelection::all_of(&table),
            request,
            table,
            warning,
        });
    }

    /// The session table, or `None` before the first fetch.
    pub fn table(&self) -> Option<&ArticleTable> {
        self.loaded.as_ref().map(|l| &l.table)
    }

    /// The request that produced the current table.
    pub fn request(&self) -> Option<&FetchRequest> {
        self.loaded.as_ref().map(|l| &l.request)
    }

    /// The provider failure from the last fetch, if it was partial.
    pub fn warning(&self) -> Option<&ProviderFailure> {
        self.loaded.as_ref().and_then(|l| l.warning.as_ref())
    }

    /// The current filter selection.
    pub fn filters(&self) -> Option<&FilterSelection> {
        self.loaded.as_ref().map(|l| &l.filters)
    }

    /// Replaces the filter selection. Ignored while empty.
    pub fn set_filters(&mut self, filters: FilterSelection) {
        if let Some(loaded) = self.loaded.as_mut() {
            loaded.filters = filters;
        }
    }

    /// Restores the filters to select every label and source in the table.
    pub fn reset_filters(&mut self) {
        if let Some(loaded) = self.loaded.as_mut() {
            loaded.filters = FilterSelection::all_of(&loaded.table);
        }
    }

    /// The rows passing the current filters, or `None` before the first fetch.
    pub fn view(&self) -> Option<FilteredView<'_>> {
        self.loaded
            .as_ref()
            .map(|l| FilteredView::new(l.filters.apply(&l.table)))
    }
}
