use serde::{Deserialize, Serialize};

use super::table::{ArticleRow, ArticleTable};
use crate::sentiment::SentimentLabel;

/// Lowest selectable minimum score.
pub const MIN_SCORE_FLOOR: f64 = -1.0;
/// Highest selectable minimum score.
pub const MIN_SCORE_CEIL: f64 = 1.0;
/// Step between selectable minimum scores.
pub const MIN_SCORE_STEP: f64 = 0.1;

/// The user's current filter choices. A row is kept only when it matches all three.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub sentiments: Vec<SentimentLabel>,
    pub sources: Vec<String>,
    pub min_score: f64,
}

impl FilterSelection {
    /// Selects every label and source present in `table`, with no score floor.
    pub fn all_of(table: &ArticleTable) -> Self {
        Self {
            sentiments: table.sentiment_options(),
            sources: table.source_options(),
            min_score: MIN_SCORE_FLOOR,
        }
    }

    pub fn matches(&self, row: &ArticleRow) -> bool {
        self.sentiments.contains(&row.sentiment)
            && self.sources.iter().any(|s| s == &row.source)
            && row.score >= self.min_score
    }

    /// Rows of `table` that pass the filter, in table order.
    pub fn apply<'a>(&self, table: &'a ArticleTable) -> Vec<&'a ArticleRow> {
        table.rows().iter().filter(|r| self.matches(r)).collect()
    }
}

/// Selectable minimum scores, -1.0 to 1.0 in steps of 0.1.
pub fn min_score_steps() -> Vec<f64> {
    let n = ((MIN_SCORE_CEIL - MIN_SCORE_FLOOR) / MIN_SCORE_STEP).round() as i32;
    (0..=n)
        .map(|i| ((MIN_SCORE_FLOOR + f64::from(i) * MIN_SCORE_STEP) * 10.0).round() / 10.0 + 0.0)
        .collect()
}
