//! Read-only projections over the filtered rows.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use super::export;
use super::table::ArticleRow;
use crate::core::NsError;
use crate::sentiment::SentimentLabel;

/// Headlines listed in each top-N ranking.
pub const TOP_N: usize = 3;
/// Bins in the score histogram, spanning [-1, 1].
pub const HISTOGRAM_BINS: usize = 20;

/// The rows that pass the current filters, in table order.
///
/// Every view is recomputed from these rows on demand; nothing is cached.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    rows: Vec<&'a ArticleRow>,
}

impl<'a> FilteredView<'a> {
    pub fn new(rows: Vec<&'a ArticleRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[&'a ArticleRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Highest-scoring Bullish rows, best first. Ties keep table order.
    pub fn top_bullish(&self, n: usize) -> Vec<&'a ArticleRow> {
        self.ranked(SentimentLabel::Bullish, n, |a, b| b.total_cmp(a))
    }

    /// Lowest-scoring Bearish rows, worst first. Ties keep table order.
    pub fn top_bearish(&self, n: usize) -> Vec<&'a ArticleRow> {
        self.ranked(SentimentLabel::Bearish, n, f64::total_cmp)
    }

    fn ranked(
        &self,
        label: SentimentLabel,
        n: usize,
        by: impl Fn(&f64, &f64) -> Ordering,
    ) -> Vec<&'a ArticleRow> {
        let mut picked: Vec<&'a ArticleRow> = self
            .rows
            .iter()
            .copied()
            .filter(|r| r.sentiment == label)
            .collect();
        // `sort_by` is stable.
        picked.sort_by(|a, b| by(&a.score, &b.score));
        picked.truncate(n);
        picked
    }

    /// The rows ordered by `column`, ascending unless `descending`.
    ///
    /// The sort is stable in both directions, so equal keys keep table order. The view and the
    /// session table are left untouched.
    pub fn sorted_by(&self, column: SortColumn, descending: bool) -> Vec<&'a ArticleRow> {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| {
            let ord = column.compare(a, b);
            if descending { ord.reverse() } else { ord }
        });
        rows
    }

    pub fn counts(&self) -> SentimentCounts {
        let mut counts = SentimentCounts::default();
        for row in &self.rows {
            counts.add(row.sentiment);
        }
        counts
    }

    /// Mean score per publication day, oldest first.
    pub fn trend(&self) -> Vec<TrendPoint> {
        let mut by_day: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
        for row in &self.rows {
            let entry = by_day.entry(row.published).or_insert((0.0, 0));
            entry.0 += row.score;
            entry.1 += 1;
        }
        by_day
            .into_iter()
            .map(|(date, (sum, count))| TrendPoint {
                date,
                average: sum / count as f64,
                count,
            })
            .collect()
    }

    pub fn histogram(&self, bins: usize) -> ScoreHistogram {
        ScoreHistogram::from_scores(self.rows.iter().map(|r| r.score), bins)
    }

    pub fn heatmap(&self) -> SourceHeatmap {
        let mut cells: BTreeMap<&str, [usize; 3]> = BTreeMap::new();
        for row in &self.rows {
            cells.entry(row.source.as_str()).or_default()[label_index(row.sentiment)] += 1;
        }
        let labels: Vec<SentimentLabel> = SentimentLabel::ALL
            .into_iter()
            .filter(|l| cells.values().any(|c| c[label_index(*l)] > 0))
            .collect();
        let mut sources = Vec::with_capacity(cells.len());
        let mut counts = Vec::with_capacity(cells.len());
        for (source, c) in cells {
            sources.push(source.to_string());
            counts.push(labels.iter().map(|l| c[label_index(*l)]).collect());
        }
        SourceHeatmap {
            sources,
            labels,
            counts,
        }
    }

    /// The first `limit` rows, for the expanded article listing.
    pub fn details(&self, limit: usize) -> &[&'a ArticleRow] {
        &self.rows[..limit.min(self.rows.len())]
    }

    /// Pretty-printed JSON array of the filtered rows.
    ///
    /// # Errors
    ///
    /// Returns [`NsError::Export`] if serialization fails.
    pub fn export_json(&self) -> Result<String, NsError> {
        export::to_json(&self.rows)
    }
}

/// A results-table column the rows can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Title,
    Source,
    /// Ordered by label name: Bearish, Bullish, Neutral.
    Sentiment,
    Score,
    Published,
}

impl SortColumn {
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::Source,
        Self::Sentiment,
        Self::Score,
        Self::Published,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Source => "Source",
            Self::Sentiment => "Sentiment",
            Self::Score => "Score",
            Self::Published => "Published At",
        }
    }

    fn compare(self, a: &ArticleRow, b: &ArticleRow) -> Ordering {
        match self {
            Self::Title => a.title.cmp(&b.title),
            Self::Source => a.source.cmp(&b.source),
            Self::Sentiment => a.sentiment.as_str().cmp(b.sentiment.as_str()),
            Self::Score => a.score.total_cmp(&b.score),
            Self::Published => a.published.cmp(&b.published),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

const fn label_index(label: SentimentLabel) -> usize {
    match label {
        SentimentLabel::Bullish => 0,
        SentimentLabel::Bearish => 1,
        SentimentLabel::Neutral => 2,
    }
}

/// Row count per label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentCounts {
    pub bullish: usize,
    pub bearish: usize,
    pub neutral: usize,
}

impl SentimentCounts {
    fn add(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Bullish => self.bullish += 1,
            SentimentLabel::Bearish => self.bearish += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    pub const fn get(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Bullish => self.bullish,
            SentimentLabel::Bearish => self.bearish,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    pub const fn total(&self) -> usize {
        self.bullish + self.bearish + self.neutral
    }

    /// Labels with a non-zero count, most frequent first (ties in `SentimentLabel::ALL` order).
    pub fn ranked(&self) -> Vec<(SentimentLabel, usize)> {
        let mut out: Vec<(SentimentLabel, usize)> = SentimentLabel::ALL
            .into_iter()
            .map(|l| (l, self.get(l)))
            .filter(|(_, n)| *n > 0)
            .collect();
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }

    /// Percentage of rows carrying `label`; 0 when there are no rows.
    pub fn share(&self, label: SentimentLabel) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.get(label) as f64 * 100.0 / total as f64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub average: f64,
    pub count: usize,
}

/// Equal-width bins over [-1, 1]. A score of exactly 1.0 lands in the last bin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreHistogram {
    pub counts: Vec<usize>,
}

impl ScoreHistogram {
    pub const LOW: f64 = -1.0;
    pub const HIGH: f64 = 1.0;

    pub fn from_scores(scores: impl IntoIterator<Item = f64>, bins: usize) -> Self {
        let bins = bins.max(1);
        let width = (Self::HIGH - Self::LOW) / bins as f64;
        let mut counts = vec![0; bins];
        for score in scores {
            let score = score.clamp(Self::LOW, Self::HIGH);
            let idx = (((score - Self::LOW) / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }
        Self { counts }
    }

    /// The `[start, end)` score range covered by bin `idx`.
    pub fn bin_range(&self, idx: usize) -> (f64, f64) {
        let width = (Self::HIGH - Self::LOW) / self.counts.len() as f64;
        let start = Self::LOW + width * idx as f64;
        (start, start + width)
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Row counts per (source, label). `counts[i][j]` pairs `sources[i]` with `labels[j]`.
///
/// Sources are sorted; only labels that occur in some cell get a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceHeatmap {
    pub sources: Vec<String>,
    pub labels: Vec<SentimentLabel>,
    pub counts: Vec<Vec<usize>>,
}

impl SourceHeatmap {
    pub fn get(&self, source: &str, label: SentimentLabel) -> usize {
        let Some(i) = self.sources.iter().position(|s| s == source) else {
            return 0;
        };
        let Some(j) = self.labels.iter().position(|l| *l == label) else {
            return 0;
        };
        self.counts[i][j]
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().flatten().copied().max().unwrap_or(0)
    }
}

/// Bounds of the "how many articles to show" choice for a view of `len` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailLimit {
    pub min: usize,
    pub max: usize,
    pub default: usize,
}

impl DetailLimit {
    pub const fn for_len(len: usize) -> Self {
        let max = if len < 30 { len } else { 30 };
        let min = if max < 5 { max } else { 5 };
        let default = if max < 10 { max } else { 10 };
        Self { min, max, default }
    }
}
