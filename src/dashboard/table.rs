use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::news::NewsArticle;
use crate::sentiment::{PolarityScorer, SentimentLabel, analyze_with};

/// Rounds a score to the three decimals kept in the table and in exports.
pub fn round_score(score: f64) -> f64 {
    (score * 1000.0).round() / 1000.0
}

/// One scored article, as shown in the dashboard and written by the export.
///
/// Field names on the wire match the export format
/// (`Title`, `Source`, `Sentiment`, `Score`, `Published At`, `URL`, `Description`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRow {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Sentiment")]
    pub sentiment: SentimentLabel,
    /// Rounded to three decimals; `sentiment` is always `SentimentLabel::from_score(score)`.
    #[serde(rename = "Score")]
    pub score: f64,
    #[serde(rename = "Published At")]
    pub published: NaiveDate,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

impl ArticleRow {
    /// Scores the article's headline and builds its row.
    pub fn scored<S: PolarityScorer + ?Sized>(article: &NewsArticle, scorer: &S) -> Self {
        let score = round_score(analyze_with(scorer, &article.title).score);
        Self {
            title: article.title.clone(),
            source: article.source.clone(),
            // Labelled from the stored score so a row can never disagree with itself.
            sentiment: SentimentLabel::from_score(score),
            score,
            published: article.published_at.date_naive(),
            url: article.url.clone(),
            description: article.description.clone(),
        }
    }
}

/// The full result of one fetch, in provider order. Never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleTable {
    rows: Vec<ArticleRow>,
}

impl ArticleTable {
    /// Scores every article's headline with `scorer`.
    pub fn from_articles<S: PolarityScorer + ?Sized>(articles: &[NewsArticle], scorer: &S) -> Self {
        Self {
            rows: articles
                .iter()
                .map(|a| ArticleRow::scored(a, scorer))
                .collect(),
        }
    }

    /// Wraps rows that were already scored (e.g., re-read from an export).
    pub fn from_rows(rows: Vec<ArticleRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ArticleRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Labels present in the table, in order of first appearance.
    pub fn sentiment_options(&self) -> Vec<SentimentLabel> {
        let mut out: Vec<SentimentLabel> = Vec::new();
        for row in &self.rows {
            if !out.contains(&row.sentiment) {
                out.push(row.sentiment);
            }
        }
        out
    }

    /// Sources present in the table, in order of first appearance.
    pub fn source_options(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for row in &self.rows {
            if !out.iter().any(|s| s == &row.source) {
                out.push(row.source.clone());
            }
        }
        out
    }
}
