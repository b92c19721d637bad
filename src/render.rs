//! Plain-text rendering of dashboard views.
//!
//! Everything here returns a `String` with no terminal styling so the binary can decide how to
//! print it.

use std::fmt::Write as _;

use crate::dashboard::{ArticleRow, ScoreHistogram, SentimentCounts, SourceHeatmap, TrendPoint};
use crate::sentiment::SentimentLabel;

/// Cells used by the widest bar in a chart.
pub const BAR_WIDTH: usize = 40;
/// Characters kept from a title in the results table.
pub const TITLE_WIDTH: usize = 60;

const LABEL_WIDTH: usize = 9;
const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn bar(value: usize, max: usize, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let cells = (value * width).div_ceil(max);
    "█".repeat(cells)
}

const fn glyph(label: SentimentLabel) -> char {
    match label {
        SentimentLabel::Bullish => '█',
        SentimentLabel::Bearish => '▓',
        SentimentLabel::Neutral => '░',
    }
}

/// Title / Source / Sentiment / Score columns.
pub fn results_table(rows: &[&ArticleRow]) -> String {
    let source_width = rows
        .iter()
        .map(|r| r.source.chars().count())
        .max()
        .unwrap_or(0)
        .clamp("Source".len(), 24);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<tw$}  {:<sw$}  {:<LABEL_WIDTH$}  {:>6}",
        "Title",
        "Source",
        "Sentiment",
        "Score",
        tw = TITLE_WIDTH,
        sw = source_width,
    );
    let _ = writeln!(out, "{}", "-".repeat(TITLE_WIDTH + source_width + LABEL_WIDTH + 12));
    for row in rows {
        let _ = writeln!(
            out,
            "{:<tw$}  {:<sw$}  {:<LABEL_WIDTH$}  {:>6.3}",
            truncate(&row.title, TITLE_WIDTH),
            truncate(&row.source, source_width),
            row.sentiment,
            row.score,
            tw = TITLE_WIDTH,
            sw = source_width,
        );
    }
    out
}

/// A ranked headline list, or `empty_message` when there is nothing to show.
pub fn headline_list(rows: &[&ArticleRow], empty_message: &str) -> String {
    if rows.is_empty() {
        return format!("{empty_message}\n");
    }
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(out, "  {}", row.title);
        let _ = writeln!(out, "    Read more: {} | Score: {}", row.url, row.score);
    }
    out
}

/// The expanded view of one article.
pub fn article_details(row: &ArticleRow) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", row.title);
    let _ = writeln!(out, "  Sentiment: {}", row.sentiment);
    let _ = writeln!(out, "  Score:     {}", row.score);
    let _ = writeln!(out, "  Published: {}", row.published);
    let _ = writeln!(out, "  Source:    {}", row.source);
    let _ = writeln!(
        out,
        "  {}",
        row.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or("No description available.")
    );
    let _ = writeln!(out, "  Read full article: {}", row.url);
    out
}

/// Horizontal bar per label, most frequent first.
pub fn bar_chart(counts: &SentimentCounts) -> String {
    let ranked = counts.ranked();
    let max = ranked.iter().map(|(_, n)| *n).max().unwrap_or(0);
    let mut out = String::new();
    for (label, n) in ranked {
        let _ = writeln!(out, "{:<LABEL_WIDTH$} {} {n}", label, bar(n, max, BAR_WIDTH));
    }
    out
}

/// Share of each label as a percentage with a proportional bar.
pub fn pie_chart(counts: &SentimentCounts) -> String {
    let mut out = String::new();
    for (label, _) in counts.ranked() {
        let share = counts.share(label);
        let cells = (share / 100.0 * BAR_WIDTH as f64).round() as usize;
        let _ = writeln!(
            out,
            "{:<LABEL_WIDTH$} {:>5.1}% {}",
            label,
            share,
            glyph(label).to_string().repeat(cells)
        );
    }
    out
}

/// A single ring split by label share, followed by a legend.
pub fn donut_chart(counts: &SentimentCounts) -> String {
    let ranked = counts.ranked();
    let total = counts.total();
    let mut ring = String::new();
    if total > 0 {
        let mut used = 0;
        for (i, (label, n)) in ranked.iter().enumerate() {
            let cells = if i + 1 == ranked.len() {
                BAR_WIDTH - used
            } else {
                ((*n * BAR_WIDTH) as f64 / total as f64).round() as usize
            };
            let cells = cells.min(BAR_WIDTH - used);
            used += cells;
            ring.extend(std::iter::repeat_n(glyph(*label), cells));
        }
    }
    let mut out = format!("({ring})\n");
    for (label, _) in ranked {
        let share = counts.share(label);
        let _ = writeln!(out, "  {} {:<LABEL_WIDTH$} {share:>5.1}%", glyph(label), label);
    }
    out
}

/// One line per day with the mean score plotted on a [-1, 1] axis.
pub fn trend_chart(points: &[TrendPoint]) -> String {
    const AXIS: usize = 41;
    let mut out = String::new();
    for p in points {
        let pos = (((p.average + 1.0) / 2.0) * (AXIS - 1) as f64).round() as usize;
        let line: String = (0..AXIS)
            .map(|i| {
                if i == pos.min(AXIS - 1) {
                    '●'
                } else if i == AXIS / 2 {
                    '|'
                } else {
                    '·'
                }
            })
            .collect();
        let _ = writeln!(out, "{}  {:+.3}  {line}  (n={})", p.date, p.average, p.count);
    }
    out
}

pub fn histogram_chart(hist: &ScoreHistogram) -> String {
    let max = hist.max_count();
    let mut out = String::new();
    for (i, n) in hist.counts.iter().enumerate() {
        let (start, end) = hist.bin_range(i);
        let _ = writeln!(out, "[{start:+.2}, {end:+.2}) {} {n}", bar(*n, max, BAR_WIDTH));
    }
    out
}

/// Source rows by label columns; each cell shows the count and a shade for its intensity.
pub fn heatmap_chart(map: &SourceHeatmap) -> String {
    let source_width = map
        .sources
        .iter()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0)
        .clamp("Source".len(), 24);
    let max = map.max_count();
    let mut out = String::new();
    let _ = write!(out, "{:<source_width$}", "Source");
    for label in &map.labels {
        let _ = write!(out, "  {:>LABEL_WIDTH$}", label.as_str());
    }
    out.push('\n');
    for (source, row) in map.sources.iter().zip(&map.counts) {
        let _ = write!(out, "{:<source_width$}", truncate(source, source_width));
        for n in row {
            let shade = if max == 0 {
                SHADES[0]
            } else {
                SHADES[(n * (SHADES.len() - 1)).div_ceil(max)]
            };
            let _ = write!(out, "  {:>w$}{shade}", n, w = LABEL_WIDTH - 1);
        }
        out.push('\n');
    }
    out
}
