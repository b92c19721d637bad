use chrono::NaiveDate;
use news_sentiment::dashboard::{
    DetailLimit, HISTOGRAM_BINS, SortColumn, TOP_N, min_score_steps,
};
use news_sentiment::{FilterSelection, FilteredView, SentimentLabel};

use crate::common::{article, at};
use crate::table_with_scores;

#[test]
fn three_rows_one_of_each_label() {
    let articles = vec![
        article("up", "CoinDesk", at(2024, 1, 9, 10)),
        article("down", "Reuters", at(2024, 1, 9, 9)),
        article("flat", "CoinDesk", at(2024, 1, 8, 9)),
    ];
    let table = table_with_scores(&articles, &[("up", 0.6), ("down", -0.2), ("flat", 0.0)]);
    let view = FilteredView::new(FilterSelection::all_of(&table).apply(&table));

    let counts = view.counts();
    assert_eq!(counts.bullish, 1);
    assert_eq!(counts.bearish, 1);
    assert_eq!(counts.neutral, 1);
    assert_eq!(counts.total(), 3);

    let top: Vec<&str> = view
        .top_bullish(TOP_N)
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(top, ["up"]);
    let bottom: Vec<&str> = view
        .top_bearish(TOP_N)
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(bottom, ["down"]);
}

#[test]
fn rows_are_labelled_from_their_rounded_score() {
    let articles = vec![
        article("edge up", "A", at(2024, 1, 9, 1)),
        article("edge down", "A", at(2024, 1, 9, 2)),
        article("just inside", "A", at(2024, 1, 9, 3)),
    ];
    let table = table_with_scores(
        &articles,
        &[("edge up", 0.0496), ("edge down", -0.04951), ("just inside", 0.0494)],
    );
    let rows = table.rows();
    assert_eq!(rows[0].score, 0.05);
    assert_eq!(rows[0].sentiment, SentimentLabel::Bullish);
    assert_eq!(rows[1].score, -0.05);
    assert_eq!(rows[1].sentiment, SentimentLabel::Bearish);
    assert_eq!(rows[2].score, 0.049);
    assert_eq!(rows[2].sentiment, SentimentLabel::Neutral);
    for row in rows {
        assert_eq!(row.sentiment, SentimentLabel::from_score(row.score));
    }
}

#[test]
fn rankings_are_stable_and_capped() {
    let articles: Vec<_> = ["a", "b", "c", "d", "e", "f"]
        .iter()
        .map(|t| article(t, "S", at(2024, 1, 9, 12)))
        .collect();
    let table = table_with_scores(
        &articles,
        &[("a", 0.5), ("b", 0.5), ("c", 0.9), ("d", 0.5), ("e", -0.7), ("f", -0.7)],
    );
    let view = FilteredView::new(FilterSelection::all_of(&table).apply(&table));

    let top: Vec<&str> = view.top_bullish(3).iter().map(|r| r.title.as_str()).collect();
    assert_eq!(top, ["c", "a", "b"]);
    let bottom: Vec<&str> = view.top_bearish(3).iter().map(|r| r.title.as_str()).collect();
    assert_eq!(bottom, ["e", "f"]);
}

#[test]
fn filters_intersect_all_three_predicates() {
    let articles = vec![
        article("a", "CoinDesk", at(2024, 1, 9, 1)),
        article("b", "Reuters", at(2024, 1, 9, 2)),
        article("c", "CoinDesk", at(2024, 1, 9, 3)),
        article("d", "Decrypt", at(2024, 1, 9, 4)),
    ];
    let table = table_with_scores(&articles, &[("a", 0.8), ("b", 0.3), ("c", -0.4), ("d", 0.02)]);

    let all = FilterSelection::all_of(&table);
    assert_eq!(all.sources, ["CoinDesk", "Reuters", "Decrypt"]);
    assert_eq!(
        all.sentiments,
        [SentimentLabel::Bullish, SentimentLabel::Bearish, SentimentLabel::Neutral]
    );
    assert_eq!(all.min_score, -1.0);
    assert_eq!(all.apply(&table).len(), 4);

    let sel = FilterSelection {
        sentiments: vec![SentimentLabel::Bullish, SentimentLabel::Bearish],
        sources: vec!["CoinDesk".into(), "Reuters".into()],
        min_score: 0.5,
    };
    let kept: Vec<&str> = sel.apply(&table).iter().map(|r| r.title.as_str()).collect();
    assert_eq!(kept, ["a"]);

    let none = FilterSelection {
        sources: vec![],
        ..all.clone()
    };
    assert!(none.apply(&table).is_empty());
}

#[test]
fn filtering_is_idempotent_and_leaves_the_table_alone() {
    let articles = vec![
        article("a", "X", at(2024, 1, 9, 1)),
        article("b", "Y", at(2024, 1, 9, 2)),
        article("c", "X", at(2024, 1, 9, 3)),
    ];
    let table = table_with_scores(&articles, &[("a", 0.4), ("b", -0.4), ("c", 0.1)]);
    let before = table.clone();
    let sel = FilterSelection {
        sentiments: vec![SentimentLabel::Bullish],
        sources: vec!["X".into()],
        min_score: 0.2,
    };

    let first: Vec<_> = sel.apply(&table).into_iter().cloned().collect();
    let second: Vec<_> = sel.apply(&table).into_iter().cloned().collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 1);
    assert_eq!(table, before);
}

#[test]
fn trend_averages_per_day_in_date_order() {
    let articles = vec![
        article("late", "A", at(2024, 1, 9, 20)),
        article("early", "A", at(2024, 1, 9, 1)),
        article("prev", "A", at(2024, 1, 8, 12)),
    ];
    let table = table_with_scores(&articles, &[("late", 0.6), ("early", -0.2), ("prev", 0.0)]);
    let view = FilteredView::new(FilterSelection::all_of(&table).apply(&table));

    let trend = view.trend();
    assert_eq!(trend.len(), 2);
    assert_eq!(trend[0].date, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
    assert_eq!(trend[0].count, 1);
    assert_eq!(trend[0].average, 0.0);
    assert_eq!(trend[1].date, NaiveDate::from_ymd_opt(2024, 1, 9).unwrap());
    assert_eq!(trend[1].count, 2);
    assert!((trend[1].average - 0.2).abs() < 1e-9);
}

#[test]
fn histogram_covers_the_full_range() {
    let articles: Vec<_> = ["lo", "hi", "mid", "mid2"]
        .iter()
        .map(|t| article(t, "S", at(2024, 1, 9, 12)))
        .collect();
    let table = table_with_scores(
        &articles,
        &[("lo", -1.0), ("hi", 1.0), ("mid", 0.33), ("mid2", 0.34)],
    );
    let view = FilteredView::new(FilterSelection::all_of(&table).apply(&table));

    let hist = view.histogram(HISTOGRAM_BINS);
    assert_eq!(hist.counts.len(), HISTOGRAM_BINS);
    assert_eq!(hist.counts.iter().sum::<usize>(), 4);
    assert_eq!(hist.counts[0], 1);
    assert_eq!(hist.counts[HISTOGRAM_BINS - 1], 1);
    assert_eq!(hist.counts[13], 2);
    assert_eq!(hist.max_count(), 2);
    let (start, end) = hist.bin_range(0);
    assert!((start + 1.0).abs() < 1e-12 && (end + 0.9).abs() < 1e-12);
}

#[test]
fn heatmap_counts_source_label_pairs() {
    let articles = vec![
        article("a", "Reuters", at(2024, 1, 9, 1)),
        article("b", "CoinDesk", at(2024, 1, 9, 2)),
        article("c", "CoinDesk", at(2024, 1, 9, 3)),
        article("d", "Reuters", at(2024, 1, 9, 4)),
    ];
    let table = table_with_scores(&articles, &[("a", 0.5), ("b", 0.5), ("c", -0.5), ("d", 0.6)]);
    let view = FilteredView::new(FilterSelection::all_of(&table).apply(&table));

    let map = view.heatmap();
    assert_eq!(map.sources, ["CoinDesk", "Reuters"]);
    assert_eq!(map.labels, [SentimentLabel::Bullish, SentimentLabel::Bearish]);
    assert_eq!(map.get("Reuters", SentimentLabel::Bullish), 2);
    assert_eq!(map.get("Reuters", SentimentLabel::Bearish), 0);
    assert_eq!(map.get("CoinDesk", SentimentLabel::Bearish), 1);
    assert_eq!(map.get("CoinDesk", SentimentLabel::Neutral), 0);
    assert_eq!(map.get("Nobody", SentimentLabel::Bullish), 0);
    assert_eq!(map.max_count(), 2);
}

#[test]
fn counts_rank_by_frequency_and_report_shares() {
    let articles: Vec<_> = ["a", "b", "c", "d"]
        .iter()
        .map(|t| article(t, "S", at(2024, 1, 9, 12)))
        .collect();
    let table = table_with_scores(&articles, &[("a", -0.5), ("b", -0.5), ("c", -0.5), ("d", 0.5)]);
    let view = FilteredView::new(FilterSelection::all_of(&table).apply(&table));

    let counts = view.counts();
    assert_eq!(
        counts.ranked(),
        [(SentimentLabel::Bearish, 3), (SentimentLabel::Bullish, 1)]
    );
    assert_eq!(counts.share(SentimentLabel::Bearish), 75.0);
    assert_eq!(counts.share(SentimentLabel::Neutral), 0.0);
}

#[test]
fn detail_limit_tracks_view_size() {
    assert_eq!(DetailLimit::for_len(0), DetailLimit { min: 0, max: 0, default: 0 });
    assert_eq!(DetailLimit::for_len(3), DetailLimit { min: 3, max: 3, default: 3 });
    assert_eq!(DetailLimit::for_len(12), DetailLimit { min: 5, max: 12, default: 10 });
    assert_eq!(DetailLimit::for_len(80), DetailLimit { min: 5, max: 30, default: 10 });
}

#[test]
fn details_take_the_first_rows() {
    let articles: Vec<_> = (0..4)
        .map(|i| article(&format!("t{i}"), "S", at(2024, 1, 9, i)))
        .collect();
    let table = table_with_scores(&articles, &[]);
    let view = FilteredView::new(FilterSelection::all_of(&table).apply(&table));
    assert_eq!(view.details(2).len(), 2);
    assert_eq!(view.details(2)[0].title, "t0");
    assert_eq!(view.details(10).len(), 4);
}

#[test]
fn min_score_steps_run_from_minus_one_to_one() {
    let steps = min_score_steps();
    assert_eq!(steps.len(), 21);
    assert_eq!(steps[0], -1.0);
    assert_eq!(steps[20], 1.0);
    assert_eq!(steps[10], 0.0);
    assert!(steps[10].is_sign_positive());
    assert_eq!(steps[13], 0.3);
}

fn sortable_table() -> news_sentiment::ArticleTable {
    let articles = vec![
        article("beta", "Reuters", at(2024, 1, 9, 10)),
        article("alpha", "CoinDesk", at(2024, 1, 8, 10)),
        article("delta", "CoinDesk", at(2024, 1, 9, 8)),
        article("gamma", "Bloomberg", at(2024, 1, 7, 10)),
    ];
    table_with_scores(
        &articles,
        &[("beta", 0.3), ("alpha", -0.4), ("delta", 0.3), ("gamma", 0.0)],
    )
}

fn titles(rows: &[&news_sentiment::ArticleRow]) -> Vec<String> {
    rows.iter().map(|r| r.title.clone()).collect()
}

#[test]
fn sorting_each_column_both_directions() {
    let table = sortable_table();
    let view = FilteredView::new(FilterSelection::all_of(&table).apply(&table));

    let check = |column: SortColumn, ascending: [&str; 4], descending: [&str; 4]| {
        assert_eq!(titles(&view.sorted_by(column, false)), ascending, "{column} ascending");
        assert_eq!(titles(&view.sorted_by(column, true)), descending, "{column} descending");
    };
    check(
        SortColumn::Title,
        ["alpha", "beta", "delta", "gamma"],
        ["gamma", "delta", "beta", "alpha"],
    );
    check(
        SortColumn::Source,
        ["gamma", "alpha", "delta", "beta"],
        ["beta", "alpha", "delta", "gamma"],
    );
    check(
        SortColumn::Sentiment,
        ["alpha", "beta", "delta", "gamma"],
        ["gamma", "beta", "delta", "alpha"],
    );
    check(
        SortColumn::Score,
        ["alpha", "gamma", "beta", "delta"],
        ["beta", "delta", "gamma", "alpha"],
    );
    check(
        SortColumn::Published,
        ["gamma", "alpha", "beta", "delta"],
        ["beta", "delta", "alpha", "gamma"],
    );
}

#[test]
fn sorting_keeps_table_order_for_equal_keys() {
    let articles = vec![
        article("first", "A", at(2024, 1, 9, 1)),
        article("second", "A", at(2024, 1, 9, 2)),
        article("third", "A", at(2024, 1, 9, 3)),
    ];
    let scores = [("first", 0.5), ("second", 0.5), ("third", 0.5)];
    let table = table_with_scores(&articles, &scores);
    let view = FilteredView::new(FilterSelection::all_of(&table).apply(&table));

    for column in [SortColumn::Source, SortColumn::Score, SortColumn::Published] {
        assert_eq!(titles(&view.sorted_by(column, false)), ["first", "second", "third"]);
        assert_eq!(titles(&view.sorted_by(column, true)), ["first", "second", "third"]);
    }
}

#[test]
fn sorting_leaves_table_and_view_untouched() {
    let table = sortable_table();
    let before = table.clone();
    let view = FilteredView::new(FilterSelection::all_of(&table).apply(&table));

    let sorted = view.sorted_by(SortColumn::Score, true);
    assert_eq!(titles(&sorted), ["beta", "delta", "gamma", "alpha"]);
    assert_eq!(titles(view.rows()), ["beta", "alpha", "delta", "gamma"]);
    assert_eq!(table, before);
}

#[test]
fn sorting_covers_only_the_filtered_rows() {
    let table = sortable_table();
    let mut filters = FilterSelection::all_of(&table);
    filters.sources = vec!["CoinDesk".to_string()];
    let view = FilteredView::new(filters.apply(&table));

    assert_eq!(titles(&view.sorted_by(SortColumn::Title, true)), ["delta", "alpha"]);
}
