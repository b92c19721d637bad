//! The dashboard event loop: read an action, recompute the views it needs, print them.

use std::path::PathBuf;

use anyhow::Result;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect, Select};
use news_sentiment::dashboard::{
    DetailLimit, FilterSelection, HISTOGRAM_BINS, SortColumn, TOP_N, min_score_steps, write_json,
};
use news_sentiment::{Dashboard, FetchRequest, FilteredView, LexiconScorer, NewsClient, render};

const MENU: &[&str] = &[
    "🔍 Fetch news",
    "📋 Filtered results",
    "📈 Top headlines",
    "📰 Article details",
    "🎛  Filter options",
    "📊 Charts",
    "📤 Export JSON",
    "❌ Exit",
];

const CHARTS: &[&str] = &[
    "📶 Bar chart",
    "🥧 Pie chart",
    "🥯 Donut chart",
    "📈 Sentiment over time",
    "🧭 Score distribution",
    "📰 Sentiment by source (heatmap)",
    "← Back",
];

pub struct App {
    client: NewsClient,
    scorer: LexiconScorer,
    dashboard: Dashboard,
    request: FetchRequest,
    export_path: PathBuf,
    /// Column and direction (`true` for descending) of the results table; `None` is table order.
    sort: Option<(SortColumn, bool)>,
    theme: ColorfulTheme,
}

impl App {
    pub fn new(client: NewsClient, request: FetchRequest, export_path: PathBuf) -> Self {
        Self {
            client,
            scorer: LexiconScorer::new(),
            dashboard: Dashboard::new(),
            request,
            export_path,
            sort: None,
            theme: ColorfulTheme::default(),
        }
    }

    pub async fn run(mut self, fetch_first: bool) -> Result<()> {
        println!("{}", style("🧠 Crypto News Sentiment Analyzer").bold());
        println!("Get real-time sentiment from recent news articles.");

        if fetch_first {
            self.fetch(self.request.clone()).await;
        }

        loop {
            println!();
            let choice = Select::with_theme(&self.theme)
                .with_prompt("What would you like to do?")
                .items(MENU)
                .default(0)
                .interact()?;

            match choice {
                0 => {
                    let request = self.prompt_request()?;
                    self.fetch(request).await;
                }
                1 => {
                    self.prompt_sort()?;
                    self.show_results();
                }
                2 => self.show_top(),
                3 => self.show_details()?,
                4 => self.filter_menu()?,
                5 => self.chart_menu()?,
                6 => self.export(),
                _ => break,
            }
        }

        Ok(())
    }

    fn prompt_request(&self) -> Result<FetchRequest> {
        let query: String = Input::with_theme(&self.theme)
            .with_prompt("🔍 Search keyword")
            .default(self.request.query.clone())
            .interact_text()?;

        let days: Vec<String> = (1..=7).map(|d| d.to_string()).collect();
        let default_day = self.request.days.clamp(1, 7) as usize - 1;
        let day_idx = Select::with_theme(&self.theme)
            .with_prompt("🗓️  How many days of news?")
            .items(&days)
            .default(default_day)
            .interact()?;

        Ok(FetchRequest {
            query: query.trim().to_string(),
            days: day_idx as u32 + 1,
            max_pages: self.request.max_pages,
        })
    }

    async fn fetch(&mut self, request: FetchRequest) {
        println!("{}", style("Fetching news...").dim());
        match self
            .dashboard
            .fetch(&self.client, &self.scorer, request.clone())
            .await
        {
            Ok(report) => {
                self.request = request;
                if let Some(warning) = &report.warning {
                    println!("{} {warning}", style("⚠️ News API error:").yellow().bold());
                }
                println!(
                    "{}",
                    style(format!(
                        "Loaded {} articles from {} page(s).",
                        report.rows, report.pages_fetched
                    ))
                    .green()
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "fetch failed");
                println!("{} {e}", style("✗ Fetch failed:").red().bold());
                if self.dashboard.table().is_some() {
                    println!("{}", style("Keeping the previously loaded articles.").dim());
                }
            }
        }
    }

    fn view_or_warn(&self) -> Option<FilteredView<'_>> {
        let view = self.dashboard.view();
        if view.is_none() {
            println!(
                "{}",
                style("⚠️ Please fetch news first to see results.").yellow()
            );
        }
        view
    }

    fn prompt_sort(&mut self) -> Result<()> {
        if self.dashboard.table().is_none() {
            return Ok(());
        }
        let mut items = vec!["Table order".to_string()];
        items.extend(SortColumn::ALL.iter().map(|c| c.to_string()));
        let current = self
            .sort
            .and_then(|(col, _)| SortColumn::ALL.iter().position(|c| *c == col))
            .map_or(0, |i| i + 1);
        let idx = Select::with_theme(&self.theme)
            .with_prompt("Sort by")
            .items(&items)
            .default(current)
            .interact()?;
        if idx == 0 {
            self.sort = None;
            return Ok(());
        }

        let descending = Select::with_theme(&self.theme)
            .with_prompt("Order")
            .items(&["Ascending", "Descending"])
            .default(usize::from(self.sort.is_some_and(|(_, d)| d)))
            .interact()?
            == 1;
        self.sort = Some((SortColumn::ALL[idx - 1], descending));
        Ok(())
    }

    fn show_results(&self) {
        let Some(view) = self.view_or_warn() else {
            return;
        };
        if let Some(warning) = self.dashboard.warning() {
            println!("{} {warning}", style("⚠️ Partial results:").yellow());
        }
        println!(
            "{}",
            style(format!("🔍 Filtered News Results ({} articles)", view.len())).bold()
        );
        let rows = match self.sort {
            Some((column, descending)) => {
                let arrow = if descending { "↓" } else { "↑" };
                println!("{}", style(format!("Sorted by {column} {arrow}")).dim());
                view.sorted_by(column, descending)
            }
            None => view.rows().to_vec(),
        };
        print!("{}", render::results_table(&rows));
    }

    fn show_top(&self) {
        let Some(view) = self.view_or_warn() else {
            return;
        };
        println!("{}", style("📈 Top 3 Bullish Headlines").bold().green());
        print!(
            "{}",
            render::headline_list(&view.top_bullish(TOP_N), "No bullish news found.")
        );
        println!();
        println!("{}", style("📉 Top 3 Bearish Headlines").bold().red());
        print!(
            "{}",
            render::headline_list(&view.top_bearish(TOP_N), "No bearish news found.")
        );
    }

    fn show_details(&self) -> Result<()> {
        let Some(view) = self.view_or_warn() else {
            return Ok(());
        };
        let limit = DetailLimit::for_len(view.len());
        if limit.max == 0 {
            println!("No articles match the current filters.");
            return Ok(());
        }
        let choices: Vec<usize> = (limit.min..=limit.max).collect();
        let idx = Select::with_theme(&self.theme)
            .with_prompt("How many articles to show?")
            .items(&choices)
            .default(limit.default - limit.min)
            .interact()?;

        for row in view.details(choices[idx]) {
            println!();
            print!("{}", render::article_details(row));
        }
        Ok(())
    }

    fn filter_menu(&mut self) -> Result<()> {
        let (Some(table), Some(current)) = (self.dashboard.table(), self.dashboard.filters())
        else {
            println!("{}", style("⚠️ Please fetch news first to filter.").yellow());
            return Ok(());
        };
        let sentiment_options = table.sentiment_options();
        let source_options = table.source_options();
        let mut next: FilterSelection = current.clone();

        let items = [
            "Sentiment type",
            "News sources",
            "Minimum sentiment score",
            "🔄 Reset filters",
            "← Back",
        ];
        let choice = Select::with_theme(&self.theme)
            .with_prompt(format!("🎛  Filters (min score {:.1})", next.min_score))
            .items(&items)
            .default(0)
            .interact()?;

        match choice {
            0 => {
                let checked: Vec<bool> = sentiment_options
                    .iter()
                    .map(|l| next.sentiments.contains(l))
                    .collect();
                let picked = MultiSelect::with_theme(&self.theme)
                    .with_prompt("Sentiment type")
                    .items(&sentiment_options)
                    .defaults(&checked)
                    .interact()?;
                next.sentiments = picked.into_iter().map(|i| sentiment_options[i]).collect();
            }
            1 => {
                let checked: Vec<bool> = source_options
                    .iter()
                    .map(|s| next.sources.contains(s))
                    .collect();
                let picked = MultiSelect::with_theme(&self.theme)
                    .with_prompt("News sources")
                    .items(&source_options)
                    .defaults(&checked)
                    .interact()?;
                next.sources = picked
                    .into_iter()
                    .map(|i| source_options[i].clone())
                    .collect();
            }
            2 => {
                let steps = min_score_steps();
                let labels: Vec<String> = steps.iter().map(|s| format!("{s:.1}")).collect();
                let current_idx = steps
                    .iter()
                    .position(|s| (s - next.min_score).abs() < 1e-9)
                    .unwrap_or(0);
                let idx = Select::with_theme(&self.theme)
                    .with_prompt("Minimum sentiment score")
                    .items(&labels)
                    .default(current_idx)
                    .interact()?;
                next.min_score = steps[idx];
            }
            3 => {
                self.dashboard.reset_filters();
                println!("{}", style("Filters reset.").dim());
                return Ok(());
            }
            _ => return Ok(()),
        }

        self.dashboard.set_filters(next);
        self.show_results();
        Ok(())
    }

    fn chart_menu(&self) -> Result<()> {
        let Some(view) = self.view_or_warn() else {
            return Ok(());
        };
        let choice = Select::with_theme(&self.theme)
            .with_prompt("Choose a chart to display")
            .items(CHARTS)
            .default(0)
            .interact()?;

        let (title, body) = match choice {
            0 => ("📶 Sentiment Distribution", render::bar_chart(&view.counts())),
            1 => ("🥧 Sentiment Share", render::pie_chart(&view.counts())),
            2 => ("🥯 Donut Chart: Sentiment Share", render::donut_chart(&view.counts())),
            3 => (
                "📈 Average Sentiment Score Over Time",
                render::trend_chart(&view.trend()),
            ),
            4 => (
                "📊 Sentiment Score Histogram",
                render::histogram_chart(&view.histogram(HISTOGRAM_BINS)),
            ),
            5 => (
                "📰 Heatmap: Sentiment Count by News Source",
                render::heatmap_chart(&view.heatmap()),
            ),
            _ => return Ok(()),
        };

        println!("{}", style(title).bold());
        if view.is_empty() {
            println!("No articles match the current filters.");
        } else {
            print!("{body}");
        }
        Ok(())
    }

    fn export(&self) {
        let Some(view) = self.view_or_warn() else {
            return;
        };
        let written = view
            .export_json()
            .and_then(|json| write_json(&self.export_path, &json));
        match written {
            Ok(()) => println!(
                "{} {} ({} articles)",
                style("⬇️  Exported").green().bold(),
                self.export_path.display(),
                view.len()
            ),
            Err(e) => println!("{} {e}", style("✗ Export failed:").red().bold()),
        }
    }
}
