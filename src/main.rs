//! Interactive terminal dashboard for keyword news sentiment.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use news_sentiment::dashboard::EXPORT_FILE_NAME;
use news_sentiment::news::{DEFAULT_DAYS, DEFAULT_MAX_PAGES};
use news_sentiment::{FetchRequest, NewsClient};
use tracing_subscriber::EnvFilter;
use url::Url;

mod app;

#[derive(Parser)]
#[command(name = "news-sentiment")]
#[command(about = "Fetch recent news for a keyword and explore headline sentiment")]
#[command(version)]
struct Cli {
    /// News API key
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Search keyword
    #[arg(short, long, default_value = "crypto")]
    query: String,

    /// How many days of news to keep (1-7)
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_DAYS,
        value_parser = clap::value_parser!(u32).range(1..=7)
    )]
    days: u32,

    /// Page budget per fetch (the provider allows at most two pages)
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    pages: u32,

    /// Override the news API base URL
    #[arg(long, env = "NEWS_API_BASE_URL")]
    base_url: Option<Url>,

    /// Overall request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Where the JSON export is written
    #[arg(long, default_value = EXPORT_FILE_NAME)]
    export_path: PathBuf,

    /// Fetch immediately instead of waiting for the menu
    #[arg(long)]
    fetch: bool,
}

fn main() -> ExitCode {
    // Load environment variables
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut builder = NewsClient::builder().api_key(cli.api_key.unwrap_or_default());
    if let Some(base) = cli.base_url {
        builder = builder.base_news(base);
    }
    if let Some(secs) = cli.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build().context("failed to configure the news client")?;

    let request = FetchRequest {
        query: cli.query,
        days: cli.days,
        max_pages: cli.pages,
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    runtime.block_on(app::App::new(client, request, cli.export_path).run(cli.fetch))
}
