use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use news_core::{NewsClient, NewsConfig, ParseOutcome, SearchRequest};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Query a Guardian-style news-search API and print the matching articles.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Full-text search query
    #[arg(short, long)]
    query: Option<String>,

    /// Restrict results to one section
    #[arg(long)]
    section: Option<String>,

    /// Sort order understood by the API (newest, oldest, relevance)
    #[arg(long)]
    order_by: Option<String>,

    /// Number of results to ask for
    #[arg(long)]
    page_size: Option<u32>,

    /// API key; the public "test" key works for light use
    #[arg(long, env = "GUARDIAN_API_KEY", default_value = "test")]
    api_key: String,

    /// Fetch this exact URL instead of building one from the flags above
    #[arg(long)]
    url: Option<String>,

    /// Path to a config JSON file (defaults to <config-dir>/newsdesk/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print records as JSON instead of text lines
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Cli::parse();
    let config = load_config(args.config.as_deref());

    let client = NewsClient::new(config).expect("failed to build HTTP client");

    let result = match &args.url {
        Some(url) => client.fetch_news_data(url).await,
        None => {
            let request = SearchRequest {
                query: args.query.clone(),
                section: args.section.clone(),
                order_by: args.order_by.clone(),
                page_size: args.page_size,
                api_key: args.api_key.clone(),
                ..SearchRequest::default()
            };
            client.search(&request).await
        }
    };

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(err) => {
            error!(error = %err, "fetch failed");
            return ExitCode::FAILURE;
        }
    };

    match &outcome {
        ParseOutcome::NoDocument => info!("server sent no document"),
        ParseOutcome::Degraded { fallbacks, .. } => {
            warn!(fallbacks, "some articles are missing author information");
        }
        ParseOutcome::Aborted { error, .. } => {
            warn!(error = %error, "response was cut short, showing what was usable");
        }
        ParseOutcome::Complete(_) => {}
    }

    let records = outcome.into_records();
    if args.json {
        match serde_json::to_string_pretty(&records) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => {
                error!(error = %err, "failed to render records as JSON");
                return ExitCode::FAILURE;
            }
        }
    } else if records.is_empty() {
        println!("no articles");
    } else {
        for record in &records {
            println!("{}", record.title);
            println!("  {}", record.details);
            println!("  {}  {}", record.published_at, record.url);
        }
    }

    ExitCode::SUCCESS
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn config_dir() -> PathBuf {
    // Linux: ~/.config/newsdesk
    let mut dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    dir.push("newsdesk");
    dir
}

fn load_config(path: Option<&Path>) -> NewsConfig {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let mut default = config_dir();
            default.push("config.json");
            default
        }
    };

    if !path.exists() {
        return NewsConfig::default();
    }
    match NewsConfig::from_file(&path) {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, path = %path.display(), "could not load config, using defaults");
            NewsConfig::default()
        }
    }
}
