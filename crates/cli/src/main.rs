use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use metior_core::{Config, FetchConfig, Lexicons, analyze_batch, scrape_batch};
use tracing_subscriber::EnvFilter;

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scrape articles and compute lexical/sentiment metrics
#[derive(Parser, Debug)]
#[command(name = "metior")]
#[command(author = "Metior Contributors")]
#[command(version)]
#[command(about = "Scrape articles and compute text metrics", long_about = None)]
struct Args {
    /// Path to the YAML run configuration
    #[arg(short, long, default_value = "config/config.yaml", value_name = "FILE")]
    config: PathBuf,

    /// Print progress to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch every article listed in the store and save its extracted text
    Scrape {
        /// HTTP timeout in seconds
        #[arg(long, default_value = "30", value_name = "SECS")]
        timeout: u64,

        /// Custom User-Agent for HTTP requests
        #[arg(long, value_name = "UA")]
        user_agent: Option<String>,
    },
    /// Compute metrics for every scraped article and update the store
    Analyze,
}

/// Routes tracing output to the log file named in the configuration.
fn init_logging(config: &Config) -> anyhow::Result<()> {
    fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("Failed to create log directory {}", config.log_dir.display()))?;

    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

async fn run_scrape(
    config: &Config, timeout: u64, user_agent: Option<String>, verbose: bool,
) -> anyhow::Result<()> {
    let fetch_config = FetchConfig {
        timeout,
        user_agent: user_agent.unwrap_or_else(|| FetchConfig::default().user_agent),
    };

    if verbose {
        echo::print_step(1, 2, "Fetching articles from store URLs");
    }

    let started = Instant::now();
    let summary = scrape_batch(config, &fetch_config)
        .await
        .context("Scrape batch failed")?;

    if verbose {
        echo::print_step(2, 2, "Writing article files");
        echo::print_timing("Elapsed", started.elapsed());
    }

    if summary.failed > 0 {
        echo::print_warning(&format!("{} of {} URLs failed", summary.failed, summary.total));
    }
    echo::print_success(&format!(
        "Saved {} articles to {}",
        summary.saved,
        config.articles_dir.display()
    ));

    Ok(())
}

fn run_analyze(config: &Config, verbose: bool) -> anyhow::Result<()> {
    if verbose {
        echo::print_step(1, 3, "Loading lexicons");
    }
    let lexicons = Lexicons::load(config).context("Failed to load lexicons")?;
    if verbose {
        echo::print_info(&format!(
            "{} stopwords, {} positive, {} negative",
            lexicons.stopwords.len(),
            lexicons.positive.len(),
            lexicons.negative.len()
        ));
        echo::print_step(2, 3, "Analyzing articles");
    }

    let started = Instant::now();
    let summary = analyze_batch(config, &lexicons).context("Analysis batch failed")?;

    if verbose {
        echo::print_step(3, 3, "Flushing tabular store");
        echo::print_timing("Elapsed", started.elapsed());
    }

    if summary.updated < summary.documents {
        echo::print_warning(&format!(
            "{} of {} documents had no matching store row",
            summary.documents - summary.updated,
            summary.documents
        ));
    }
    echo::print_success(&format!(
        "Analyzed {} documents, updated {} rows in {}",
        summary.documents,
        summary.updated,
        config.store_file.display()
    ));

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        echo::print_banner();
    }

    let config = Config::load(&args.config)
        .with_context(|| format!("Failed to load configuration from {}", args.config.display()))?;
    init_logging(&config)?;
    tracing::info!(config = %args.config.display(), command = ?args.command, "metior starting");

    match args.command {
        Command::Scrape { timeout, user_agent } => {
            run_scrape(&config, timeout, user_agent, args.verbose).await
        }
        Command::Analyze => run_analyze(&config, args.verbose),
    }
}
