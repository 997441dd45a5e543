//! Robots-Finder main entry point
//!
//! This is the command-line interface for the robots.txt finder.

use anyhow::Context;
use clap::Parser;
use robots_finder::config::{load_config, validate, Config, Overrides};
use robots_finder::crawler::Crawler;
use robots_finder::output::{confirm, write_crawl_totals, write_results, write_robots_contents};
use robots_finder::resolve::{build_seeds, parse_ip, resolve_ip_to_hostnames};
use robots_finder::url::DomainScope;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Robots-Finder: find robots.txt files on websites and IP addresses
///
/// Crawls the target and its subdomains up to the given depth and probes every
/// host it reaches for a robots.txt file.
#[derive(Parser, Debug)]
#[command(name = "robots-finder")]
#[command(version = "1.0.0")]
#[command(about = "Find robots.txt files on websites and IP addresses", long_about = None)]
struct Cli {
    /// Target website or IP address
    #[arg(value_name = "TARGET")]
    target: String,

    /// Maximum crawl depth [default: 2]
    #[arg(short, long)]
    depth: Option<u32>,

    /// Request timeout in seconds [default: 10]
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Maximum number of concurrent workers [default: 10]
    #[arg(short = 'm', long, visible_alias = "max-threads")]
    max_workers: Option<usize>,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose output (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error log output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print robots.txt contents without asking
    #[arg(short, long, conflicts_with = "no_prompt")]
    yes: bool,

    /// Never ask to print robots.txt contents
    #[arg(long)]
    no_prompt: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = load_effective_config(&cli)?;

    println!("Starting robots.txt finder for: {}", cli.target);

    tokio::select! {
        result = run(&cli, &config) => result,
        _ = tokio::signal::ctrl_c() => {
            println!("\nOperation cancelled by user.");
            std::process::exit(1);
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("robots_finder=info,warn"),
            1 => EnvFilter::new("robots_finder=debug,info"),
            _ => EnvFilter::new("robots_finder=trace,debug"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the optional config file and applies command-line overrides
fn load_effective_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        None => Config::default(),
    };

    config.apply(&Overrides {
        max_depth: cli.depth,
        timeout_secs: cli.timeout,
        max_workers: cli.max_workers,
    });
    validate(&config)?;

    Ok(config)
}

/// Resolves seeds, runs the crawl and presents the results
async fn run(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let hostnames = match parse_ip(&cli.target) {
        Some(ip) => {
            println!("Target is an IP address: {}", ip);
            let hostnames = resolve_ip_to_hostnames(ip).await;
            if hostnames.is_empty() {
                println!("No hostnames found for IP {}, using IP directly", ip);
            } else {
                println!("Found hostnames for IP {}: {}", ip, hostnames.join(", "));
            }
            hostnames
        }
        None => Vec::new(),
    };

    let seeds = build_seeds(&cli.target, &hostnames)
        .with_context(|| format!("invalid target '{}'", cli.target))?;
    let scope = seeds
        .first()
        .and_then(DomainScope::from_seed)
        .context("target has no host")?;

    let crawler = Crawler::new(config, scope)?;
    let report = crawler.run(&seeds).await;

    let mut stdout = std::io::stdout();
    write_results(&mut stdout, &report)?;

    if !report.robots_found.is_empty() && !cli.no_prompt {
        let show = if cli.yes {
            true
        } else {
            let mut stdin = tokio::io::BufReader::new(tokio::io::stdin());
            confirm(
                &mut stdout,
                &mut stdin,
                "Would you like to see the content of these robots.txt files?",
            )
            .await?
        };

        if show {
            write_robots_contents(
                &mut stdout,
                crawler.client(),
                &report.robots_found,
                config.crawler.timeout(),
            )
            .await?;
        }
    }

    write_crawl_totals(&mut stdout, &report)?;
    stdout.flush()?;

    Ok(())
}
