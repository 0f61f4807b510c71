//! RichLinks demo entry point
//!
//! A command-line stand-in for the demo app's scrollable card list: fetches
//! preview metadata for a list of URLs concurrently and prints one text card
//! per link.

use anyhow::Result;
use clap::Parser;
use richlinks::{fetch_metadata, FetcherConfig, LinkMetadata, LinkResult, ReqwestFetcher};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// RichLinks: link previews on the command line
///
/// Fetches each URL, extracts its title, Open Graph description and image,
/// and prints a preview card. Without arguments a built-in sample list is
/// used: an invalid link, a page with full OG tags, and a page without an
/// image.
#[derive(Parser, Debug)]
#[command(name = "richlinks")]
#[command(version = "1.0.0")]
#[command(about = "Link previews on the command line", long_about = None)]
struct Cli {
    /// URLs to preview (defaults to the built-in sample list)
    #[arg(value_name = "URL")]
    urls: Vec<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Sample links matching the original demo list: one that cannot resolve,
/// one with full OG tags, one without an OG image.
const SAMPLE_LINKS: &[&str] = &[
    "https://not-valid-url",
    "https://m3.material.io/blog/material-3-compose-stable",
    "https://expatexplore.com/blog/when-to-travel-weather-seasons/",
];

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let urls: Vec<String> = if cli.urls.is_empty() {
        SAMPLE_LINKS.iter().map(|s| s.to_string()).collect()
    } else {
        cli.urls.clone()
    };

    let config = FetcherConfig {
        timeout: Duration::from_secs(cli.timeout),
        ..FetcherConfig::default()
    };
    let fetcher = Arc::new(ReqwestFetcher::new(&config)?);

    // One independent task per link, results printed in list order
    let mut handles = Vec::with_capacity(urls.len());
    for url in urls {
        let fetcher = Arc::clone(&fetcher);
        handles.push(tokio::spawn(async move {
            let result = fetch_metadata(fetcher.as_ref(), &url).await;
            (url, result)
        }));
    }

    for handle in handles {
        let (url, result) = handle.await?;
        print_card(&url, &result);
    }

    Ok(())
}

/// Prints one preview card, mirroring the three visual states of the demo UI
fn print_card(url: &str, result: &LinkResult) {
    match result {
        LinkResult::Success(metadata) => print_success_card(metadata),
        // Error detail stays in the logs; the card only says the link is bad
        LinkResult::Failure(_) => {
            println!("✗ {url}");
            println!("  link is invalid or unavailable");
        }
        LinkResult::Loading => unreachable!("fetch_metadata never resolves to Loading"),
    }
    println!();
}

fn print_success_card(metadata: &LinkMetadata) {
    println!("── {} ──", metadata.host);
    println!("  {}", metadata.title.as_deref().unwrap_or("Untitled"));
    if let Some(description) = &metadata.description {
        println!("  {description}");
    }
    if let Some(image_url) = &metadata.image_url {
        println!("  image: {image_url}");
    }
    println!("  {}", metadata.url);
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("richlinks=info,warn"),
            1 => EnvFilter::new("richlinks=debug,info"),
            2 => EnvFilter::new("richlinks=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
