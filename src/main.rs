//! # Tender Scrape CLI
//!
//! Scrapes tender detail pages (URLs or saved HTML files) into JSON.
//!
//! ## Usage
//!
//! ```sh
//! tender_scrape -j ./json https://www.tenderdetail.com/Indian-Tenders/TenderNotice/47136136
//! ```
//!
//! ## Pipeline
//!
//! 1. **Digest** (optional): log the listing link found in a digest email
//! 2. **Fetching**: load every source, several in parallel
//! 3. **Extraction**: turn each page into a `TenderDetailPage`
//! 4. **Output**: write one JSON file per page, or print to stdout
//!
//! Logs, including the digest link, go to stderr; stdout only ever carries
//! page JSON, one document per line unless `--pretty` is given.
//!
//! A page that fails to load or does not match the layout is logged and
//! skipped; the run exits with an error if any page failed.

use clap::Parser;
use futures::stream::{self, StreamExt};
use itertools::Itertools;
use reqwest::Client;
use std::error::Error;
use std::time::{Duration, Instant};
use tender_scrape::fetch::build_client;
use tender_scrape::outputs::json;
use tender_scrape::scrapers::digest::find_listing_link;
use tender_scrape::utils::ensure_writable_dir;
use tender_scrape::{TenderDetailPage, TenderOtherDetail, scrape_source};
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};
use url::Url;

mod cli;

use cli::Cli;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = Instant::now();
    info!("tender_scrape starting up");

    let args = Cli::parse();
    debug!(?args.sources, ?args.json_output_dir, "Parsed CLI arguments");

    // ---- Digest link ----
    if let Some(ref digest) = args.digest {
        let html = tokio::fs::read_to_string(digest)
            .await
            .map_err(|e| tender_scrape::Error::io(digest, e))?;
        // Logged, not printed: stdout carries only page JSON.
        if let Some(link) = find_listing_link(&html) {
            info!(path = %digest, %link, "Digest listing link");
        }
    }

    if args.sources.is_empty() {
        if args.digest.is_none() {
            warn!("No tender pages given; nothing to do");
        }
        return Ok(());
    }

    // Early check: ensure JSON output dir is writable
    if let Some(ref dir) = args.json_output_dir {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(
                path = %dir,
                error = %e,
                "JSON output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e.into());
        }
    }

    let base_url = Url::parse(&args.base_url)?;
    let client = build_client(Duration::from_secs(args.timeout_secs))?;

    // ---- Scrape pages in parallel ----
    let sources: Vec<String> = args.sources.iter().unique().cloned().collect();
    let total = sources.len();
    info!(total, concurrency = args.concurrency, "Scraping tender pages");

    let (client, args_ref, base_ref) = (&client, &args, &base_url);
    let outcomes: Vec<bool> = stream::iter(sources)
        .map(|source| async move {
            match process_source(client, &source, args_ref, base_ref).await {
                Ok(()) => true,
                Err(e) => {
                    error!(%source, error = %e, "Failed to scrape tender page; skipping");
                    false
                }
            }
        })
        .buffer_unordered(args.concurrency.max(1))
        .collect()
        .await;

    let successful = outcomes.iter().filter(|ok| **ok).count();
    let failed = total - successful;

    let elapsed = start_time.elapsed();
    info!(
        total,
        successful,
        failed,
        ?elapsed,
        "Execution complete"
    );

    if failed > 0 {
        return Err(format!("{failed} of {total} tender pages failed").into());
    }
    Ok(())
}

/// Scrape one source and emit its JSON.
#[instrument(level = "info", skip(client, args, base_url))]
async fn process_source(
    client: &Client,
    source: &str,
    args: &Cli,
    base_url: &Url,
) -> tender_scrape::Result<()> {
    let mut page = scrape_source(client, source).await?;

    if args.resolve_links {
        let files = page.other_detail.resolved_files(base_url)?;
        page = TenderDetailPage {
            other_detail: TenderOtherDetail {
                files,
                ..page.other_detail
            },
            ..page
        };
    }

    match args.json_output_dir {
        Some(ref dir) => {
            json::write_page(&page, dir, args.pretty).await?;
        }
        None => println!("{}", json::to_json(&page, args.pretty)?),
    }
    Ok(())
}
