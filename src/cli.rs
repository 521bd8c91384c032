//! Command-line interface definitions for Tender Scrape.
//!
//! All options can be provided via command-line flags, and most via
//! environment variables.

use clap::Parser;

/// Command-line arguments for the Tender Scrape application.
///
/// # Examples
///
/// ```sh
/// # Print one page as JSON
/// tender_scrape https://www.tenderdetail.com/Indian-Tenders/TenderNotice/47136136
///
/// # Scrape saved pages into dated JSON files with absolute file links
/// tender_scrape -j ./json --resolve-links pages/*.html
///
/// # Find the listing link in a digest email
/// tender_scrape --digest digest.html
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Tender detail pages to scrape: http(s) URLs or local HTML files
    pub sources: Vec<String>,

    /// Output directory for JSON files (prints to stdout when omitted)
    #[arg(short, long, env = "TENDER_JSON_OUTPUT_DIR")]
    pub json_output_dir: Option<String>,

    /// Base URL used to resolve relative attachment links
    #[arg(
        short,
        long,
        env = "TENDER_BASE_URL",
        default_value = "https://www.tenderdetail.com"
    )]
    pub base_url: String,

    /// Rewrite attachment links as absolute URLs before output
    #[arg(long)]
    pub resolve_links: bool,

    /// Number of pages processed in parallel
    #[arg(short, long, default_value_t = 4)]
    pub concurrency: usize,

    /// HTTP timeout in seconds
    #[arg(long, env = "TENDER_HTTP_TIMEOUT", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Digest email HTML file to search for the tender listing link
    #[arg(long)]
    pub digest: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["tender_scrape", "page.html"]);

        assert_eq!(cli.sources, ["page.html"]);
        assert_eq!(cli.base_url, "https://www.tenderdetail.com");
        assert_eq!(cli.concurrency, 4);
        assert_eq!(cli.timeout_secs, 30);
        assert!(!cli.resolve_links);
        assert!(!cli.pretty);
        assert!(cli.digest.is_none());
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "tender_scrape",
            "-j",
            "/tmp/json",
            "-b",
            "https://example.org",
            "-c",
            "8",
            "a.html",
            "b.html",
        ]);

        assert_eq!(cli.json_output_dir.as_deref(), Some("/tmp/json"));
        assert_eq!(cli.base_url, "https://example.org");
        assert_eq!(cli.concurrency, 8);
        assert_eq!(cli.sources, ["a.html", "b.html"]);
    }

    #[test]
    fn test_cli_digest_only() {
        let cli = Cli::parse_from(["tender_scrape", "--digest", "mail.html", "--pretty"]);

        assert!(cli.sources.is_empty());
        assert_eq!(cli.digest.as_deref(), Some("mail.html"));
        assert!(cli.pretty);
    }
}
