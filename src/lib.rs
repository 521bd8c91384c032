//! # Tender Scrape
//!
//! Extracts structured procurement-tender records from the detail pages of a
//! tender-listing website.
//!
//! A detail page is a stack of nested HTML tables with no ids or field names;
//! values are only identifiable by their table and row position. The scraper
//! binds every field by position and rejects the page outright when the layout
//! deviates, instead of returning a record with silently wrong data.
//!
//! ## Usage
//!
//! ```ignore
//! let html = std::fs::read_to_string("tender.html")?;
//! let page = tender_scrape::extract(&html)?;
//! println!("{} has {} files", page.notice.tdr, page.other_detail.files.len());
//! ```
//!
//! ## Architecture
//!
//! 1. **Locate**: find the `div.tender-details-home` container
//! 2. **Segment**: bind its five direct child tables to their sections
//! 3. **Extract**: parse each section table into its record
//! 4. **Assemble**: combine the records into a [`TenderDetailPage`]
//!
//! Fetching pages ([`fetch`]) and writing results ([`outputs`]) sit around
//! this core; the core itself does no I/O.

pub mod error;
pub mod fetch;
pub mod models;
pub mod outputs;
pub mod scrapers;
pub mod tree;
pub mod utils;

pub use error::{Error, Result, Section, StructureError};
pub use models::{
    TenderContactInformation, TenderDetailPage, TenderFile, TenderFreeTextDetails,
    TenderKeyDates, TenderNotice, TenderOtherDetail,
};
pub use tree::TreeNode;

use reqwest::Client;
use scraper::Html;
use tracing::{debug, instrument};

/// Parse raw markup and extract its [`TenderDetailPage`].
pub fn extract(html: &str) -> std::result::Result<TenderDetailPage, StructureError> {
    let document = Html::parse_document(html);
    scrapers::detail::extract_page(document.root_element())
}

/// Load one source and extract its page.
///
/// # Arguments
///
/// * `client` - HTTP client used when `source` is a URL
/// * `source` - An `http(s)` URL or a path to a saved HTML file
///
/// # Returns
///
/// The extracted [`TenderDetailPage`].
///
/// # Errors
///
/// Returns [`Error::Http`] or [`Error::Io`] if the markup cannot be loaded,
/// and [`Error::Structure`] if it does not match the detail layout. The
/// markup preview of a layout failure is logged at debug level.
#[instrument(level = "info", skip(client))]
pub async fn scrape_source(client: &Client, source: &str) -> Result<TenderDetailPage> {
    let html = fetch::load_source(client, source).await?;
    let page = extract(&html).inspect_err(|e| {
        debug!(
            error = %e,
            preview = %utils::truncate_for_log(&html, 300),
            "Page did not match the detail layout"
        );
    })?;
    Ok(page)
}
