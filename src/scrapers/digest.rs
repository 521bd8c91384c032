//! Daily digest email.
//!
//! The listing site mails a digest whose body links to the full tender listing
//! through a "Click Here To View All" anchor. Other links in the mail (logos,
//! unsubscribe, single tenders) are ignored.

use scraper::{Html, Selector};
use tracing::{error, info, instrument, warn};

/// Anchor text of the link to the full listing.
pub const LISTING_LINK_TEXT: &str = "Click Here To View All";

/// Anchors that actually carry a link target.
const LINK_SELECTOR: &str = "a[href]";

/// `href` of the first linked anchor whose text contains [`LISTING_LINK_TEXT`].
///
/// Anchors without an `href` are skipped, so a bare "Click Here To View All"
/// label does not hide a real link further down.
#[instrument(level = "info", skip_all)]
pub fn find_listing_link(html: &str) -> Option<String> {
    let selector = match Selector::parse(LINK_SELECTOR) {
        Ok(selector) => selector,
        Err(e) => {
            error!(selector = LINK_SELECTOR, error = %e, "Invalid link selector");
            return None;
        }
    };

    let document = Html::parse_document(html);
    let link = document
        .select(&selector)
        .find(|anchor| anchor.text().collect::<String>().contains(LISTING_LINK_TEXT))
        .and_then(|anchor| anchor.value().attr("href").map(str::to_string));

    match &link {
        Some(href) => info!(%href, "Found listing link in digest"),
        None => warn!("No listing link in digest"),
    }
    link
}
