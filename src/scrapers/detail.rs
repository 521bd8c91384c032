//! Tender detail page scraper.
//!
//! A detail page keeps everything inside one `div.tender-details-home`
//! container holding five tables, always in this order:
//!
//! 1. Tender notice
//! 2. Tender details (free text)
//! 3. Key dates
//! 4. Contact information
//! 5. Other detail (information source + attachments)
//!
//! The pipeline is locate -> segment -> extract each section -> assemble, and
//! stops at the first layout violation.

use crate::error::StructureError;
use crate::models::TenderDetailPage;
use crate::scrapers::sections::{
    extract_contact_information, extract_details, extract_key_dates, extract_notice,
    extract_other_detail,
};
use crate::tree::TreeNode;
use tracing::{debug, info, instrument};

pub const CONTAINER_TAG: &str = "div";
pub const CONTAINER_CLASS: &str = "tender-details-home";

/// Number of direct child tables in the container.
pub const SECTION_TABLES: usize = 5;

/// The container's tables bound to their roles by position.
#[derive(Debug, Clone, Copy)]
pub struct SectionTables<N> {
    pub notice: N,
    pub details: N,
    pub key_dates: N,
    pub contact: N,
    pub other: N,
}

/// Find the tender-detail container under (or at) `root`.
pub fn locate_container<N: TreeNode>(root: N) -> Result<N, StructureError> {
    std::iter::once(root)
        .chain(root.element_descendants())
        .find(|node| node.tag_name() == CONTAINER_TAG && node.has_class(CONTAINER_CLASS))
        .ok_or(StructureError::ContainerNotFound {
            tag: CONTAINER_TAG,
            class: CONTAINER_CLASS,
        })
}

/// Bind the container's direct child tables to their sections.
///
/// Tables nested inside a section are not counted.
pub fn segment_tables<N: TreeNode>(container: N) -> Result<SectionTables<N>, StructureError> {
    let tables: Vec<N> = container.children_by_tag("table").collect();
    debug!(count = tables.len(), "Found container tables");

    match *tables.as_slice() {
        [notice, details, key_dates, contact, other] => Ok(SectionTables {
            notice,
            details,
            key_dates,
            contact,
            other,
        }),
        _ => Err(StructureError::TableCount {
            found: tables.len(),
            expected: SECTION_TABLES,
        }),
    }
}

/// Run every section extractor and combine the results.
pub fn assemble_page<N: TreeNode>(
    tables: SectionTables<N>,
) -> Result<TenderDetailPage, StructureError> {
    Ok(TenderDetailPage {
        notice: extract_notice(tables.notice)?,
        details: extract_details(tables.details)?,
        key_dates: extract_key_dates(tables.key_dates)?,
        contact_information: extract_contact_information(tables.contact)?,
        other_detail: extract_other_detail(tables.other)?,
    })
}

/// Extract a [`TenderDetailPage`] from a parsed document.
///
/// `root` is usually the document's root element. The tree is only read.
#[instrument(level = "info", skip_all)]
pub fn extract_page<N: TreeNode>(root: N) -> Result<TenderDetailPage, StructureError> {
    let container = locate_container(root)?;
    let tables = segment_tables(container)?;
    let page = assemble_page(tables)?;

    info!(
        tdr = %page.notice.tdr,
        files = page.other_detail.files.len(),
        "Extracted tender detail page"
    );
    Ok(page)
}
