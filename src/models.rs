//! Data models for a scraped tender detail page.
//!
//! Every record is built once by its extractor from the page tree and never
//! updated afterwards. All text fields hold raw cell text exactly as the parser
//! produced it: no trimming, no date or number parsing.
//!
//! - [`TenderDetailPage`]: the aggregate returned for one page
//! - [`TenderNotice`], [`TenderFreeTextDetails`], [`TenderKeyDates`],
//!   [`TenderContactInformation`], [`TenderOtherDetail`]: one per section table
//! - [`TenderFile`]: one attachment row of the files sub-table

use serde::{Deserialize, Serialize};
use url::Url;

/// Everything extracted from one tender detail page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TenderDetailPage {
    pub notice: TenderNotice,
    pub details: TenderFreeTextDetails,
    pub key_dates: TenderKeyDates,
    pub contact_information: TenderContactInformation,
    pub other_detail: TenderOtherDetail,
}

/// The tender notice table: 13 label/value rows below a title row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TenderNotice {
    /// Reference identifier assigned by the listing service.
    pub tdr: String,
    pub tendering_authority: String,
    pub tender_no: String,
    pub tender_id: String,
    pub tender_brief: String,
    pub city: String,
    pub state: String,
    pub document_fees: String,
    /// Earnest Money Deposit, kept as opaque text.
    pub emd: String,
    pub tender_value: String,
    pub tender_type: String,
    pub bidding_type: String,
    pub competition_type: String,
}

/// Free-text description of the tender.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TenderFreeTextDetails {
    pub tender_details: String,
}

/// Key dates, as printed on the page.
///
/// The source does not guarantee a date format, so these stay strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TenderKeyDates {
    pub publish_date: String,
    pub last_date_of_bid_submission: String,
    pub tender_opening_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TenderContactInformation {
    pub company_name: String,
    pub contact_person: String,
    pub address: String,
}

/// An attached tender document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TenderFile {
    pub file_name: String,
    /// Link target exactly as found in the page; may be relative.
    pub file_url: String,
    /// File type / description label.
    pub file_description: String,
    /// Size label, e.g. `"1.2 MB"`.
    pub file_size: String,
}

impl TenderFile {
    /// Resolve [`TenderFile::file_url`] against `base`.
    ///
    /// Absolute links come back unchanged; relative ones are joined onto `base`.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let base = Url::parse("https://www.tenderdetail.com/tender/1")?;
    /// // "/docs/a.pdf" -> "https://www.tenderdetail.com/docs/a.pdf"
    /// let url = file.resolve_url(&base)?;
    /// ```
    pub fn resolve_url(&self, base: &Url) -> Result<Url, url::ParseError> {
        base.join(&self.file_url)
    }
}

/// The "other detail" table: information source and attachments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TenderOtherDetail {
    pub information_source: String,
    /// Attachments in source row order.
    pub files: Vec<TenderFile>,
}

impl TenderOtherDetail {
    /// Copies of [`TenderOtherDetail::files`] with every `file_url` made absolute.
    ///
    /// Fails on the first link that cannot be joined; the record itself is left
    /// untouched.
    pub fn resolved_files(&self, base: &Url) -> Result<Vec<TenderFile>, url::ParseError> {
        self.files
            .iter()
            .map(|file| {
                Ok(TenderFile {
                    file_url: file.resolve_url(base)?.to_string(),
                    ..file.clone()
                })
            })
            .collect()
    }
}
