//! Extractors for the five section tables of a tender detail page.
//!
//! Notice, key dates and contact information are label/value tables: a title
//! row, then one row per field with the label in cell 0 and the value in
//! cell 1. Their fields are bound purely by row position, in the order of the
//! `*_FIELDS` lists below; the labels are only used for logs and errors.

use crate::error::{Section, StructureError};
use crate::models::{
    TenderContactInformation, TenderFreeTextDetails, TenderKeyDates, TenderNotice,
    TenderOtherDetail,
};
use crate::scrapers::files::extract_files;
use crate::tree::TreeNode;
use tracing::{debug, instrument};

/// Notice rows 1..=13, in order.
pub const NOTICE_FIELDS: [&str; 13] = [
    "TDR",
    "Tendering Authority",
    "Tender No",
    "Tender ID",
    "Tender Brief",
    "City",
    "State",
    "Document Fees",
    "EMD",
    "Tender Value",
    "Tender Type",
    "Bidding Type",
    "Competition Type",
];

/// Key dates rows 1..=3, in order.
pub const KEY_DATE_FIELDS: [&str; 3] = [
    "Publish Date",
    "Last Date of Bid Submission",
    "Tender Opening Date",
];

/// Contact information rows 1..=3, in order.
pub const CONTACT_FIELDS: [&str; 3] = ["Company Name", "Contact Person", "Address"];

const INFORMATION_SOURCE_FIELD: &str = "Information Source";

/// Column holding the value in a label/value row.
const VALUE_CELL: usize = 1;

/// Read the notice table (title row + 13 field rows).
#[instrument(level = "debug", skip_all)]
pub fn extract_notice<N: TreeNode>(table: N) -> Result<TenderNotice, StructureError> {
    let [
        tdr,
        tendering_authority,
        tender_no,
        tender_id,
        tender_brief,
        city,
        state,
        document_fees,
        emd,
        tender_value,
        tender_type,
        bidding_type,
        competition_type,
    ] = field_values(table, Section::Notice, &NOTICE_FIELDS)?;

    Ok(TenderNotice {
        tdr,
        tendering_authority,
        tender_no,
        tender_id,
        tender_brief,
        city,
        state,
        document_fees,
        emd,
        tender_value,
        tender_type,
        bidding_type,
        competition_type,
    })
}

/// Read the free-text details: the text of the first paragraph in the table.
#[instrument(level = "debug", skip_all)]
pub fn extract_details<N: TreeNode>(table: N) -> Result<TenderFreeTextDetails, StructureError> {
    let paragraph = table
        .find_first("p")
        .ok_or(StructureError::MissingParagraph {
            section: Section::Details,
        })?;
    let tender_details = paragraph.text_content();
    debug!(bytes = tender_details.len(), "Read tender details paragraph");
    Ok(TenderFreeTextDetails { tender_details })
}

/// Read the key dates table (title row + 3 field rows).
#[instrument(level = "debug", skip_all)]
pub fn extract_key_dates<N: TreeNode>(table: N) -> Result<TenderKeyDates, StructureError> {
    let [publish_date, last_date_of_bid_submission, tender_opening_date] =
        field_values(table, Section::KeyDates, &KEY_DATE_FIELDS)?;
    Ok(TenderKeyDates {
        publish_date,
        last_date_of_bid_submission,
        tender_opening_date,
    })
}

/// Read the contact information table (title row + 3 field rows).
#[instrument(level = "debug", skip_all)]
pub fn extract_contact_information<N: TreeNode>(
    table: N,
) -> Result<TenderContactInformation, StructureError> {
    let [company_name, contact_person, address] =
        field_values(table, Section::Contact, &CONTACT_FIELDS)?;
    Ok(TenderContactInformation {
        company_name,
        contact_person,
        address,
    })
}

/// Read the "other detail" table.
///
/// Exactly four rows of its own (nested rows do not count): title,
/// information source, the attachments sub-table, and a trailing spacer.
#[instrument(level = "debug", skip_all)]
pub fn extract_other_detail<N: TreeNode>(table: N) -> Result<TenderOtherDetail, StructureError> {
    let rows = table.table_rows();
    let &[_title, source_row, files_row, _spacer] = rows.as_slice() else {
        return Err(StructureError::RowCount {
            section: Section::Other,
            found: rows.len(),
            expected: 4,
        });
    };

    let information_source = value_cell(source_row, Section::Other, 1, INFORMATION_SOURCE_FIELD)?;
    let files = extract_files(files_row)?;

    Ok(TenderOtherDetail {
        information_source,
        files,
    })
}

/// Values of a label/value table, one per entry of `fields`.
///
/// The table must have exactly one title row plus one row per field.
fn field_values<N: TreeNode, const F: usize>(
    table: N,
    section: Section,
    fields: &[&'static str; F],
) -> Result<[String; F], StructureError> {
    let rows: Vec<N> = table.descendants_by_tag("tr").collect();
    if rows.len() != F + 1 {
        return Err(StructureError::RowCount {
            section,
            found: rows.len(),
            expected: F + 1,
        });
    }

    let mut values: [String; F] = std::array::from_fn(|_| String::new());
    for (i, (value, (&row, &field))) in values
        .iter_mut()
        .zip(rows[1..].iter().zip(fields))
        .enumerate()
    {
        *value = value_cell(row, section, i + 1, field)?;
    }
    debug!(%section, fields = F, "Read label/value table");
    Ok(values)
}

/// Raw text of the value cell of one label/value row.
fn value_cell<N: TreeNode>(
    row: N,
    section: Section,
    index: usize,
    field: &'static str,
) -> Result<String, StructureError> {
    let cells: Vec<N> = row.descendants_by_tag("td").collect();
    cells
        .get(VALUE_CELL)
        .map(|cell| cell.text_content())
        .ok_or_else(|| StructureError::MissingCell {
            section,
            row: index,
            field,
            found: cells.len(),
            expected: VALUE_CELL + 1,
        })
}
