//! Attachments sub-table of the "other detail" section.
//!
//! ```text
//! | (link)   | File Name     | Description | Size   |   <- header, skipped
//! | Download | Tender Notice | PDF         | 1.2 MB |
//! | Download | BOQ           | Excel       | 88 KB  |
//! ```
//!
//! The number of data rows varies per tender and may be zero. Link targets are
//! kept exactly as written in the page; resolving relative links is left to the
//! caller (see [`TenderFile::resolve_url`](crate::models::TenderFile::resolve_url)).

use crate::error::StructureError;
use crate::models::TenderFile;
use crate::tree::TreeNode;
use tracing::{debug, instrument};

const NAME_CELL: usize = 1;
const DESCRIPTION_CELL: usize = 2;
const SIZE_CELL: usize = 3;

/// Parse every attachment row found below `row`.
///
/// # Arguments
///
/// * `row` - The row of the "other detail" table that wraps the sub-table.
///   All rows nested inside it are considered; the first is the column header.
///
/// # Returns
///
/// One [`TenderFile`] per data row, in document order. A header with no data
/// rows yields an empty list.
///
/// # Errors
///
/// - [`StructureError::MissingFilesHeader`] if there are no rows at all
/// - [`StructureError::MissingLink`] if a data row has no anchor with `href`
/// - [`StructureError::FileCells`] if a data row has fewer than four cells
///
/// A single malformed data row fails the whole call, so callers never see a
/// partial list.
#[instrument(level = "debug", skip_all)]
pub fn extract_files<N: TreeNode>(row: N) -> Result<Vec<TenderFile>, StructureError> {
    let rows: Vec<N> = row.descendants_by_tag("tr").collect();
    let Some((_header, data_rows)) = rows.split_first() else {
        return Err(StructureError::MissingFilesHeader);
    };

    let files = data_rows
        .iter()
        .enumerate()
        .map(|(i, &file_row)| extract_file(file_row, i + 1))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = files.len(), "Extracted tender files");
    Ok(files)
}

/// One attachment row; `index` is its 1-based position after the header.
fn extract_file<N: TreeNode>(row: N, index: usize) -> Result<TenderFile, StructureError> {
    let file_url = row
        .find_first("a")
        .and_then(|link| link.attribute("href").map(str::to_string))
        .ok_or(StructureError::MissingLink { row: index })?;

    let cells: Vec<N> = row.descendants_by_tag("td").collect();
    if cells.len() <= SIZE_CELL {
        return Err(StructureError::FileCells {
            row: index,
            found: cells.len(),
            expected: SIZE_CELL + 1,
        });
    }

    Ok(TenderFile {
        file_name: cells[NAME_CELL].text_content(),
        file_url,
        file_description: cells[DESCRIPTION_CELL].text_content(),
        file_size: cells[SIZE_CELL].text_content(),
    })
}
