//! Scrapers for the tender-listing site.
//!
//! # Modules
//!
//! | Module | Input | Output |
//! |--------|-------|--------|
//! | [`detail`] | One tender detail page | [`TenderDetailPage`](crate::models::TenderDetailPage) |
//! | [`sections`] | One section table of a detail page | The section's record |
//! | [`files`] | The attachments sub-table | `Vec<TenderFile>` |
//! | [`digest`] | The daily digest email body | Link to the tender listing |
//!
//! The detail page has no ids or names to anchor on; every value is found by
//! its table and row position. Any deviation from the expected layout is
//! reported as a [`StructureError`](crate::error::StructureError) and the page
//! is rejected as a whole.

pub mod detail;
pub mod digest;
pub mod files;
pub mod sections;

#[cfg(test)]
pub(crate) mod fixtures {
    //! HTML builders for the detail page layout.

    use crate::tree::TreeNode;
    use scraper::{ElementRef, Html};

    pub const NOTICE_VALUES: [&str; 13] = [
        "TDR-2024-001",
        "ABC Municipal Corp",
        "MC/2024/17",
        "2024_MC_1001",
        "Road resurfacing works in Ward 12",
        "Pune",
        "Maharashtra",
        "Rs. 1,180",
        "Rs. 50,000",
        "Rs. 25,00,000",
        "Open",
        "Two Bid",
        "Domestic",
    ];

    pub const KEY_DATE_VALUES: [&str; 3] = ["01-Jan-2024", "15-Jan-2024 15:00", "16-Jan-2024 11:00"];

    pub const CONTACT_VALUES: [&str; 3] = [
        "ABC Municipal Corp",
        "Executive Engineer",
        "Shivaji Nagar, Pune 411005",
    ];

    /// First element with `tag` in a parsed document.
    pub fn first<'a>(doc: &'a Html, tag: &str) -> ElementRef<'a> {
        doc.root_element()
            .find_first(tag)
            .unwrap_or_else(|| panic!("fixture has no <{tag}>"))
    }

    /// A title row followed by label/value rows.
    pub fn label_table(title: &str, values: &[&str]) -> String {
        let mut html = format!("<table><tr><td colspan=\"2\">{title}</td></tr>");
        for (i, value) in values.iter().enumerate() {
            html.push_str(&format!("<tr><td>Label {}</td><td>{value}</td></tr>", i + 1));
        }
        html.push_str("</table>");
        html
    }

    pub fn notice_table() -> String {
        label_table("Tender Notice", &NOTICE_VALUES)
    }

    pub fn details_table(text: &str) -> String {
        format!("<table><tr><td>Tender Details</td></tr><tr><td><p>{text}</p></td></tr></table>")
    }

    pub fn key_dates_table() -> String {
        label_table("Key Dates", &KEY_DATE_VALUES)
    }

    pub fn contact_table() -> String {
        label_table("Contact Information", &CONTACT_VALUES)
    }

    /// One attachment row: `[href, name, type, size]`.
    pub fn file_row([href, name, kind, size]: [&str; 4]) -> String {
        format!(
            "<tr><td><a href=\"{href}\">Download</a></td><td>{name}</td><td>{kind}</td><td>{size}</td></tr>"
        )
    }

    /// Header row plus the given attachment rows.
    pub fn files_table(rows: &[String]) -> String {
        let mut html = String::from(
            "<table><tr><th>Link</th><th>File Name</th><th>Description</th><th>Size</th></tr>",
        );
        for row in rows {
            html.push_str(row);
        }
        html.push_str("</table>");
        html
    }

    pub fn other_table(source: &str, files: &str) -> String {
        format!(
            "<table>\
               <tr><td>Other Detail</td></tr>\
               <tr><td>Information Source</td><td>{source}</td></tr>\
               <tr><td colspan=\"2\">{files}</td></tr>\
               <tr><td>&nbsp;</td></tr>\
             </table>"
        )
    }

    pub fn sample_files() -> String {
        files_table(&[
            file_row(["/docs/notice.pdf", "Tender Notice", "PDF", "1.2 MB"]),
            file_row(["https://cdn.example.org/boq.xls", "BOQ", "Excel", "88 KB"]),
        ])
    }

    /// The five section tables in container order.
    pub fn sample_tables() -> Vec<String> {
        vec![
            notice_table(),
            details_table("Resurfacing of arterial roads including drainage works."),
            key_dates_table(),
            contact_table(),
            other_table("Municipal e-Procurement Portal", &sample_files()),
        ]
    }

    pub fn page(tables: &[String]) -> String {
        format!(
            "<html><body><div class=\"container\"><div class=\"tender-details-home\">{}</div></div></body></html>",
            tables.concat()
        )
    }

    pub fn sample_page() -> String {
        page(&sample_tables())
    }
}
