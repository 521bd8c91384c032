//! JSON output for scraped tender pages.
//!
//! # Output Structure
//!
//! Files are grouped by the local date of the run, one file per tender:
//! ```text
//! json_output_dir/
//! └── 2024-01-16/
//!     ├── tdr-2024-001.json
//!     └── tdr-2024-002.json
//! ```

use crate::error::{Error, Result};
use crate::models::TenderDetailPage;
use crate::utils::slugify;
use chrono::Local;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{error, info, instrument, warn};

/// Serialize a page, optionally pretty-printed.
pub fn to_json(page: &TenderDetailPage, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(page)?
    } else {
        serde_json::to_string(page)?
    };
    Ok(json)
}

/// File name for a page, derived from its TDR; `tender.json` if that is blank.
pub fn page_file_name(page: &TenderDetailPage) -> String {
    numbered_file_name(&page_slug(page), 1)
}

fn page_slug(page: &TenderDetailPage) -> String {
    let slug = slugify(page.notice.tdr.trim());
    if slug.is_empty() {
        "tender".to_string()
    } else {
        slug
    }
}

/// `{slug}.json` for the first candidate, `{slug}-{n}.json` after that.
fn numbered_file_name(slug: &str, n: usize) -> String {
    if n <= 1 {
        format!("{slug}.json")
    } else {
        format!("{slug}-{n}.json")
    }
}

/// Upper bound on `-{n}` suffixes tried for one slug.
const MAX_NAME_SUFFIX: usize = 1000;

/// Write a [`TenderDetailPage`] to its own JSON file in a date-based directory.
///
/// Existing files are never overwritten. When the name derived from the TDR
/// is taken (a blank TDR, two TDRs with the same slug, or an earlier run on
/// the same day), a numeric suffix is appended: `tdr1.json`, `tdr1-2.json`,
/// and so on. Files are created with `create_new`, so pages written
/// concurrently cannot claim the same name.
///
/// # Arguments
///
/// * `page` - The extracted page to serialize
/// * `json_output_dir` - Base directory for JSON output
/// * `pretty` - Pretty-print the JSON
///
/// # Returns
///
/// The path of the written file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the dated directory cannot be created, the file
/// cannot be written, or every suffixed name up to the limit is taken.
///
/// # Output Path
///
/// `{json_output_dir}/{date}/{tdr}.json`, with `{date}` the local date of the run.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_page(
    page: &TenderDetailPage,
    json_output_dir: &str,
    pretty: bool,
) -> Result<PathBuf> {
    let json = to_json(page, pretty)?;

    let full_json_dir = Path::new(json_output_dir).join(Local::now().date_naive().to_string());
    if let Err(e) = fs::create_dir_all(&full_json_dir).await {
        error!(dir = %full_json_dir.display(), error = %e, "Failed to create JSON dir");
        return Err(Error::io(full_json_dir, e));
    }

    let (path, mut file) = create_unique(&full_json_dir, &page_slug(page)).await?;
    file.write_all(json.as_bytes())
        .await
        .map_err(|e| Error::io(&path, e))?;
    file.flush().await.map_err(|e| Error::io(&path, e))?;
    info!(path = %path.display(), "Wrote tender JSON");

    Ok(path)
}

/// Create the first free `{slug}[-n].json` in `dir`.
async fn create_unique(dir: &Path, slug: &str) -> Result<(PathBuf, fs::File)> {
    for n in 1..=MAX_NAME_SUFFIX {
        let path = dir.join(numbered_file_name(slug, n));
        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => {
                if n > 1 {
                    warn!(path = %path.display(), "JSON name already taken; using suffixed name");
                }
                return Ok((path, file));
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(Error::io(path, e)),
        }
    }

    let path = dir.join(numbered_file_name(slug, 1));
    Err(Error::io(
        path,
        std::io::Error::new(
            ErrorKind::AlreadyExists,
            format!("no free file name after {MAX_NAME_SUFFIX} attempts"),
        ),
    ))
}
