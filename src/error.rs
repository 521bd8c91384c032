//! Error types for tender scraping.
//!
//! The extraction core only ever fails with [`StructureError`]: the page did
//! not have the shape the scraper expects. Everything around the core (fetching,
//! file output, URL resolution) is wrapped into the crate-level [`Error`].

use std::fmt;
use std::path::PathBuf;

/// One of the five positional tables inside the tender-detail container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Notice,
    Details,
    KeyDates,
    Contact,
    Other,
}

impl Section {
    pub fn name(self) -> &'static str {
        match self {
            Section::Notice => "notice",
            Section::Details => "details",
            Section::KeyDates => "key dates",
            Section::Contact => "contact information",
            Section::Other => "other detail",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The page does not match the fixed row/column layout.
///
/// Every variant names the expectation that was violated. There is no
/// recovery: the first violation aborts the whole page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    #[error("container `{tag}.{class}` not found")]
    ContainerNotFound {
        tag: &'static str,
        class: &'static str,
    },

    #[error("container has {found} tables, expected {expected}")]
    TableCount { found: usize, expected: usize },

    #[error("{section} table has {found} rows, expected {expected}")]
    RowCount {
        section: Section,
        found: usize,
        expected: usize,
    },

    #[error("{section} table row {row} ({field}) has {found} cells, expected at least {expected}")]
    MissingCell {
        section: Section,
        row: usize,
        field: &'static str,
        found: usize,
        expected: usize,
    },

    #[error("{section} table has no paragraph")]
    MissingParagraph { section: Section },

    #[error("files sub-table has no header row")]
    MissingFilesHeader,

    #[error("files sub-table row {row} has no link")]
    MissingLink { row: usize },

    #[error("files sub-table row {row} has {found} cells, expected at least {expected}")]
    FileCells {
        row: usize,
        found: usize,
        expected: usize,
    },
}

/// Crate-level error for the pipeline and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The page layout did not match.
    #[error("structure error: {0}")]
    Structure(#[from] StructureError),

    /// Fetching a page failed (transport or non-success status).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("url error: {0}")]
    Url(#[from] url::ParseError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
