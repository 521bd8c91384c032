//! Output generation for scraped tender pages.
//!
//! # Submodules
//!
//! - [`json`]: Writes each `TenderDetailPage` to its own JSON file
//!
//! # Output Structure
//!
//! ```text
//! json_output_dir/
//! └── 2024-01-16/
//!     └── tdr-2024-001.json
//! ```

pub mod json;
