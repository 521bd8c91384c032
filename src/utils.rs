//! Small helpers for logging, file naming and source handling.

use crate::error::{Error, Result};
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Truncate a string for logging purposes.
///
/// Long strings are cut at the last character boundary at or before `max`
/// bytes, with an ellipsis and the number of dropped bytes appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let cut = (0..=max).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0);
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Convert an identifier to a filesystem-friendly slug.
///
/// Lowercases, drops everything except alphanumerics, spaces and hyphens, and
/// turns spaces into hyphens.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(slugify("TDR-2024-001"), "tdr-2024-001");
/// assert_eq!(slugify("MC/2024 17"), "mc2024-17");
/// ```
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .replace(|c: char| !c.is_alphanumeric() && c != ' ' && c != '-', "")
        .replace(' ', "-")
}

/// Whether `source` should be fetched over HTTP rather than read from disk.
pub fn is_remote_source(source: &str) -> bool {
    let lower = source.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then writes and removes a probe file.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .map_err(|e| Error::io(path, e))?;

    let probe_path = Path::new(path).join("..__probe_write__");
    stdfs::File::create(&probe_path).map_err(|e| Error::io(&probe_path, e))?;
    let _ = stdfs::remove_file(&probe_path);
    info!("Output directory is writable");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_multibyte() {
        // '₹' is three bytes; cutting at 2 must back off to 1
        let result = truncate_for_log("a₹b", 2);
        assert_eq!(result, "a…(+4 bytes)");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("TDR-2024-001"), "tdr-2024-001");
        assert_eq!(slugify("MC/2024 17"), "mc2024-17");
        assert_eq!(slugify("  Ward 12  "), "--ward-12--");
    }

    #[test]
    fn test_is_remote_source() {
        assert!(is_remote_source("https://www.tenderdetail.com/tender/1"));
        assert!(is_remote_source("HTTP://example.org"));
        assert!(!is_remote_source("./pages/tender.html"));
        assert!(!is_remote_source("/tmp/https.html"));
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_directory() {
        let dir = std::env::temp_dir().join(format!("tender_scrape_utils_{}", std::process::id()));
        let dir_str = dir.to_string_lossy().to_string();

        ensure_writable_dir(&dir_str).await.unwrap();
        assert!(dir.is_dir());
        assert!(!dir.join("..__probe_write__").exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
