//! Change-set manifest: the ordered list of changed files driving the tree.
//!
//! The manifest is a JSON array of records as exported from the review
//! page's file listing:
//!
//! ```json
//! [
//!   { "path": "src/app.rs", "href": "#diff-0", "marker": "" },
//!   { "path": "old/gone.rs", "href": "#diff-1", "marker": "file deleted" }
//! ]
//! ```
//!
//! `marker` is the free-form change annotation next to each listing entry.

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::model::entry::{ChangeType, FileEntry};

/// One raw manifest record.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestRecord {
    pub path: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub marker: String,
}

/// Classify a listing marker into a change type.
///
/// The upstream listing annotates deletions and renames but carries no
/// marker for added files, so this never yields `ChangeType::Added`.
pub fn classify_marker(marker: &str) -> ChangeType {
    let marker = marker.to_lowercase();
    if marker.contains("deleted") {
        ChangeType::Deleted
    } else if marker.contains("renamed") {
        ChangeType::Renamed
    } else {
        ChangeType::Modified
    }
}

/// Load a manifest file into entries, preserving its order.
///
/// Duplicate paths are a caller contract violation and are not guarded.
pub fn load(path: &Path) -> Result<Vec<FileEntry>> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

/// Parse manifest JSON into entries.
pub fn parse(content: &str) -> Result<Vec<FileEntry>> {
    let records: Vec<ManifestRecord> = serde_json::from_str(content)?;
    Ok(records
        .into_iter()
        .map(|r| FileEntry::new(r.path, r.href, classify_marker(&r.marker)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_preserves_order_and_fields() {
        let entries = parse(
            r##"[
                { "path": "src/b.rs", "href": "#diff-0" },
                { "path": "src/a.rs", "href": "#diff-1", "marker": "file deleted" }
            ]"##,
        )
        .expect("parse");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].full_path, "src/b.rs");
        assert_eq!(entries[0].href, "#diff-0");
        assert_eq!(entries[0].change_type, ChangeType::Modified);
        assert_eq!(entries[1].change_type, ChangeType::Deleted);
    }

    #[test]
    fn classify_known_markers() {
        assert_eq!(classify_marker("File deleted"), ChangeType::Deleted);
        assert_eq!(classify_marker("renamed from x"), ChangeType::Renamed);
        assert_eq!(classify_marker(""), ChangeType::Modified);
        assert_eq!(classify_marker("something else"), ChangeType::Modified);
    }

    #[test]
    fn classify_never_yields_added() {
        // The upstream listing has no marker for added files.
        for marker in ["", "added", "new file"] {
            assert_ne!(classify_marker(marker), ChangeType::Added);
        }
    }

    #[test]
    fn parse_rejects_invalid_json() {
        assert!(parse("{ not json").is_err());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load(Path::new("/nonexistent/manifest.json")).unwrap_err();
        assert!(matches!(err, crate::error::AppError::Io(_)));
    }
}
