//! Template marker extraction.
//!
//! Templates embed translation markers as processing instructions on a
//! single line: `<?msg home.title ?>`. The extractor walks the template
//! directory, scans every `.html` file line by line, and collects the set
//! of distinct message identifiers referenced anywhere in the tree.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Marker token followed by whitespace and the identifier token.
static MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\?msg\s+(\S+)").unwrap());

const TEMPLATE_EXTENSION: &str = "html";

/// Result of scanning a template tree.
#[derive(Debug, Default)]
pub struct Scan {
    /// Distinct message identifiers found across all scanned files.
    pub ids: HashSet<String>,
    pub files_scanned: usize,
    /// Files that could not be read; the scan continues without them.
    pub skipped: Vec<Skipped>,
}

#[derive(Debug)]
pub struct Skipped {
    pub path: PathBuf,
    pub cause: String,
}

/// Scans `dir` recursively for template files and collects every marker
/// identifier. A missing or unreadable root is fatal; an unreadable file
/// inside the tree is recorded in `skipped` and the scan continues.
pub fn scan_templates(dir: &Path) -> Result<Scan> {
    let meta = fs::metadata(dir).map_err(|source| Error::DirectoryUnavailable {
        path: dir.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(Error::DirectoryUnavailable {
            path: dir.to_path_buf(),
            source: std::io::Error::from(std::io::ErrorKind::NotADirectory),
        });
    }

    let mut scan = Scan::default();
    for entry in WalkDir::new(dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                scan.skipped.push(Skipped {
                    path: err.path().unwrap_or(dir).to_path_buf(),
                    cause: err.to_string(),
                });
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file() || !is_template(path) {
            continue;
        }
        match fs::read_to_string(path) {
            Ok(content) => {
                scan.files_scanned += 1;
                collect_ids(&content, &mut scan.ids);
            }
            Err(err) => scan.skipped.push(Skipped {
                path: path.to_path_buf(),
                cause: err.to_string(),
            }),
        }
    }
    Ok(scan)
}

fn is_template(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(TEMPLATE_EXTENSION)
}

fn collect_ids(content: &str, ids: &mut HashSet<String>) {
    for line in content.lines() {
        if let Some(captures) = MARKER_REGEX.captures(line) {
            let id = captures.get(1).unwrap().as_str();
            // tolerate a missing space before the closing "?>"
            let id = id.strip_suffix("?>").unwrap_or(id);
            if !id.is_empty() {
                ids.insert(id.to_string());
            }
        }
    }
}
