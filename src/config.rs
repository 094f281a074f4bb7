//! Run-control file loading and parsing.
//!
//! The run-control file is a plain `key=value` text file, one pair per
//! line. Blank lines and `#` comments are ignored, as are `[section]`
//! headers (keys are flat; sections only group them visually). The one key
//! the generator needs is `root`, the document-root directory under which
//! `html/` holds templates and `i18n/` holds catalogs.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".lingorc";

/// Default location: `.lingorc` in the user's home directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}

/// One classified line of the run-control file.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Comment,
    Section(&'a str),
    Pair { key: &'a str, value: &'a str },
}

/// Classifies a single line, or returns `None` when it fits no form.
fn classify(raw: &str) -> Option<Line<'_>> {
    let line = raw.trim();
    if line.is_empty() {
        return Some(Line::Blank);
    }
    if line.starts_with('#') {
        return Some(Line::Comment);
    }
    if let Some(name) = line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
        return Some(Line::Section(name));
    }
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some(Line::Pair {
        key,
        value: value.trim(),
    })
}

#[derive(Debug)]
pub struct Config {
    path: PathBuf,
    keys: HashMap<String, String>,
}

impl Config {
    /// Loads and parses the run-control file. A missing file is fatal: the
    /// generator refuses to guess a document root.
    pub fn load(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let mut keys = HashMap::new();
        for (idx, raw) in content.lines().enumerate() {
            match classify(raw) {
                Some(Line::Pair { key, value }) => {
                    // last occurrence wins
                    keys.insert(key.to_string(), value.to_string());
                }
                Some(_) => {}
                None => {
                    return Err(Error::ConfigParse {
                        path: path.to_path_buf(),
                        line_no: idx + 1,
                        line: raw.to_string(),
                    });
                }
            }
        }

        Ok(Config {
            path: path.to_path_buf(),
            keys,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.keys.get(key).map(String::as_str)
    }

    /// The document-root directory. Absent or empty `root` is fatal rather
    /// than proceeding with an unset value.
    pub fn document_root(&self) -> Result<&Path> {
        match self.get("root") {
            Some(value) if !value.is_empty() => Ok(Path::new(value)),
            _ => Err(Error::ConfigMissingKey("root")),
        }
    }
}
