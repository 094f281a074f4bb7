//! Per-language message catalogs.
//!
//! A catalog maps message identifiers to translations for one language.
//! It is loaded whole, merged with the identifiers extracted from the
//! templates, and rewritten whole; the file is never partially updated.

mod format;
pub mod ordinal;

pub use format::Malformed;

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Message identifier -> translation, empty when untranslated. Keys are
/// held ordered; serialization order is key order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<String, String>,
}

/// Outcome of loading a catalog file.
#[derive(Debug)]
pub struct Loaded {
    pub catalog: Catalog,
    /// False when no file existed and the catalog starts empty.
    pub existed: bool,
    /// Blocks the lenient parser dropped.
    pub malformed: Vec<Malformed>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeStats {
    /// Extracted identifiers that were not yet in the catalog.
    pub added: usize,
    /// Extracted identifiers that already had an entry.
    pub retained: usize,
    /// Catalog entries no template references any more.
    pub stale: usize,
}

impl Catalog {
    /// Loads the catalog at `path`. An absent file yields an empty catalog;
    /// an existing file that cannot be read is fatal, since rewriting from
    /// scratch would discard its translations.
    pub fn load(path: &Path) -> Result<Loaded> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(Loaded {
                    catalog: Catalog::default(),
                    existed: false,
                    malformed: Vec::new(),
                });
            }
            Err(source) => {
                return Err(Error::CatalogRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let parsed = format::parse(&content);
        let mut catalog = Catalog::default();
        for (id, translation) in parsed.entries {
            catalog.entries.insert(id, translation);
        }
        Ok(Loaded {
            catalog,
            existed: true,
            malformed: parsed.malformed,
        })
    }

    /// Inserts an empty-translation entry for every extracted identifier
    /// not already present. Existing translations are never modified, and
    /// entries absent from `ids` are left in place.
    pub fn merge(&mut self, ids: &HashSet<String>) -> MergeStats {
        let mut stats = MergeStats::default();
        for id in ids {
            match self.entries.entry(id.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(String::new());
                    stats.added += 1;
                }
                Entry::Occupied(_) => stats.retained += 1,
            }
        }
        stats.stale = self.entries.len() - stats.added - stats.retained;
        stats
    }

    /// Drops entries whose identifier is not in `ids`. Returns the number
    /// removed. Only invoked when the operator opts out of retention.
    pub fn prune(&mut self, ids: &HashSet<String>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|id, _| ids.contains(id));
        before - self.entries.len()
    }

    /// Rewrites the catalog file: entries sorted by identifier, ordinal
    /// labels prefixed. The text is written to a temporary file in the
    /// destination directory and atomically renamed over `path`, so a
    /// failure mid-write leaves the previous file intact.
    pub fn save(&self, path: &Path) -> Result<()> {
        let write_err = |source: io::Error| Error::CatalogWrite {
            path: path.to_path_buf(),
            source,
        };

        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(format::serialize(&self.entries).as_bytes())
            .map_err(write_err)?;
        tmp.persist(path).map_err(|err| write_err(err.error))?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn insert(&mut self, id: impl Into<String>, translation: impl Into<String>) {
        self.entries.insert(id.into(), translation.into());
    }

    /// Identifiers in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
