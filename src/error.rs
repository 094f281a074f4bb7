//! Error taxonomy for the core modules.
//!
//! Every variant here is fatal to the run; recoverable conditions (an
//! unreadable template file, a malformed catalog block) are surfaced as
//! warnings by the CLI layer instead of living in this enum.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration file unavailable: {path}")]
    ConfigUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path}:{line_no}: not a `key=value` pair: {line:?}")]
    ConfigParse {
        path: PathBuf,
        line_no: usize,
        line: String,
    },

    #[error("configuration key `{0}` is missing or empty")]
    ConfigMissingKey(&'static str),

    #[error("unrecognised language: {0}")]
    UnrecognizedLanguageTag(String),

    #[error("template directory unavailable: {path}")]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create catalog directory: {path}")]
    CatalogDirCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read catalog: {path}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write catalog: {path}")]
    CatalogWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
