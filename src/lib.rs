//! Lingo - message catalog generator for HTML template trees
//!
//! Lingo scans a directory of HTML templates for embedded `<?msg ...?>`
//! translation markers, collects the distinct message identifiers, and
//! reconciles them against the persisted catalog for one target language.
//! Existing translations are preserved, newly referenced identifiers get
//! empty placeholders, and the rewritten catalog is sorted and numbered
//! with ordinal labels.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing and dispatch)
//! - `config`: Run-control file loading and parsing
//! - `locale`: Recognised language tags
//! - `extract`: Template marker extraction
//! - `catalog`: Catalog model, merge logic, and on-disk format
//! - `error`: Error taxonomy shared by the core modules

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod locale;
