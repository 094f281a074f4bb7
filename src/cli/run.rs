//! Command dispatch and operator-facing output.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use super::args::{Arguments, Command, GenerateCommand};
use super::exit_status::ExitStatus;
use crate::catalog::{Catalog, MergeStats};
use crate::config::{self, Config};
use crate::error::Error;
use crate::extract;
use crate::locale;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

const TEMPLATE_DIR: &str = "html";
const CATALOG_DIR: &str = "i18n";

pub fn run(args: Arguments) -> Result<ExitStatus> {
    match args.command {
        Command::Generate(cmd) => generate(cmd),
        Command::Langs => {
            langs();
            Ok(ExitStatus::Success)
        }
    }
}

fn generate(cmd: GenerateCommand) -> Result<ExitStatus> {
    // the tag gate runs before any file system access
    if locale::lookup(&cmd.lang).is_none() {
        return Err(Error::UnrecognizedLanguageTag(cmd.lang).into());
    }

    let config_path = match cmd.config {
        Some(path) => path,
        None => config::default_config_path().context("could not determine the home directory")?,
    };
    let config = Config::load(&config_path)?;
    let root = config.document_root()?.to_path_buf();

    let scan = extract::scan_templates(&root.join(TEMPLATE_DIR))?;
    for skipped in &scan.skipped {
        warn(&format!(
            "skipping {}: {}",
            skipped.path.display(),
            skipped.cause
        ));
    }

    let catalog_dir = root.join(CATALOG_DIR);
    fs::create_dir_all(&catalog_dir).map_err(|source| Error::CatalogDirCreate {
        path: catalog_dir.clone(),
        source,
    })?;

    let catalog_path = catalog_dir.join(format!("{}.po", cmd.lang));
    let mut loaded = Catalog::load(&catalog_path)?;
    for block in &loaded.malformed {
        warn(&format!(
            "{}:{}: skipping malformed entry: {}",
            catalog_path.display(),
            block.line_no,
            block.line
        ));
    }

    let stats = loaded.catalog.merge(&scan.ids);
    let pruned = if cmd.prune {
        loaded.catalog.prune(&scan.ids)
    } else {
        0
    };
    loaded.catalog.save(&catalog_path)?;

    report(&catalog_path, loaded.existed, loaded.catalog.len(), &stats, pruned);
    Ok(ExitStatus::Success)
}

fn report(path: &Path, existed: bool, total: usize, stats: &MergeStats, pruned: usize) {
    let mut details = format!(
        "{} {}, {} new",
        total,
        if total == 1 { "message" } else { "messages" },
        stats.added
    );
    if existed && stats.stale > 0 && pruned == 0 {
        details.push_str(&format!(", {} stale", stats.stale));
    }
    if pruned > 0 {
        details.push_str(&format!(", {} pruned", pruned));
    }

    let action = if existed { "Updated" } else { "Created" };
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("{} {} ({})", action, path.display(), details).green()
    );
}

fn langs() {
    for (tag, name) in locale::LANGUAGE_TAGS {
        // pad before colouring so escape codes don't count against the width
        println!("{} {}", format!("{tag:<8}").cyan(), name);
    }
}

fn warn(message: &str) {
    eprintln!("{} {}", "warning:".bold().yellow(), message);
}
