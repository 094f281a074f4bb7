//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate or update the message catalog for one language
    Generate(GenerateCommand),
    /// List the recognised language tags
    Langs,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Target language tag (see `lingo langs`)
    pub lang: String,

    /// Run-control file (default: ~/.lingorc)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Drop entries whose identifier no longer occurs in any template
    #[arg(long)]
    pub prune: bool,
}
