//! Command-line interface layer.

mod args;
mod exit_status;
mod run;

pub use args::{Arguments, Command, GenerateCommand};
pub use exit_status::ExitStatus;

use anyhow::Result;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    run::run(args)
}
