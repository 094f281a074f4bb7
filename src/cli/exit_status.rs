use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): catalog generated or listing printed
/// - `Error` (1): the run failed; nothing was partially written
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}
