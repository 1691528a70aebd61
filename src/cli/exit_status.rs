use std::process::ExitCode;

/// Process exit status of a nextmap run.
///
/// `init` refusing to overwrite an existing config maps to 1. A missing
/// project root, a bad config file or an unwritable report maps to 2.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// Nothing was written because the target already exists.
    Failure,
    /// The environment prevented the run from completing.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
