//! Exit status codes for the CLI
//!
//! add-plugin follows standard Unix exit code conventions:
//! - 0: Success (including "anchor not found", which is reported on stdout
//!   and leaves the registry file untouched)
//! - 1: Any hard error (unreadable file, invalid JSON, failed write)

use std::process::{ExitCode, Termination};

/// Exit status codes following standard Unix conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Successful execution, whether or not an insertion happened
    Success = 0,
    /// Any error (IO, JSON parse, write failure)
    Error = 1,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}
