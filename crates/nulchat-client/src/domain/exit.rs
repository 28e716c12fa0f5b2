//! Process exit statuses.
//!
//! Every fatal error belongs to exactly one category, and each category has
//! its own exit code so scripts can tell them apart.

use std::process::ExitCode;

/// Category of a fatal error, and the process exit code it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Operational failure: connect, send, read, bad input line, bad config file.
    Common = 1,
    /// Bad command line.
    Usage = 2,
    /// Setup failure that should not happen on a sane host: address resolution,
    /// socket creation.
    Rare = 3,
}

impl ExitStatus {
    /// Numeric exit code.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
