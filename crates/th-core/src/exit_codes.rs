//! Exit codes for the tle-harness CLI.
//!
//! A run always exits `Clean`: rejected lines, propagation failures and a
//! missing input file are reported on stderr, not through the status.

/// Exit codes for tle-harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Run finished (whatever it found)
    Clean = 0,

    /// Harness configuration could not be loaded
    ConfigError = 10,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates an error requiring attention.
    pub fn is_error(self) -> bool {
        (self as i32) >= 10
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}
