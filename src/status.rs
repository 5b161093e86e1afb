//! Exit status codes for the CLI
//!
//! rawpulse follows standard Unix exit code conventions:
//! - 0: Success
//! - 1: Any error (unreadable input, empty transcript, malformed request line)

use std::process::{ExitCode, Termination};

/// Exit status codes following standard Unix conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Analysis printed
    Success = 0,
    /// Any error
    Error = 1,
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitStatus::Success as u8, 0);
        assert_eq!(ExitStatus::Error as u8, 1);
    }
}
