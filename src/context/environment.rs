//! Environment struct (stdin/stdout/etc.)

use std::io::{self, Read};
use std::path::Path;

use crate::errors::RawpulseError;

/// Execution environment
pub struct Environment {
    pub stdin_isatty: bool,
    pub stdout_isatty: bool,
    pub stderr_isatty: bool,
    /// `NO_COLOR` is set
    pub no_color_env: bool,
}

impl Environment {
    pub fn init() -> Self {
        Self::default()
    }

    /// Whether colored output is appropriate when the user did not decide
    pub fn colors_by_default(&self) -> bool {
        self.stdout_isatty && !self.no_color_env
    }

    /// Read the transcript from stdin
    pub fn read_stdin(&self) -> Result<String, RawpulseError> {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    }

    /// Read the transcript from a file
    pub fn read_file(&self, path: &Path) -> Result<String, RawpulseError> {
        Ok(std::fs::read_to_string(path)?)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            stdin_isatty: atty::is(atty::Stream::Stdin),
            stdout_isatty: atty::is(atty::Stream::Stdout),
            stderr_isatty: atty::is(atty::Stream::Stderr),
            no_color_env: std::env::var_os("NO_COLOR").is_some(),
        }
    }
}
