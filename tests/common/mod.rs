//! Common test utilities for rawpulse integration tests
//!
//! This module provides shared test infrastructure including:
//! - CLI invocation helpers with piped stdin
//! - An isolated config directory per run
//! - Sample transcripts

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Form-encoded download request used across tests
pub const FORM_TRANSCRIPT: &str = "POST /download HTTP/1.1
Host: example.com
Content-Type: application/x-www-form-urlencoded

filename=important.pdf&dir=..%2F..%2F..
";

/// JSON request with a query string
pub const JSON_TRANSCRIPT: &str = "POST /api/items?id=1&page=2 HTTP/1.1
Host: api.example.com
Content-Type: application/json; charset=utf-8
Content-Length: 31
Accept: application/json

{\"id\": 7, \"tags\": [\"a\",\"b\"]}
";

/// Exit status codes matching the Rust application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    Error = 1,
}

impl From<i32> for ExitStatus {
    fn from(code: i32) -> Self {
        match code {
            0 => ExitStatus::Success,
            _ => ExitStatus::Error,
        }
    }
}

/// Result of running the CLI
#[derive(Debug)]
pub struct CliResponse {
    pub stdout: String,
    pub stderr: String,
    pub exit_status: ExitStatus,
    pub exit_code: i32,
}

impl CliResponse {
    /// Check if stdout contains a substring
    pub fn contains(&self, needle: &str) -> bool {
        self.stdout.contains(needle)
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim()).expect("stdout is not JSON")
    }
}

/// Isolated environment for one CLI run
pub struct MockEnvironment {
    /// Temporary config directory
    pub config_dir: TempDir,
    /// Environment variables to set
    pub env_vars: Vec<(String, String)>,
}

impl Default for MockEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEnvironment {
    pub fn new() -> Self {
        let config_dir = TempDir::new().expect("Failed to create temp config dir");
        Self {
            config_dir,
            env_vars: Vec::new(),
        }
    }

    /// Set an environment variable
    pub fn set_env(&mut self, key: &str, value: &str) -> &mut Self {
        self.env_vars.push((key.to_string(), value.to_string()));
        self
    }

    /// Write `config.toml` into the config directory
    pub fn write_config(&self, content: &str) -> &Self {
        std::fs::write(self.config_dir.path().join("config.toml"), content)
            .expect("Failed to write config");
        self
    }

    pub fn config_path(&self) -> &Path {
        self.config_dir.path()
    }
}

/// Run the CLI with the transcript on stdin
pub fn rawpulse(args: &[&str], stdin: &str) -> CliResponse {
    rawpulse_with_env(args, stdin, &MockEnvironment::new())
}

/// Run the CLI with the transcript on stdin and a custom environment
pub fn rawpulse_with_env(args: &[&str], stdin: &str, env: &MockEnvironment) -> CliResponse {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rawpulse"));
    cmd.args(args);

    cmd.env("RAWPULSE_CONFIG_DIR", env.config_path());
    cmd.env_remove("RUST_LOG");
    for (key, value) in &env.env_vars {
        cmd.env(key, value);
    }

    cmd.stdin(Stdio::piped());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let mut child = cmd.spawn().expect("Failed to spawn command");
    {
        let child_stdin = child.stdin.as_mut().expect("Failed to open stdin");
        child_stdin
            .write_all(stdin.as_bytes())
            .expect("Failed to write to stdin");
    }
    let output = child.wait_with_output().expect("Failed to wait for command");
    parse_output(output)
}

fn parse_output(output: Output) -> CliResponse {
    let exit_code = output.status.code().unwrap_or(1);
    CliResponse {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_status: ExitStatus::from(exit_code),
        exit_code,
    }
}

/// Create a temporary file with the given content
pub fn create_temp_file(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = dir.path().join("request.txt");
    std::fs::write(&file_path, content).expect("Failed to write temp file");
    (dir, file_path)
}

/// Undo POSIX single quoting of one argument: `'it'\''s'` -> `it's`
pub fn unquote_single(arg: &str) -> String {
    let inner = arg
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .unwrap_or(arg);
    inner.replace(r"'\''", "'")
}

/// The `--data-raw` argument of a generated command, unquoted
pub fn data_raw(curl: &str) -> Option<String> {
    let (_, quoted) = curl.split_once(" --data-raw ")?;
    Some(unquote_single(quoted))
}
