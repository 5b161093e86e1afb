//! CLI argument definitions using clap
//!
//! This module defines all command-line arguments for rawpulse.

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use crate::reproduce::QuoteStyle;

/// rawpulse - analyze a raw HTTP request and rebuild it as a curl command
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "rawpulse", version, about, long_about = None)]
pub struct Args {
    // =========================================================================
    // INPUT
    // =========================================================================

    /// File holding the raw request transcript ("-" or absent reads stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    // =========================================================================
    // OUTPUT
    // =========================================================================

    /// Output format
    #[arg(short = 'o', long = "output", value_name = "FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Print only one artifact (text output only)
    #[arg(long = "only", value_name = "PART", value_enum)]
    pub only: Option<Section>,

    /// Quoting used in the generated curl command
    #[arg(long = "quote-style", value_name = "STYLE", value_enum, default_value_t = QuoteStyle::Posix)]
    pub quote_style: QuoteStyle,

    /// When to colorize the curl command
    #[arg(long = "color", value_name = "WHEN", value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Force disable colors in output
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    pub no_color: bool,

    // =========================================================================
    // TROUBLESHOOTING
    // =========================================================================

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Output format for structured logging: json (JSON Lines) or text (default)
    #[arg(long = "log-format", value_name = "FORMAT", value_enum)]
    pub log_format: Option<LogFormat>,

    /// Show the full error on failure
    #[arg(long = "traceback", action = ArgAction::SetTrue)]
    pub traceback: bool,

    // =========================================================================
    // SHELL INTEGRATION
    // =========================================================================

    /// Print shell completions and exit
    #[arg(long = "generate-completions", value_name = "SHELL", value_enum)]
    pub generate_completions: Option<Shell>,

    /// Print a man page and exit
    #[arg(long = "generate-manpage", action = ArgAction::SetTrue)]
    pub generate_manpage: bool,
}

impl Args {
    /// Whether the transcript comes from stdin
    pub fn reads_stdin(&self) -> bool {
        match &self.file {
            None => true,
            Some(path) => path.as_os_str() == "-",
        }
    }
}

/// Result output format
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Summary, curl command and markdown table
    #[default]
    Text,
    /// The full analysis as a JSON object
    Json,
    /// Parameters as a terminal table
    Table,
}

/// A single artifact of the analysis
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Summary,
    Curl,
    Markdown,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

/// Structured log format
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON Lines format for parsing
    Json,
}

/// Shells supported for completion scripts
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["rawpulse"]).unwrap();
        assert!(args.reads_stdin());
        assert_eq!(args.output, OutputFormat::Text);
        assert_eq!(args.quote_style, QuoteStyle::Posix);
        assert_eq!(args.color, ColorChoice::Auto);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_dash_reads_stdin() {
        let args = Args::try_parse_from(["rawpulse", "-"]).unwrap();
        assert!(args.reads_stdin());

        let args = Args::try_parse_from(["rawpulse", "req.txt"]).unwrap();
        assert!(!args.reads_stdin());
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "rawpulse",
            "--output",
            "json",
            "--quote-style",
            "cmd",
            "--only",
            "curl",
            "-vv",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(args.output, OutputFormat::Json);
        assert_eq!(args.quote_style, QuoteStyle::Cmd);
        assert_eq!(args.only, Some(Section::Curl));
        assert_eq!(args.verbose, 2);
        assert_eq!(args.log_format, Some(LogFormat::Json));
    }

    #[test]
    fn test_rejects_unknown_quote_style() {
        assert!(Args::try_parse_from(["rawpulse", "--quote-style", "fish"]).is_err());
    }
}
