//! Curl command generation
//!
//! Rebuilds a request as a curl invocation that can be pasted straight into
//! a shell. `Host` and `Content-Length` are left out: curl derives the
//! former from the URL and recomputes the latter from `--data-raw`.

use clap::ValueEnum;

use super::RenderInput;
use crate::http::{CONTENT_LENGTH_HEADER, HOST_HEADER};
use crate::params::is_absolute;

/// Scheme used for origin-form targets; transcripts rarely state one
pub const DEFAULT_SCHEME: &str = "https";

/// How arguments of the generated command are quoted
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum QuoteStyle {
    /// POSIX shells (sh, bash, zsh)
    #[default]
    Posix,
    /// Windows cmd.exe: everything double-quoted, bodies on one line
    Cmd,
}

/// Generate the curl command for a request
pub fn generate_curl_command(input: &RenderInput<'_>, style: QuoteStyle) -> String {
    let mut parts: Vec<String> = vec![
        "curl".to_string(),
        "-X".to_string(),
        input.method.to_string(),
        quote_arg(&request_url(input), style),
    ];

    for (name, value) in input.headers.iter() {
        if is_skipped_header(name) {
            continue;
        }
        parts.push("-H".to_string());
        parts.push(quote_arg(&format!("{}: {}", name, value), style));
    }

    if !input.body.is_empty() {
        parts.push("--data-raw".to_string());
        parts.push(quote_body(input.body, style));
    }

    parts.join(" ")
}

/// URL to replay: absolute targets as given, otherwise `https://<host><target>`
fn request_url(input: &RenderInput<'_>) -> String {
    if is_absolute(input.raw_path) {
        input.raw_path.to_string()
    } else {
        format!("{}://{}{}", DEFAULT_SCHEME, input.host, input.raw_path)
    }
}

fn is_skipped_header(name: &str) -> bool {
    name.eq_ignore_ascii_case(HOST_HEADER) || name.eq_ignore_ascii_case(CONTENT_LENGTH_HEADER)
}

/// Quote a URL or header argument
///
/// POSIX style keeps double quotes while nothing inside is special to the
/// shell in that context, and falls back to single quotes otherwise.
pub fn quote_arg(s: &str, style: QuoteStyle) -> String {
    match style {
        QuoteStyle::Posix if needs_single_quotes(s) => single_quote(s),
        QuoteStyle::Posix => format!("\"{}\"", s),
        QuoteStyle::Cmd => cmd_quote(s),
    }
}

/// Quote a request body; POSIX bodies are always single-quoted
///
/// cmd.exe ends a command at a line break even inside quotes, so `cmd`
/// bodies have their line breaks collapsed to single spaces.
pub fn quote_body(s: &str, style: QuoteStyle) -> String {
    match style {
        QuoteStyle::Posix => single_quote(s),
        QuoteStyle::Cmd => cmd_quote(&join_lines(s)),
    }
}

/// Characters still interpreted by a POSIX shell inside double quotes
fn needs_single_quotes(s: &str) -> bool {
    s.chars().any(|c| matches!(c, '"' | '$' | '`' | '\\' | '!'))
}

fn single_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// Double-quote for cmd.exe; `""` keeps cmd inside the quoted span and
/// reaches curl as a literal `"`
fn cmd_quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Indentation goes too; a multi-line JSON body stays valid JSON
fn join_lines(s: &str) -> String {
    s.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

const RESET: &str = "\x1b[0m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";
const BOLD_YELLOW: &str = "\x1b[1;33m";

/// Colorize a curl command for terminal output
pub fn highlight_curl(cmd: &str) -> String {
    let mut result = String::with_capacity(cmd.len() + 64);

    let rest = match cmd.strip_prefix("curl") {
        Some(rest) => {
            result.push_str(BOLD_YELLOW);
            result.push_str("curl");
            result.push_str(RESET);
            rest
        }
        None => cmd,
    };

    let mut quote: Option<char> = None;
    let mut prev = ' ';
    let mut chars = rest.chars().peekable();

    while let Some(c) = chars.next() {
        match quote {
            Some(q) => {
                result.push(c);
                if q == '"' && c == '\\' {
                    if let Some(next) = chars.next() {
                        result.push(next);
                    }
                } else if c == q {
                    result.push_str(RESET);
                    quote = None;
                }
            }
            None if c == '\'' || c == '"' => {
                result.push_str(GREEN);
                result.push(c);
                quote = Some(c);
            }
            None if c == '\\' => {
                // escaped character between quoted segments, e.g. '\''
                result.push(c);
                if let Some(next) = chars.next() {
                    result.push(next);
                }
            }
            None if c == '-' && prev == ' ' => {
                result.push_str(CYAN);
                result.push(c);
                while let Some(&next) = chars.peek() {
                    if next.is_alphanumeric() || next == '-' {
                        result.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                result.push_str(RESET);
            }
            None => result.push(c),
        }
        prev = c;
    }

    if quote.is_some() {
        result.push_str(RESET);
    }

    result
}
