//! Request reproduction
//!
//! Renders a resolved request into the three artifacts handed to the
//! caller:
//!
//! - **Summary**: endpoint, host and parameters as plain text
//! - **Curl command**: a shell-ready replay of the request
//! - **Markdown table**: parameters as a pipe table, only when there are any
//!
//! ```text
//! curl -X POST "https://example.com/download" -H "Content-Type: application/x-www-form-urlencoded" --data-raw 'filename=important.pdf'
//! ```

pub mod curl;
pub mod markdown;
pub mod summary;

pub use curl::{generate_curl_command, highlight_curl, quote_arg, quote_body, QuoteStyle};
pub use markdown::notion_table;
pub use summary::render_summary;

use crate::params::{ParamMap, Target};
use crate::transcript::HeaderMap;

/// Everything the renderers read; nothing here is modified
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub method: &'a str,
    pub raw_path: &'a str,
    pub host: &'a str,
    pub headers: &'a HeaderMap,
    pub body: &'a str,
    pub params: &'a ParamMap,
}

impl RenderInput<'_> {
    /// `METHOD path`, without query string
    pub fn endpoint(&self) -> String {
        format!("{} {}", self.method, Target::parse(self.raw_path).path)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReproduceOptions {
    pub quote_style: QuoteStyle,
}

/// The rendered artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub summary: String,
    pub curl_command: String,
    pub notion_markdown: Option<String>,
}

pub fn render(input: &RenderInput<'_>, options: &ReproduceOptions) -> Rendered {
    Rendered {
        summary: render_summary(&input.endpoint(), input.host, input.params),
        curl_command: generate_curl_command(input, options.quote_style),
        notion_markdown: notion_table(input.params),
    }
}
