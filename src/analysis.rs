//! One-shot transcript analysis
//!
//! `analyze` chains the splitter, the parameter resolver and the renderers.
//! Each call builds its own values and keeps nothing afterwards.

use std::panic::{self, AssertUnwindSafe};

use serde::Serialize;
use tracing::info;

use crate::errors::{RawpulseError, Result};
use crate::params::{resolve, ParamMap};
use crate::reproduce::{render, RenderInput, ReproduceOptions};
use crate::transcript::split;

/// The result of analyzing one transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    /// `METHOD path`
    pub endpoint: String,
    pub host: String,
    pub params: ParamMap,
    pub summary: String,
    pub curl_command: String,
    /// Absent when there are no parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notion_markdown: Option<String>,
}

/// Analyze a raw request transcript
pub fn analyze(raw: &str, options: &ReproduceOptions) -> Result<AnalysisResult> {
    let transcript = split(raw)?;
    let request_line = &transcript.request_line;

    let resolution = resolve(&request_line.raw_path, &transcript.headers, &transcript.body);

    let input = RenderInput {
        method: &request_line.method,
        raw_path: &request_line.raw_path,
        host: &resolution.host,
        headers: &transcript.headers,
        body: &transcript.body,
        params: &resolution.params,
    };
    let endpoint = input.endpoint();
    let rendered = render(&input, options);

    info!(
        endpoint = %endpoint,
        host = %resolution.host,
        headers = transcript.headers.len(),
        params = resolution.params.len(),
        "Analyzed request"
    );

    Ok(AnalysisResult {
        endpoint,
        host: resolution.host,
        params: resolution.params,
        summary: rendered.summary,
        curl_command: rendered.curl_command,
        notion_markdown: rendered.notion_markdown,
    })
}

/// Like [`analyze`], but an internal panic is reported as
/// [`RawpulseError::Internal`] instead of unwinding into the caller
pub fn analyze_guarded(raw: &str, options: &ReproduceOptions) -> Result<AnalysisResult> {
    match panic::catch_unwind(AssertUnwindSafe(|| analyze(raw, options))) {
        Ok(result) => result,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown error".to_string());
            Err(RawpulseError::Internal(message))
        }
    }
}
