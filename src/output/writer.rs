//! Render an analysis for stdout

use crate::analysis::AnalysisResult;
use crate::cli::{OutputFormat, Section};
use crate::errors::RawpulseError;
use crate::reproduce::highlight_curl;

use super::format_params_table;

/// How a result is written
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub only: Option<Section>,
    /// Colorize the curl command
    pub colors: bool,
}

/// Format an analysis result according to the output options
pub fn format_result(result: &AnalysisResult, options: &OutputOptions) -> Result<String, RawpulseError> {
    match options.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Table => Ok(format_params_table(&result.params)),
        OutputFormat::Text => Ok(format_text(result, options)),
    }
}

fn format_text(result: &AnalysisResult, options: &OutputOptions) -> String {
    let curl = if options.colors {
        highlight_curl(&result.curl_command)
    } else {
        result.curl_command.clone()
    };

    match options.only {
        Some(Section::Summary) => result.summary.clone(),
        Some(Section::Curl) => curl,
        Some(Section::Markdown) => result.notion_markdown.clone().unwrap_or_default(),
        None => {
            let mut sections = vec![result.summary.clone(), curl];
            if let Some(table) = &result.notion_markdown {
                sections.push(table.clone());
            }
            sections.join("\n\n")
        }
    }
}
