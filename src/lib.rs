//! rawpulse library interface
//!
//! Turns a raw HTTP request transcript, as copied out of an intercepting
//! proxy or browser devtools, into a structured analysis: endpoint, host,
//! merged parameters, a replayable curl command and a markdown table.
//!
//! ```
//! use rawpulse::{analyze, ReproduceOptions};
//!
//! let raw = "GET /search?q=rust HTTP/1.1\nHost: example.com\n";
//! let result = analyze(raw, &ReproduceOptions::default()).unwrap();
//! assert_eq!(result.endpoint, "GET /search");
//! assert_eq!(result.curl_command, "curl -X GET \"https://example.com/search?q=rust\"");
//! ```
//!
//! # Module Organization
//!
//! - [`transcript`] - Splitting text into request line, headers and body
//! - [`params`] - Query/form/JSON parameter resolution
//! - [`reproduce`] - Summary, curl and markdown rendering
//! - [`analysis`] - The whole pipeline behind one call
//! - [`errors`] - Error types (RawpulseError, Result)
//! - [`core`] - CLI execution logic

pub mod analysis;
pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod errors;
pub mod http;
pub mod logging;
pub mod output;
pub mod params;
pub mod reproduce;
pub mod status;
pub mod transcript;

pub use analysis::{analyze, analyze_guarded, AnalysisResult};
pub use errors::{RawpulseError, Result};
pub use params::{ParamMap, ParamValue};
pub use reproduce::{QuoteStyle, ReproduceOptions};
