//! Raw HTTP request transcripts
//!
//! A transcript is request text as copied out of a proxy or browser tool:
//! request line, headers, a blank line, then the body.

mod headers;
mod parser;

pub use headers::HeaderMap;
pub use parser::{split, Body, RequestLine, Transcript};
