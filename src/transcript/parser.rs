//! Raw request transcript splitter
//!
//! Separates pasted request text into the request line, the header block
//! and the body:
//!
//! ```http
//! POST /download HTTP/1.1
//! Host: example.com
//! Content-Type: application/x-www-form-urlencoded
//!
//! filename=important.pdf&dir=..%2F..%2F..
//! ```
//!
//! Only the request line is validated. Header lines without a colon are
//! skipped so a stray continuation line does not abort the whole parse.

use tracing::{debug, trace};

use super::HeaderMap;
use crate::errors::{RawpulseError, Result};
use crate::http;

/// Raw body text, trimmed; empty means no body
pub type Body = String;

/// The first line of a transcript: `METHOD TARGET VERSION`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: String,
    pub raw_path: String,
    pub http_version: String,
}

impl RequestLine {
    /// Parse a request line, requiring exactly three whitespace-separated tokens
    pub fn parse(line: &str) -> Result<Self> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let [method, raw_path, http_version] = parts.as_slice() else {
            return Err(RawpulseError::MalformedRequestLine {
                line: line.trim().to_string(),
                tokens: parts.len(),
            });
        };

        if !http::is_standard(method) {
            debug!(method = %method, "Non-standard HTTP method");
        }

        Ok(Self {
            method: method.to_string(),
            raw_path: raw_path.to_string(),
            http_version: http_version.to_string(),
        })
    }
}

/// A transcript split into its three sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub request_line: RequestLine,
    pub headers: HeaderMap,
    pub body: Body,
}

/// Split a raw transcript into request line, headers and body
pub fn split(raw: &str) -> Result<Transcript> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RawpulseError::EmptyInput);
    }

    let mut lines = trimmed.lines();
    // trimmed is non-empty, so there is always a first line
    let request_line = RequestLine::parse(lines.next().unwrap_or_default())?;
    debug!(
        method = %request_line.method,
        target = %request_line.raw_path,
        version = %request_line.http_version,
        "Parsed request line"
    );

    let mut headers = HeaderMap::new();
    let mut body_lines = Vec::new();
    let mut in_body = false;

    for (index, line) in lines.enumerate() {
        if in_body {
            body_lines.push(line);
            continue;
        }

        if line.trim().is_empty() {
            in_body = true;
            continue;
        }

        match parse_header_line(line) {
            Some((name, value)) => headers.insert(name, value),
            None => trace!(line = index + 2, "Skipping line without a header name"),
        }
    }

    let body = body_lines.join("\n").trim().to_string();

    Ok(Transcript {
        request_line,
        headers,
        body,
    })
}

/// Parse a header line like "Content-Type: application/json"
fn parse_header_line(line: &str) -> Option<(&str, &str)> {
    let (name, value) = line.split_once(':')?;
    let name = name.trim();

    if name.is_empty() {
        return None;
    }

    Some((name, value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_full_transcript() {
        let raw = "POST /download HTTP/1.1\n\
                   Host: example.com\n\
                   Content-Type: application/x-www-form-urlencoded\n\
                   \n\
                   filename=important.pdf&dir=..%2F..%2F..\n";
        let t = split(raw).unwrap();

        assert_eq!(t.request_line.method, "POST");
        assert_eq!(t.request_line.raw_path, "/download");
        assert_eq!(t.request_line.http_version, "HTTP/1.1");
        assert_eq!(t.headers.get("Host"), Some("example.com"));
        assert_eq!(t.body, "filename=important.pdf&dir=..%2F..%2F..");
    }

    #[test]
    fn test_split_crlf_transcript() {
        let raw = "GET /a HTTP/1.1\r\nHost: h\r\nAccept: */*\r\n\r\n";
        let t = split(raw).unwrap();
        assert_eq!(t.headers.get("Accept"), Some("*/*"));
        assert_eq!(t.body, "");
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(split(""), Err(RawpulseError::EmptyInput)));
        assert!(matches!(split("  \n\t \n"), Err(RawpulseError::EmptyInput)));
    }

    #[test]
    fn test_request_line_needs_three_tokens() {
        let err = split("GET").unwrap_err();
        assert!(matches!(err, RawpulseError::MalformedRequestLine { tokens: 1, .. }));

        let err = split("GET /path HTTP/1.1 extra\nHost: x").unwrap_err();
        assert!(matches!(err, RawpulseError::MalformedRequestLine { tokens: 4, .. }));
    }

    #[test]
    fn test_leading_blank_lines_are_ignored() {
        let t = split("\n\n   GET / HTTP/2\nHost: a\n").unwrap();
        assert_eq!(t.request_line.http_version, "HTTP/2");
    }

    #[test]
    fn test_header_split_on_first_colon() {
        let t = split("GET / HTTP/1.1\nReferer:  https://a.example:8443/x  \n").unwrap();
        assert_eq!(t.headers.get("Referer"), Some("https://a.example:8443/x"));
    }

    #[test]
    fn test_malformed_header_lines_are_skipped() {
        let raw = "GET / HTTP/1.1\nHost: a\nnot a header\n: empty-name\nAccept: */*";
        let t = split(raw).unwrap();
        let names: Vec<_> = t.headers.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Host", "Accept"]);
    }

    #[test]
    fn test_no_blank_line_means_no_body() {
        let raw = "POST /x HTTP/1.1\nHost: a\nContent-Type: application/json";
        let t = split(raw).unwrap();
        assert_eq!(t.body, "");
        assert_eq!(t.headers.len(), 2);
    }

    #[test]
    fn test_body_keeps_inner_lines() {
        let raw = "POST /x HTTP/1.1\nHost: a\n\n{\n  \"a\": 1,\n\n  \"b\": 2\n}\n\n";
        let t = split(raw).unwrap();
        assert_eq!(t.body, "{\n  \"a\": 1,\n\n  \"b\": 2\n}");
    }

    #[test]
    fn test_body_lines_with_colons_stay_in_body() {
        let raw = "POST /x HTTP/1.1\n\nkey: value";
        let t = split(raw).unwrap();
        assert!(t.headers.is_empty());
        assert_eq!(t.body, "key: value");
    }
}
