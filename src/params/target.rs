//! Request target handling
//!
//! Transcripts usually carry an origin-form target (`/path?query`), but
//! requests captured in front of a forward proxy use the absolute form
//! (`http://host/path?query`).

use url::Url;

/// The pieces of a request target needed for parameter resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Path shown in the endpoint line
    pub path: String,
    /// Raw query component, without `?` or fragment
    pub query: Option<String>,
    /// Host (and port) of an absolute-form target
    pub authority: Option<String>,
}

impl Target {
    pub fn parse(raw_path: &str) -> Self {
        if is_absolute(raw_path) {
            if let Ok(url) = Url::parse(raw_path) {
                let authority = url.host_str().map(|host| match url.port() {
                    Some(port) => format!("{}:{}", host, port),
                    None => host.to_string(),
                });
                return Self {
                    path: url.path().to_string(),
                    query: url.query().map(String::from),
                    authority,
                };
            }
        }

        let without_fragment = raw_path.split('#').next().unwrap_or_default();
        match without_fragment.split_once('?') {
            Some((path, query)) => Self {
                path: path.to_string(),
                query: Some(query.to_string()),
                authority: None,
            },
            None => Self {
                path: without_fragment.to_string(),
                query: None,
                authority: None,
            },
        }
    }
}

/// Whether the target is an absolute `http(s)://` URL
pub fn is_absolute(raw_path: &str) -> bool {
    let lower = raw_path.get(..8).unwrap_or(raw_path).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
