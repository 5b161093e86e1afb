//! HTTP protocol types and constants
//!
//! Header names and media types shared by the parser, the resolver and the
//! curl renderer.

mod method;

pub use method::is_standard;

/// Header that carries the request authority
pub const HOST_HEADER: &str = "Host";

/// Header that selects how the body is decoded
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

/// Header dropped from reproductions since curl recomputes it
pub const CONTENT_LENGTH_HEADER: &str = "Content-Length";

/// Media type for JSON bodies
pub const MIME_JSON: &str = "application/json";

/// Media type for URL-encoded form bodies
pub const MIME_FORM: &str = "application/x-www-form-urlencoded";
