//! HTTP request methods

/// Whether `method` is one of the RFC 9110 methods or PATCH, ignoring case
///
/// Anything else is still accepted in a request line; the parser only logs it.
pub fn is_standard(method: &str) -> bool {
    matches!(
        method.to_ascii_uppercase().as_str(),
        "GET" | "POST" | "PUT" | "PATCH" | "DELETE" | "HEAD" | "OPTIONS" | "TRACE" | "CONNECT"
    )
}
