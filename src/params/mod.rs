//! Parameter resolution
//!
//! Parameters are merged from two sources, in order:
//!
//! 1. the query string of the request target
//! 2. the body, when its media type is `application/json` (object members)
//!    or `application/x-www-form-urlencoded`
//!
//! Body parameters overwrite query parameters of the same name, never the
//! reverse. A body that cannot be decoded contributes nothing and is not an
//! error.

mod decode;
mod target;
mod value;

pub use decode::{decode_body, decode_json, decode_urlencoded, media_type, BodyParams, SkipReason};
pub use target::{is_absolute, Target};
pub use value::{merge, ParamMap, ParamValue};

use tracing::debug;

use crate::http::{CONTENT_TYPE_HEADER, HOST_HEADER};
use crate::transcript::HeaderMap;

/// Placeholder host when the transcript does not name one
pub const UNKNOWN_HOST: &str = "-";

/// Endpoint path, host and merged parameters of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub path: String,
    pub host: String,
    pub params: ParamMap,
}

/// Resolve path, host and parameters from a split transcript
pub fn resolve(raw_path: &str, headers: &HeaderMap, body: &str) -> Resolution {
    let target = Target::parse(raw_path);

    let host = headers
        .get(HOST_HEADER)
        .map(String::from)
        .or_else(|| target.authority.clone())
        .unwrap_or_else(|| UNKNOWN_HOST.to_string());

    let mut params = target
        .query
        .as_deref()
        .map(decode_urlencoded)
        .unwrap_or_default();

    let content_type = media_type(headers.get(CONTENT_TYPE_HEADER).unwrap_or_default());
    match decode_body(&content_type, body) {
        BodyParams::Decoded(body_params) => {
            debug!(count = body_params.len(), content_type = %content_type, "Decoded body parameters");
            merge(&mut params, body_params);
        }
        BodyParams::Skipped(SkipReason::Empty) => {}
        BodyParams::Skipped(reason) => {
            debug!(%reason, "Body not decoded into parameters");
        }
    }

    Resolution {
        path: target.path,
        host,
        params,
    }
}
