//! Query-string, form and JSON parameter decoding
//!
//! Body decoding never fails: anything that cannot be turned into
//! parameters comes back as [`BodyParams::Skipped`] with the reason, and the
//! caller keeps whatever it already resolved.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use super::{ParamMap, ParamValue};
use crate::http::{MIME_FORM, MIME_JSON};

/// Why a body contributed no parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No body at all
    Empty,
    /// Body present but its media type is not decoded into parameters
    UnsupportedContentType(String),
    /// JSON media type, but the body does not parse
    InvalidJson(String),
    /// Valid JSON whose top-level value is not an object
    NotAnObject,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Empty => write!(f, "empty body"),
            SkipReason::UnsupportedContentType(ct) if ct.is_empty() => {
                write!(f, "no content type")
            }
            SkipReason::UnsupportedContentType(ct) => {
                write!(f, "content type '{}' is not decoded", ct)
            }
            SkipReason::InvalidJson(msg) => write!(f, "invalid JSON: {}", msg),
            SkipReason::NotAnObject => write!(f, "JSON body is not an object"),
        }
    }
}

/// Outcome of decoding a request body into parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyParams {
    Decoded(ParamMap),
    Skipped(SkipReason),
}

impl BodyParams {
    /// The decoded parameters, or an empty map when skipped
    pub fn into_params(self) -> ParamMap {
        match self {
            BodyParams::Decoded(params) => params,
            BodyParams::Skipped(_) => ParamMap::new(),
        }
    }
}

/// Reduce a Content-Type header to its lower-cased media type
///
/// `application/JSON; charset=utf-8` becomes `application/json`.
pub fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Decode `application/x-www-form-urlencoded` text (query strings included)
///
/// `+` becomes a space and percent escapes are decoded. Pairs with an empty
/// value are dropped. A key seen more than once yields a list.
pub fn decode_urlencoded(input: &str) -> ParamMap {
    let mut grouped: IndexMap<String, Vec<String>> = IndexMap::new();

    for (key, value) in url::form_urlencoded::parse(input.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        grouped
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }

    grouped
        .into_iter()
        .map(|(key, values)| (key, ParamValue::from_values(values)))
        .collect()
}

/// Decode a JSON object body into parameters
pub fn decode_json(body: &str) -> BodyParams {
    let value: JsonValue = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => return BodyParams::Skipped(SkipReason::InvalidJson(e.to_string())),
    };

    let JsonValue::Object(object) = value else {
        return BodyParams::Skipped(SkipReason::NotAnObject);
    };

    BodyParams::Decoded(
        object
            .into_iter()
            .map(|(key, value)| (key, json_to_param(value)))
            .collect(),
    )
}

/// Decode a body according to its (already normalized) media type
pub fn decode_body(media_type: &str, body: &str) -> BodyParams {
    if body.is_empty() {
        return BodyParams::Skipped(SkipReason::Empty);
    }

    match media_type {
        MIME_JSON => decode_json(body),
        MIME_FORM => BodyParams::Decoded(decode_urlencoded(body)),
        other => BodyParams::Skipped(SkipReason::UnsupportedContentType(other.to_string())),
    }
}

fn json_to_param(value: JsonValue) -> ParamValue {
    match value {
        JsonValue::String(s) => ParamValue::Scalar(s),
        JsonValue::Array(items) if items.iter().all(is_leaf) => {
            ParamValue::List(items.iter().map(leaf_text).collect())
        }
        other => ParamValue::Scalar(leaf_text(&other)),
    }
}

fn is_leaf(value: &JsonValue) -> bool {
    !matches!(value, JsonValue::Array(_) | JsonValue::Object(_))
}

/// Text form of a JSON value: strings unquoted, everything else compact JSON
fn leaf_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}
