//! Parameter values and the ordered parameter map

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// A resolved parameter value
///
/// Single occurrences stay scalar; a key repeated within one source keeps
/// every value in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Scalar(String),
    List(Vec<String>),
}

impl ParamValue {
    pub fn scalar(value: impl Into<String>) -> Self {
        ParamValue::Scalar(value.into())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ParamValue::List(values.into_iter().map(Into::into).collect())
    }

    /// Collapse the values collected for one key: one value stays scalar
    pub(crate) fn from_values(mut values: Vec<String>) -> Self {
        if values.len() == 1 {
            ParamValue::Scalar(values.remove(0))
        } else {
            ParamValue::List(values)
        }
    }
}

/// Lists render as `[a, b]`; scalars render verbatim
impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Scalar(s) => f.write_str(s),
            ParamValue::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Scalar(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Scalar(s)
    }
}

/// Insertion-ordered parameters. Inserting an existing key replaces its
/// value without moving it.
pub type ParamMap = IndexMap<String, ParamValue>;

/// Merge `later` into `params`; later values win on key collision
pub fn merge(params: &mut ParamMap, later: ParamMap) {
    params.extend(later);
}
