//! Normalized field values

use indexmap::IndexMap;
use serde::Serialize;

/// The validated, normalized value of a field.
///
/// The shape depends on the field kind: string-like kinds hold text, list
/// and URL kinds hold an ordered sequence, boolean kinds hold a flag once a
/// valid token was read, and path-like kinds hold an ordered mapping from
/// each relative path to what it resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Flag(bool),
    Paths(IndexMap<String, Option<String>>),
}

impl FieldValue {
    /// True when there is nothing in the value. A flag is never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Flag(_) => false,
            FieldValue::Paths(paths) => paths.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_paths(&self) -> Option<&IndexMap<String, Option<String>>> {
        match self {
            FieldValue::Paths(paths) => Some(paths),
            _ => None,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}
