//! Field kinds and their validation rules
//!
//! Every kind validates as a pure function of the raw text and an optional
//! base directory, so validating the same input twice always yields the same
//! value and the same issues.

use aboutcode_common::Issue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::paths;
use crate::url::is_valid_url;
use crate::value::FieldValue;

const TRUE_TOKENS: [&str; 3] = ["yes", "true", "y"];
const FALSE_TOKENS: [&str; 3] = ["no", "false", "n"];

/// The kind of a field. Decides how its raw text is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    /// Free text, trailing whitespace removed
    String,
    /// Text that must fit on one line
    SingleLine,
    /// One stripped item per non-empty line
    List,
    /// A list whose items must look like URLs
    Url,
    /// A yes/no flag
    Boolean,
    /// Relative paths checked against a base directory
    Path,
    /// Relative paths whose file content is loaded
    Text,
    /// Relative paths resolved against the record's own directory
    AboutResource,
}

impl FieldKind {
    /// The value a field of this kind holds before anything was read.
    pub fn empty_value(self) -> FieldValue {
        match self {
            FieldKind::String | FieldKind::SingleLine | FieldKind::Boolean => {
                FieldValue::Text(String::new())
            }
            FieldKind::List | FieldKind::Url => FieldValue::List(Vec::new()),
            FieldKind::Path | FieldKind::Text | FieldKind::AboutResource => {
                FieldValue::Paths(IndexMap::new())
            }
        }
    }

    /// True for kinds whose value maps relative paths to locations.
    pub fn is_path_like(self) -> bool {
        matches!(
            self,
            FieldKind::Path | FieldKind::Text | FieldKind::AboutResource
        )
    }

    /// Normalize `raw` into a value, reporting problems as issues.
    ///
    /// `base_dir` is only consulted by path-like kinds.
    pub fn validate(
        self,
        name: &str,
        raw: &str,
        base_dir: Option<&Path>,
    ) -> (FieldValue, Vec<Issue>) {
        match self {
            FieldKind::String => (FieldValue::Text(normalize_text(raw)), Vec::new()),
            FieldKind::SingleLine => validate_single_line(name, raw),
            FieldKind::List => (FieldValue::List(split_lines(raw)), Vec::new()),
            FieldKind::Url => validate_urls(raw),
            FieldKind::Boolean => validate_flag(name, raw),
            FieldKind::Path | FieldKind::AboutResource => {
                validate_paths(self, name, raw, base_dir, false)
            }
            FieldKind::Text => validate_paths(self, name, raw, base_dir, true),
        }
    }
}

/// Strip trailing whitespace from every line and from the whole value.
fn normalize_text(raw: &str) -> String {
    raw.lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}

/// Split on line breaks, strip each line, drop the empty ones.
fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Candidate paths of a path-like value, deduplicated in first-seen order.
///
/// Only `about_resource` entries have surrounding slashes removed, so that
/// `path/` and `/path` name the same resource.
pub(crate) fn path_keys(kind: FieldKind, raw: &str) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for line in split_lines(raw) {
        let key = if kind == FieldKind::AboutResource {
            let trimmed = line.trim_matches('/');
            if trimmed.is_empty() { "." } else { trimmed }.to_string()
        } else {
            line
        };
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    keys
}

fn validate_single_line(name: &str, raw: &str) -> (FieldValue, Vec<Issue>) {
    let value = normalize_text(raw);
    let mut issues = Vec::new();
    if value.contains('\n') || value.contains('\r') {
        issues.push(Issue::critical(format!(
            "Field {}: Cannot span multiple lines: {}",
            name, value
        )));
    }
    (FieldValue::Text(value), issues)
}

fn validate_urls(raw: &str) -> (FieldValue, Vec<Issue>) {
    let urls = split_lines(raw)
        .into_iter()
        .filter(|candidate| {
            let valid = is_valid_url(candidate);
            if !valid {
                tracing::trace!(url = %candidate, "dropping value that is not a URL");
            }
            valid
        })
        .collect();
    (FieldValue::List(urls), Vec::new())
}

fn validate_flag(name: &str, raw: &str) -> (FieldValue, Vec<Issue>) {
    let value = normalize_text(raw);
    let token = value.trim().to_lowercase();
    if token.is_empty() {
        return (FieldValue::Text(value), Vec::new());
    }
    if TRUE_TOKENS.contains(&token.as_str()) {
        return (FieldValue::Flag(true), Vec::new());
    }
    if FALSE_TOKENS.contains(&token.as_str()) {
        return (FieldValue::Flag(false), Vec::new());
    }
    let issue = Issue::critical(format!(
        "Field {}: Invalid flag value: {}: expected one of yes, y, true, no, n, false",
        name, value
    ));
    (FieldValue::Text(value), vec![issue])
}

fn validate_paths(
    kind: FieldKind,
    name: &str,
    raw: &str,
    base_dir: Option<&Path>,
    load_text: bool,
) -> (FieldValue, Vec<Issue>) {
    let mut resolved = IndexMap::new();
    let mut issues = Vec::new();

    for key in path_keys(kind, raw) {
        let Some(base_dir) = base_dir else {
            issues.push(Issue::error(format!(
                "Field {}: Unable to verify path: {}: No base directory provided",
                name, key
            )));
            resolved.insert(key, None);
            continue;
        };

        let location = paths::join(&paths::to_posix(base_dir), &key);
        if !Path::new(&location).exists() {
            issues.push(Issue::critical(format!(
                "Field {}: Path {} not found",
                name, key
            )));
            resolved.insert(key, None);
            continue;
        }

        if !load_text {
            resolved.insert(key, Some(location));
            continue;
        }

        match read_text(&location) {
            Ok(text) => {
                resolved.insert(key, Some(text));
            }
            Err(reason) => {
                issues.push(Issue::critical(format!(
                    "Field {}: Unable to read text file {}: {}",
                    name, key, reason
                )));
                resolved.insert(key, None);
            }
        }
    }

    (FieldValue::Paths(resolved), issues)
}

fn read_text(location: &str) -> Result<String, String> {
    let bytes = std::fs::read(location).map_err(|e| e.to_string())?;
    String::from_utf8(bytes).map_err(|e| format!("UnicodeDecodeError: {}", e.utf8_error()))
}
