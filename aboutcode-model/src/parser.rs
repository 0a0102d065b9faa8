//! Line parser for ABOUT record text
//!
//! A record is a sequence of `name: value` lines. A line starting with a
//! single space continues the value of the field above it. A blank line
//! closes the open field. Anything else is reported as an invalid line and
//! skipped without disturbing the open field.

use aboutcode_common::Issue;
use regex::Regex;
use std::sync::OnceLock;

static FIELD_START_REGEX: OnceLock<Regex> = OnceLock::new();
static FIELD_NAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn field_start_regex() -> &'static Regex {
    FIELD_START_REGEX.get_or_init(|| {
        Regex::new(r"^([A-Za-z][A-Za-z0-9_]*):(.*)$").expect("Invalid field start regex")
    })
}

fn field_name_regex() -> &'static Regex {
    FIELD_NAME_REGEX
        .get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("Invalid field name regex"))
}

/// True when `name` is an ASCII identifier usable as a field name.
pub fn is_valid_field_name(name: &str) -> bool {
    field_name_regex().is_match(name)
}

/// Split text into lines, keeping each line terminator.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Parse record lines into ordered `(name, value)` pairs.
///
/// Names keep the case they were written in. Issue messages carry the
/// zero-based index of the offending physical line.
///
/// ```
/// use aboutcode_model::parse;
///
/// let lines = ["name: zlib\n", "notes: one\n", " two\n"];
/// let (errors, pairs) = parse(&lines);
/// assert!(errors.is_empty());
/// assert_eq!(
///     pairs,
///     vec![
///         ("name".to_string(), "zlib".to_string()),
///         ("notes".to_string(), "one\ntwo".to_string()),
///     ]
/// );
/// ```
pub fn parse<S: AsRef<str>>(lines: &[S]) -> (Vec<Issue>, Vec<(String, String)>) {
    let mut errors = Vec::new();
    let mut pairs = Vec::new();
    let mut open: Option<(String, String)> = None;

    for (index, raw) in lines.iter().enumerate() {
        let raw = raw.as_ref();
        let line = strip_terminator(raw);

        if line.trim().is_empty() && !line.starts_with(' ') {
            pairs.extend(open.take());
            continue;
        }

        if let Some(continuation) = line.strip_prefix(' ') {
            match open.as_mut() {
                Some((_, value)) => {
                    value.push('\n');
                    value.push_str(continuation);
                }
                None => errors.push(Issue::critical(format!(
                    "Invalid continuation line: {}: {:?}",
                    index, raw
                ))),
            }
            continue;
        }

        match field_start_regex().captures(line) {
            Some(captures) => {
                pairs.extend(open.take());
                let name = captures[1].to_string();
                let value = captures[2].trim_start().to_string();
                open = Some((name, value));
            }
            None => {
                tracing::trace!(index, line = %line, "rejecting invalid record line");
                errors.push(Issue::critical(format!("Invalid line: {}: {:?}", index, raw)));
            }
        }
    }

    pairs.extend(open);
    (errors, pairs)
}

fn strip_terminator(raw: &str) -> &str {
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    line.strip_suffix('\r').unwrap_or(line)
}
