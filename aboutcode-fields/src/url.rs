//! URL shape check used by URL fields

use regex::Regex;
use std::sync::OnceLock;

/// Accepted URL shape: an http, https or ftp scheme followed by a host.
static URL_REGEX: OnceLock<Regex> = OnceLock::new();

fn url_regex() -> &'static Regex {
    URL_REGEX.get_or_init(|| {
        Regex::new(r"^(?i:https?|ftp)://[^\s/?#]+").expect("Invalid URL shape regex")
    })
}

/// Check that a string looks like a URL.
///
/// Only the scheme and the presence of a host are checked. Hosts without
/// `www.` or without a well-known top level domain are accepted.
///
/// ```
/// use aboutcode_fields::is_valid_url;
///
/// assert!(is_valid_url("http://www.google.co.uk/"));
/// assert!(is_valid_url("https://nexb.com"));
/// assert!(!is_valid_url("google.com"));
/// assert!(!is_valid_url("http:"));
/// ```
pub fn is_valid_url(candidate: &str) -> bool {
    url_regex().is_match(candidate)
}
