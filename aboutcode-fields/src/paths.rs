//! Posix path helpers
//!
//! ABOUT records always spell paths with forward slashes, whatever the host
//! platform. These helpers do lexical manipulation only and never touch the
//! filesystem.

use std::path::Path;

/// Convert a native path into a forward-slash string.
pub fn to_posix(path: &Path) -> String {
    let text = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        text.into_owned()
    } else {
        text.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

/// Lexically normalize a posix path: collapse `.` and empty segments and
/// fold `..` into its parent where possible.
///
/// ```
/// use aboutcode_fields::paths::normalize;
///
/// assert_eq!(normalize("some/dir/."), "some/dir");
/// assert_eq!(normalize("some/dir/../path1"), "some/path1");
/// assert_eq!(normalize("../a"), "../a");
/// assert_eq!(normalize("/a//b/"), "/a/b");
/// assert_eq!(normalize(""), ".");
/// ```
pub fn normalize(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if absolute => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    match (absolute, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Join two posix paths without normalizing.
pub fn join(base: &str, path: &str) -> String {
    if base.is_empty() {
        return path.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), path)
}

/// Parent directory of a posix path, empty when there is none.
pub fn parent(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(index) => &path[..index],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent() {
        assert_eq!(parent("some/dir/me.ABOUT"), "some/dir");
        assert_eq!(parent("me.ABOUT"), "");
        assert_eq!(parent("/me.ABOUT"), "/");
    }

    #[test]
    fn test_join() {
        assert_eq!(join("base/", "file"), "base/file");
        assert_eq!(join("base", "file"), "base/file");
        assert_eq!(join("", "file"), "file");
    }

    #[test]
    fn test_normalize_parent_past_root() {
        assert_eq!(normalize("/../a"), "/a");
        assert_eq!(normalize("a/../../b"), "../b");
        assert_eq!(normalize("."), ".");
    }
}
