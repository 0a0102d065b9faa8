//! Collect ABOUT records from a file or a directory tree

use aboutcode_common::{is_about_file, Issue, Severity};
use aboutcode_fields::paths;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::about::About;

/// Load every ABOUT record found at `location`.
///
/// A file is loaded on its own; a directory is walked recursively in file
/// name order. Each record's `about_file_path` starts with the final
/// component of the collection root. Each record's issues are returned
/// unchanged, in discovery order.
pub fn collect_inventory(location: impl AsRef<Path>) -> (Vec<Issue>, Vec<About>) {
    let root = absolute_root(location.as_ref());
    let mut errors = Vec::new();
    let mut abouts = Vec::new();

    if root.is_file() {
        let about_file_path = single_file_path(&root);
        collect_one(&root, about_file_path, &mut errors, &mut abouts);
        return (errors, abouts);
    }

    let root_name = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let issue = Issue::critical(format!(
                    "Cannot collect inventory from {}: {}",
                    root.display(),
                    e
                ));
                log_issue(&issue, &root.to_string_lossy());
                errors.push(issue);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        let Some(file_name) = entry.file_name().to_str() else {
            continue;
        };
        if !is_about_file(file_name) {
            continue;
        }

        let relative = entry.path().strip_prefix(&root).unwrap_or(entry.path());
        let relative = paths::to_posix(relative);
        let about_file_path = match &root_name {
            Some(root_name) => format!("{}/{}", root_name, relative),
            None => relative,
        };
        collect_one(entry.path(), about_file_path, &mut errors, &mut abouts);
    }

    tracing::debug!(
        root = %root.display(),
        records = abouts.len(),
        errors = errors.len(),
        "collected inventory"
    );
    (errors, abouts)
}

fn collect_one(
    location: &Path,
    about_file_path: String,
    errors: &mut Vec<Issue>,
    abouts: &mut Vec<About>,
) {
    let about = About::from_location(location, Some(&about_file_path));
    for issue in about.errors() {
        log_issue(issue, &about_file_path);
        errors.push(issue.clone());
    }
    abouts.push(about);
}

fn absolute_root(location: &Path) -> PathBuf {
    let location = if location.as_os_str().is_empty() {
        Path::new(".")
    } else {
        location
    };
    std::fs::canonicalize(location)
        .or_else(|_| std::path::absolute(location))
        .unwrap_or_else(|_| location.to_path_buf())
}

fn single_file_path(location: &Path) -> String {
    let file_name = location
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let parent_name = location
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned());
    match parent_name {
        Some(parent_name) => format!("{}/{}", parent_name, file_name),
        None => file_name,
    }
}

fn log_issue(issue: &Issue, about_file_path: &str) {
    match issue.severity {
        Severity::Critical | Severity::Error => {
            tracing::error!(about_file_path = %about_file_path, "{}", issue)
        }
        Severity::Warning => tracing::warn!(about_file_path = %about_file_path, "{}", issue),
        Severity::Info => tracing::debug!(about_file_path = %about_file_path, "{}", issue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_file_path_keeps_parent_name() {
        assert_eq!(
            single_file_path(Path::new("/tmp/thirdparty/zlib.ABOUT")),
            "thirdparty/zlib.ABOUT"
        );
        assert_eq!(single_file_path(Path::new("/zlib.ABOUT")), "zlib.ABOUT");
    }

    #[test]
    fn test_empty_root_is_current_dir() {
        let root = absolute_root(Path::new(""));
        assert!(root.is_absolute());
        assert_eq!(root, absolute_root(Path::new(".")));
    }
}
