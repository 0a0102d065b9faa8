//! Shared constants for the ABOUT record format

/// File name suffix identifying an ABOUT record, compared case-insensitively.
pub const ABOUT_FILE_EXTENSION: &str = ".ABOUT";

/// Reserved key carrying a record's own path relative to the collection root.
pub const ABOUT_FILE_PATH_ATTR: &str = "about_file_path";

/// Reserved key carrying the resolved location of the documented resource.
pub const ABOUT_RESOURCE_PATH_ATTR: &str = "about_resource_path";

/// Returns true when `file_name` names an ABOUT record.
///
/// ```
/// use aboutcode_common::constants::is_about_file;
///
/// assert!(is_about_file("zlib.ABOUT"));
/// assert!(is_about_file("basic.about"));
/// assert!(is_about_file(".ABOUT"));
/// assert!(!is_about_file("README"));
/// ```
pub fn is_about_file(file_name: &str) -> bool {
    file_name
        .to_lowercase()
        .ends_with(&ABOUT_FILE_EXTENSION.to_lowercase())
}
