//! A single named, typed field of an ABOUT record

use aboutcode_common::Issue;
use indexmap::IndexMap;
use std::path::Path;

use crate::kind::{path_keys, FieldKind};
use crate::paths;
use crate::value::FieldValue;

/// One field of a record.
///
/// The raw text is kept untouched in `original_value`; `validate` always
/// recomputes `value` and `errors` from it, so repeated calls with the same
/// base directory agree with each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    kind: FieldKind,
    original_value: String,
    value: FieldValue,
    present: bool,
    required: bool,
    errors: Vec<Issue>,
    resolved_paths: Vec<String>,
}

impl Field {
    /// Create a field from raw text. The name is stored lowercased.
    pub fn new(
        name: impl Into<String>,
        kind: FieldKind,
        original_value: impl Into<String>,
        present: bool,
    ) -> Self {
        let name = name.into().to_lowercase();
        let original_value = original_value.into();
        let value = if !present {
            kind.empty_value()
        } else if kind.is_path_like() {
            unresolved(kind, &original_value)
        } else {
            kind.validate(&name, &original_value, None).0
        };

        Self {
            name,
            kind,
            original_value,
            value,
            present,
            required: false,
            errors: Vec::new(),
            resolved_paths: Vec::new(),
        }
    }

    /// A field that was not seen in the source text.
    pub fn absent(name: impl Into<String>, kind: FieldKind) -> Self {
        Self::new(name, kind, String::new(), false)
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn original_value(&self) -> &str {
        &self.original_value
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Issues found by the last call to [`Field::validate`].
    pub fn errors(&self) -> &[Issue] {
        &self.errors
    }

    /// Locations computed by the last call to [`Field::resolve`].
    pub fn resolved_paths(&self) -> &[String] {
        &self.resolved_paths
    }

    /// Present with a non-empty value.
    pub fn has_content(&self) -> bool {
        self.present && !self.value.is_empty()
    }

    /// Recompute the value from the raw text and return the issues found.
    ///
    /// Absent fields validate to their empty value without issues.
    pub fn validate(&mut self, base_dir: Option<&Path>) -> Vec<Issue> {
        if !self.present {
            self.value = self.kind.empty_value();
            self.errors.clear();
            return Vec::new();
        }

        let (value, issues) = self.kind.validate(&self.name, &self.original_value, base_dir);
        self.value = value;
        self.errors = issues.clone();
        issues
    }

    /// Resolve every entry relative to the directory holding `about_file_path`.
    ///
    /// Only meaningful for the about_resource kind; other kinds keep an empty
    /// result.
    ///
    /// ```
    /// use aboutcode_fields::{Field, FieldKind};
    ///
    /// let mut field = Field::new(
    ///     "about_resource",
    ///     FieldKind::AboutResource,
    ///     ".\n../path1\npath2/path3/\n/path2/path3/\n",
    ///     true,
    /// );
    /// let resolved = field.resolve("some/dir/me.ABOUT");
    /// assert_eq!(resolved, ["some/dir", "some/path1", "some/dir/path2/path3"]);
    /// ```
    pub fn resolve(&mut self, about_file_path: &str) -> &[String] {
        self.resolved_paths = if self.kind == FieldKind::AboutResource {
            let parent = paths::parent(about_file_path);
            path_keys(self.kind, &self.original_value)
                .iter()
                .map(|key| paths::normalize(&paths::join(parent, key)))
                .collect()
        } else {
            Vec::new()
        };
        &self.resolved_paths
    }

    /// The value as written back into record text.
    ///
    /// Lists and path mappings become one entry per line. Flags keep the
    /// token the author wrote.
    pub fn serialized_value(&self) -> String {
        match &self.value {
            FieldValue::Text(text) => text.clone(),
            FieldValue::List(items) => items.join("\n"),
            FieldValue::Flag(_) => self.original_value.trim().to_string(),
            FieldValue::Paths(resolved) => resolved
                .keys()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

fn unresolved(kind: FieldKind, raw: &str) -> FieldValue {
    let entries: IndexMap<String, Option<String>> =
        path_keys(kind, raw).into_iter().map(|key| (key, None)).collect();
    FieldValue::Paths(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aboutcode_common::Severity;
    use std::fs;
    use tempfile::TempDir;

    fn fixture_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("license.LICENSE"), "some license text").unwrap();
        fs::write(dir.path().join("latin1.LICENSE"), [0x63u8, 0x61, 0x66, 0xe9]).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        dir
    }

    #[test]
    fn test_absent_field_has_empty_value() {
        let mut field = Field::absent("license", FieldKind::List);
        assert_eq!(field.value(), &FieldValue::List(Vec::new()));
        assert!(field.validate(None).is_empty());
        assert!(!field.has_content());
    }

    #[test]
    fn test_name_is_lowercased() {
        let field = Field::new("Name", FieldKind::SingleLine, "zlib", true);
        assert_eq!(field.name(), "name");
    }

    #[test]
    fn test_string_field_strips_trailing_whitespace() {
        let mut field = Field::new("description", FieldKind::String, "line1  \nline2\n\n", true);
        assert!(field.validate(None).is_empty());
        assert_eq!(field.value().as_text(), Some("line1\nline2"));
    }

    #[test]
    fn test_single_line_field_rejects_line_breaks() {
        let mut field = Field::new("s", FieldKind::SingleLine, "line1\n        line2", true);
        let errors = field.validate(None);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].severity, Severity::Critical);
        assert_eq!(
            errors[0].message,
            "Field s: Cannot span multiple lines: line1\n        line2"
        );
        assert_eq!(field.value().as_text(), Some("line1\n        line2"));
    }

    #[test]
    fn test_list_field_drops_empty_lines() {
        let mut field = Field::new("l", FieldKind::List, "  one\n\n two \n   \n", true);
        assert!(field.validate(None).is_empty());
        assert_eq!(
            field.value().as_list(),
            Some(&["one".to_string(), "two".to_string()][..])
        );
    }

    #[test]
    fn test_url_field_keeps_only_urls() {
        let mut field = Field::new("home_url", FieldKind::Url, "http://www.google.co.uk/", true);
        assert!(field.validate(None).is_empty());
        assert_eq!(
            field.value().as_list(),
            Some(&["http://www.google.co.uk/".to_string()][..])
        );

        let mut field = Field::new("home_url", FieldKind::Url, "google.com", true);
        assert!(field.validate(None).is_empty());
        assert!(field.value().is_empty());

        let mut field = Field::new("home_url", FieldKind::Url, "", true);
        assert!(field.validate(None).is_empty());
        assert!(field.value().is_empty());
    }

    #[test]
    fn test_path_field_resolves_existing_path() {
        let dir = fixture_dir();
        let mut field = Field::new("license_file", FieldKind::Path, "license.LICENSE", true);
        let errors = field.validate(Some(dir.path()));
        assert!(errors.is_empty());

        let expected = format!("{}/license.LICENSE", paths::to_posix(dir.path()));
        let resolved = field.value().as_paths().unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved["license.LICENSE"], Some(expected));
    }

    #[test]
    fn test_path_field_reports_missing_path() {
        let dir = fixture_dir();
        let mut field = Field::new("f", FieldKind::Path, "does.not.exist", true);
        let errors = field.validate(Some(dir.path()));
        assert_eq!(
            errors,
            vec![Issue::critical("Field f: Path does.not.exist not found")]
        );
        assert_eq!(field.value().as_paths().unwrap()["does.not.exist"], None);
    }

    #[test]
    fn test_path_field_without_base_dir() {
        let mut field = Field::new("s", FieldKind::Path, "string", true);
        let errors = field.validate(None);
        assert_eq!(
            errors,
            vec![Issue::error(
                "Field s: Unable to verify path: string: No base directory provided"
            )]
        );
        assert_eq!(field.value().as_paths().unwrap()["string"], None);
    }

    #[test]
    fn test_text_field_loads_content() {
        let dir = fixture_dir();
        let mut field = Field::new("license_file", FieldKind::Text, "license.LICENSE", true);
        assert!(field.validate(Some(dir.path())).is_empty());
        assert_eq!(
            field.value().as_paths().unwrap()["license.LICENSE"],
            Some("some license text".to_string())
        );
    }

    #[test]
    fn test_text_field_reports_undecodable_content() {
        let dir = fixture_dir();
        let mut field = Field::new("notice_file", FieldKind::Text, "latin1.LICENSE", true);
        let errors = field.validate(Some(dir.path()));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].is_critical());
        assert!(errors[0].message.starts_with("Field notice_file: Unable to read text file latin1.LICENSE"));
        assert_eq!(field.value().as_paths().unwrap()["latin1.LICENSE"], None);
    }

    #[test]
    fn test_validate_is_idempotent_for_every_kind() {
        let dir = fixture_dir();
        let cases = [
            (FieldKind::String, "text \n more "),
            (FieldKind::SingleLine, "a\nb"),
            (FieldKind::List, "a\n b\n"),
            (FieldKind::Url, "http://a.org\nnot a url"),
            (FieldKind::Boolean, "maybe"),
            (FieldKind::Path, "license.LICENSE\nmissing"),
            (FieldKind::Text, "license.LICENSE\nlatin1.LICENSE"),
            (FieldKind::AboutResource, "sub\nmissing/"),
        ];

        for (kind, raw) in cases {
            let mut field = Field::new("f", kind, raw, true);
            let first_errors = field.validate(Some(dir.path()));
            let first_value = field.value().clone();
            for _ in 0..3 {
                let errors = field.validate(Some(dir.path()));
                assert_eq!(errors, first_errors, "{:?}", kind);
                assert_eq!(field.errors(), &first_errors[..]);
                assert_eq!(field.value(), &first_value, "{:?}", kind);
            }
        }
    }

    #[test]
    fn test_about_resource_resolve_is_repeatable() {
        let mut field = Field::new("about_resource", FieldKind::AboutResource, ".", true);
        assert_eq!(field.resolve("complete/about.ABOUT"), ["complete"]);
        assert_eq!(field.resolve("complete/about.ABOUT"), ["complete"]);
        assert_eq!(field.resolve("about.ABOUT"), ["."]);
    }

    #[test]
    fn test_resolve_ignored_for_other_kinds() {
        let mut field = Field::new("license_file", FieldKind::Path, "a", true);
        assert!(field.resolve("x/y.ABOUT").is_empty());
    }

    #[test]
    fn test_serialized_values() {
        let mut flag = Field::new("redistribute", FieldKind::Boolean, " Yes ", true);
        flag.validate(None);
        assert_eq!(flag.value(), &FieldValue::Flag(true));
        assert_eq!(flag.serialized_value(), "Yes");

        let list = Field::new("license", FieldKind::List, "apache-2.0\n mit", true);
        assert_eq!(list.serialized_value(), "apache-2.0\nmit");

        let path = Field::new("license_file", FieldKind::Text, "a.LICENSE\n/b/\n", true);
        assert_eq!(path.serialized_value(), "a.LICENSE\nb");
    }
}
