//! The ABOUT descriptor: one documented component
//!
//! An [`About`] owns one [`Field`] per well-known name, in a fixed canonical
//! order, plus any custom fields found in the source text. Records are
//! populated by hydration, checked by validation and written back out with
//! [`About::dumps`] or projected with [`About::as_dict`].

use aboutcode_common::{
    AboutCodeError, Issue, Result, Severity, ABOUT_FILE_PATH_ATTR, ABOUT_RESOURCE_PATH_ATTR,
};
use aboutcode_fields::{paths, Field, FieldKind};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

use crate::parser::{is_valid_field_name, parse, split_lines};

/// Well-known fields in canonical order with their kinds.
pub const WELL_KNOWN_FIELDS: &[(&str, FieldKind)] = &[
    ("about_resource", FieldKind::AboutResource),
    ("name", FieldKind::SingleLine),
    ("version", FieldKind::SingleLine),
    ("download_url", FieldKind::Url),
    ("description", FieldKind::String),
    ("home_url", FieldKind::Url),
    ("notes", FieldKind::String),
    ("license", FieldKind::List),
    ("license_name", FieldKind::List),
    ("license_file", FieldKind::Text),
    ("license_url", FieldKind::Url),
    ("copyright", FieldKind::String),
    ("notice_file", FieldKind::Text),
    ("notice_url", FieldKind::Url),
    ("redistribute", FieldKind::Boolean),
    ("attribute", FieldKind::Boolean),
    ("track_change", FieldKind::Boolean),
    ("modified", FieldKind::Boolean),
    ("changelog_file", FieldKind::Text),
    ("owner", FieldKind::String),
    ("owner_url", FieldKind::Url),
    ("contact", FieldKind::List),
    ("author", FieldKind::List),
    ("vcs_tool", FieldKind::SingleLine),
    ("vcs_repository", FieldKind::SingleLine),
    ("vcs_path", FieldKind::SingleLine),
    ("vcs_tag", FieldKind::SingleLine),
    ("vcs_branch", FieldKind::SingleLine),
    ("vcs_revision", FieldKind::SingleLine),
    ("checksum", FieldKind::String),
    ("spec_version", FieldKind::SingleLine),
];

/// Fields every record must carry with a non-empty value.
pub const REQUIRED_FIELDS: &[&str] = &["about_resource", "name"];

/// The kind of a well-known field, `None` for custom names.
pub fn well_known_kind(name: &str) -> Option<FieldKind> {
    WELL_KNOWN_FIELDS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, kind)| *kind)
}

fn blank_field(name: &str, kind: FieldKind) -> Field {
    Field::absent(name, kind).with_required(REQUIRED_FIELDS.contains(&name))
}

/// One ABOUT record.
#[derive(Debug, Clone)]
pub struct About {
    fields: Vec<Field>,
    custom_fields: IndexMap<String, Field>,
    hydrate_errors: Vec<Issue>,
    errors: Vec<Issue>,
    about_file_path: Option<String>,
    location: Option<PathBuf>,
    base_dir: Option<PathBuf>,
}

impl Default for About {
    fn default() -> Self {
        Self::new()
    }
}

impl About {
    /// An empty record with every well-known field absent.
    pub fn new() -> Self {
        Self {
            fields: WELL_KNOWN_FIELDS
                .iter()
                .map(|(name, kind)| blank_field(name, *kind))
                .collect(),
            custom_fields: IndexMap::new(),
            hydrate_errors: Vec::new(),
            errors: Vec::new(),
            about_file_path: None,
            location: None,
            base_dir: None,
        }
    }

    /// Read, hydrate and validate the record stored at `location`.
    ///
    /// `about_file_path` is the record's path relative to a collection root;
    /// it defaults to the file name.
    pub fn from_location(location: impl AsRef<Path>, about_file_path: Option<&str>) -> Self {
        let location = location.as_ref();
        let mut about = Self::new();
        about.about_file_path = Some(match about_file_path {
            Some(path) => path.to_string(),
            None => location
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| paths::to_posix(location)),
        });
        about.load(location);
        about
    }

    /// Load the record text stored at `location`, then validate it against
    /// the directory holding the file.
    ///
    /// A file that cannot be read or decoded leaves the record empty with a
    /// single critical issue.
    pub fn load(&mut self, location: &Path) -> &[Issue] {
        self.location = Some(location.to_path_buf());
        tracing::debug!(path = %location.display(), "loading ABOUT file");

        let text = match std::fs::read(location) {
            Ok(bytes) => String::from_utf8(bytes)
                .map_err(|e| format!("UnicodeDecodeError: {}", e.utf8_error())),
            Err(e) => Err(e.to_string()),
        };

        let text = match text {
            Ok(text) => text,
            Err(reason) => {
                self.reset();
                self.hydrate_errors = vec![Issue::critical(format!(
                    "Cannot load invalid ABOUT file: {}: {}",
                    location.display(),
                    reason
                ))];
                self.errors = self.hydrate_errors.clone();
                return &self.errors;
            }
        };

        let (mut errors, pairs) = parse(&split_lines(&text));
        errors.extend(self.hydrate(pairs));
        self.hydrate_errors = errors;

        let base_dir = location.parent().map(Path::to_path_buf);
        self.validate(base_dir.as_deref())
    }

    /// Parse, hydrate and validate record text.
    pub fn loads(&mut self, text: &str, base_dir: Option<&Path>) -> &[Issue] {
        let (mut errors, pairs) = parse(&split_lines(text));
        errors.extend(self.hydrate(pairs));
        self.hydrate_errors = errors;
        self.validate(base_dir)
    }

    /// Hydrate from a name to value mapping and validate.
    ///
    /// The reserved `about_file_path` key sets the record's relative path;
    /// `about_resource_path` is derived and ignored on input.
    pub fn load_dict<K, V>(
        &mut self,
        mapping: impl IntoIterator<Item = (K, V)>,
        base_dir: Option<&Path>,
    ) -> &[Issue]
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut pairs = Vec::new();
        for (name, value) in mapping {
            let name = name.into();
            let value = value.into();
            match name.to_lowercase().as_str() {
                ABOUT_FILE_PATH_ATTR => {
                    if !value.trim().is_empty() {
                        self.about_file_path = Some(value.trim().to_string());
                    }
                }
                ABOUT_RESOURCE_PATH_ATTR => {}
                _ => pairs.push((name, value)),
            }
        }
        self.hydrate_errors = self.hydrate(pairs);
        self.validate(base_dir)
    }

    /// Bind parsed pairs to fields, returning the issues found.
    ///
    /// Every call starts from a blank record: well-known fields are reset and
    /// custom fields cleared. When a name repeats the later value wins.
    pub fn hydrate(&mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Vec<Issue> {
        self.reset();
        let mut errors = Vec::new();
        let mut seen: IndexMap<String, String> = IndexMap::new();

        for (name, value) in pairs {
            if !is_valid_field_name(&name) {
                errors.push(Issue::critical(format!(
                    "Field name: {:?} contains illegal name characters: 0 to 9, a to z, A to Z and _.",
                    name
                )));
                continue;
            }

            let key = name.to_lowercase();
            if let Some(previous) = seen.get(&key) {
                if *previous == value {
                    errors.push(Issue::info(format!(
                        "Field {} is a duplicate with the same value as before.",
                        name
                    )));
                } else {
                    errors.push(Issue::warning(format!(
                        "Field {} is a duplicate. Original value: \"{}\" replaced with: \"{}\"",
                        name, previous, value
                    )));
                }
            }
            seen.insert(key.clone(), value.clone());

            match well_known_kind(&key) {
                Some(kind) => {
                    if let Some(slot) = self.fields.iter_mut().find(|f| f.name() == key) {
                        *slot = Field::new(key.as_str(), kind, value, true)
                            .with_required(REQUIRED_FIELDS.contains(&key.as_str()));
                    }
                }
                None => {
                    if !self.custom_fields.contains_key(&key) {
                        errors.push(Issue::info(format!("Field {} is a custom field", key)));
                    }
                    self.custom_fields.insert(
                        key.clone(),
                        Field::new(key.as_str(), FieldKind::String, value, true),
                    );
                }
            }
        }

        self.hydrate_errors = errors.clone();
        self.errors = errors.clone();
        errors
    }

    /// Validate every field and return all issues of the record.
    ///
    /// `about_resource` is resolved against the directory holding the record
    /// file when it is known, other path fields against `base_dir`. The
    /// returned list starts with the issues found while hydrating.
    pub fn validate(&mut self, base_dir: Option<&Path>) -> &[Issue] {
        self.base_dir = base_dir.map(Path::to_path_buf);
        let record_dir = self
            .location
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf);
        let path_base = base_dir.map(Path::to_path_buf).or_else(|| record_dir.clone());
        let resource_base = record_dir.or_else(|| base_dir.map(Path::to_path_buf));

        let mut errors = Vec::new();
        for field in self.fields.iter_mut() {
            let dir = if field.kind() == FieldKind::AboutResource {
                resource_base.as_deref()
            } else {
                path_base.as_deref()
            };
            errors.extend(validate_field(field, dir));
            if field.kind() == FieldKind::AboutResource {
                if let Some(about_file_path) = &self.about_file_path {
                    field.resolve(about_file_path);
                }
            }
        }
        for field in self.custom_fields.values_mut() {
            errors.extend(validate_field(field, path_base.as_deref()));
        }

        tracing::trace!(
            errors = errors.len(),
            about_file_path = ?self.about_file_path,
            "validated ABOUT record"
        );

        self.errors = self.hydrate_errors.clone();
        self.errors.extend(errors);
        &self.errors
    }

    fn reset(&mut self) {
        for field in self.fields.iter_mut() {
            *field = blank_field(field.name(), field.kind());
        }
        self.custom_fields.clear();
    }

    /// Issues from the last hydration and validation.
    pub fn errors(&self) -> &[Issue] {
        &self.errors
    }

    /// True when any issue makes the record unusable for output.
    pub fn has_critical(&self) -> bool {
        self.errors.iter().any(Issue::is_critical)
    }

    /// Highest severity among the record's issues.
    pub fn max_severity(&self) -> Option<Severity> {
        self.errors.iter().map(|issue| issue.severity).max()
    }

    pub fn about_file_path(&self) -> Option<&str> {
        self.about_file_path.as_deref()
    }

    pub fn set_about_file_path(&mut self, about_file_path: impl Into<String>) {
        self.about_file_path = Some(about_file_path.into());
    }

    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    /// Base directory used by the last validation.
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// A well-known or custom field by (case-insensitive) name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        let key = name.to_lowercase();
        self.fields
            .iter()
            .find(|field| field.name() == key)
            .or_else(|| self.custom_fields.get(&key))
    }

    /// Serialized value of a field, empty when unknown.
    pub fn value_of(&self, name: &str) -> String {
        self.field(name)
            .map(Field::serialized_value)
            .unwrap_or_default()
    }

    pub fn custom_fields(&self) -> &IndexMap<String, Field> {
        &self.custom_fields
    }

    /// Well-known fields in canonical order, then custom fields in the order
    /// they were first seen.
    pub fn all_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().chain(self.custom_fields.values())
    }

    /// Fields kept by serialization under the given selection flags.
    pub fn selected_fields(&self, with_absent: bool, with_empty: bool) -> impl Iterator<Item = &Field> {
        self.all_fields()
            .filter(move |field| is_selected(field, with_absent, with_empty))
    }

    /// Serialize to record text.
    ///
    /// Multi-line values continue on lines starting with one space. The usual
    /// flags are `with_absent = false, with_empty = true`.
    ///
    /// ```
    /// use aboutcode_model::About;
    ///
    /// let mut about = About::new();
    /// about.loads("about_resource: .\nname: AboutCode\nversion: 0.11.0\ncustom1: multi\n line\n", None);
    /// assert_eq!(
    ///     about.dumps(false, false),
    ///     "about_resource: .\nname: AboutCode\nversion: 0.11.0\ncustom1: multi\n line\n"
    /// );
    /// ```
    pub fn dumps(&self, with_absent: bool, with_empty: bool) -> String {
        let mut out = String::new();
        for field in self.selected_fields(with_absent, with_empty) {
            let value = field.serialized_value();
            if value.is_empty() {
                out.push_str(&format!("{}:\n", field.name()));
            } else {
                out.push_str(&format!("{}: {}\n", field.name(), value.replace('\n', "\n ")));
            }
        }
        out
    }

    /// Write [`About::dumps`] output to `location`, creating parent directories.
    pub fn dump(&self, location: &Path, with_absent: bool, with_empty: bool) -> Result<()> {
        if let Some(parent) = location.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| AboutCodeError::file_write(parent, e))?;
            }
        }
        std::fs::write(location, self.dumps(with_absent, with_empty))
            .map_err(|e| AboutCodeError::file_write(location, e))?;
        tracing::debug!(path = %location.display(), "wrote ABOUT file");
        Ok(())
    }

    /// Project the record to an ordered name to text mapping.
    ///
    /// With `with_paths` the reserved `about_file_path` and
    /// `about_resource_path` keys come first.
    pub fn as_dict(
        &self,
        with_paths: bool,
        with_empty: bool,
        with_absent: bool,
    ) -> IndexMap<String, String> {
        let mut dict = IndexMap::new();
        if with_paths {
            dict.insert(
                ABOUT_FILE_PATH_ATTR.to_string(),
                self.about_file_path.clone().unwrap_or_default(),
            );
            dict.insert(
                ABOUT_RESOURCE_PATH_ATTR.to_string(),
                self.resource_paths().join("\n"),
            );
        }
        for field in self.selected_fields(with_absent, with_empty) {
            dict.insert(field.name().to_string(), field.serialized_value());
        }
        dict
    }

    /// Locations of the documented resources relative to the collection root.
    pub fn resource_paths(&self) -> &[String] {
        self.fields
            .iter()
            .find(|field| field.kind() == FieldKind::AboutResource)
            .map(Field::resolved_paths)
            .unwrap_or_default()
    }

    /// License keys declared by the record, deduplicated in order.
    pub fn license_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = Vec::new();
        if let Some(licenses) = self.field("license").and_then(|f| f.value().as_list()) {
            for license in licenses {
                if !keys.contains(license) {
                    keys.push(license.clone());
                }
            }
        }
        keys
    }

    /// True when both records describe the same component and version.
    pub fn same_attribution(&self, other: &About) -> bool {
        self.value_of("name") == other.value_of("name")
            && self.value_of("version") == other.value_of("version")
    }
}

impl PartialEq for About {
    fn eq(&self, other: &Self) -> bool {
        self.as_dict(false, true, true) == other.as_dict(false, true, true)
    }
}

impl Eq for About {}

fn is_selected(field: &Field, with_absent: bool, with_empty: bool) -> bool {
    if field.is_required() {
        return true;
    }
    if field.is_present() {
        with_empty || !field.value().is_empty()
    } else {
        with_absent
    }
}

fn validate_field(field: &mut Field, base_dir: Option<&Path>) -> Vec<Issue> {
    let mut errors = Vec::new();
    if !field.is_present() {
        field.validate(None);
        if field.is_required() {
            errors.push(Issue::critical(format!("Field {} is required", field.name())));
        }
        return errors;
    }

    let field_errors = field.validate(base_dir);
    if field.value().is_empty() {
        if field.is_required() {
            errors.push(Issue::critical(format!(
                "Field {} is required and empty",
                field.name()
            )));
        } else {
            errors.push(Issue::warning(format!(
                "Field {} is present but empty",
                field.name()
            )));
        }
    }
    errors.extend(field_errors);
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn loaded(text: &str, base_dir: Option<&Path>) -> About {
        let mut about = About::new();
        about.loads(text, base_dir);
        about
    }

    #[test]
    fn test_new_record_has_every_well_known_field() {
        let about = About::new();
        let names: Vec<&str> = about.all_fields().map(Field::name).collect();
        let expected: Vec<&str> = WELL_KNOWN_FIELDS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, expected);
        assert!(about.field("about_resource").unwrap().is_required());
        assert!(about.field("name").unwrap().is_required());
        assert!(!about.field("version").unwrap().is_required());
    }

    #[test]
    fn test_missing_required_fields() {
        let about = loaded("version: 1.0\n", None);
        assert_eq!(
            about.errors(),
            &[
                Issue::critical("Field about_resource is required"),
                Issue::critical("Field name is required"),
            ]
        );
    }

    #[test]
    fn test_required_and_empty() {
        let dir = TempDir::new().unwrap();
        let about = loaded("about_resource:\nname: x\n", Some(dir.path()));
        assert_eq!(
            about.errors(),
            &[Issue::critical("Field about_resource is required and empty")]
        );
    }

    #[test]
    fn test_present_but_empty_warning() {
        let dir = TempDir::new().unwrap();
        let about = loaded("about_resource: .\nname: x\nversion:\ncustom:\n", Some(dir.path()));
        assert_eq!(
            about.errors(),
            &[
                Issue::info("Field custom is a custom field"),
                Issue::warning("Field version is present but empty"),
                Issue::warning("Field custom is present but empty"),
            ]
        );
    }

    #[test]
    fn test_duplicate_fields_with_different_case() {
        let dir = TempDir::new().unwrap();
        let about = loaded(
            "about_resource: .\nname: old\nName: new\nAbout_Resource: .\n",
            Some(dir.path()),
        );
        assert_eq!(
            about.errors(),
            &[
                Issue::warning(r#"Field Name is a duplicate. Original value: "old" replaced with: "new""#),
                Issue::info("Field About_Resource is a duplicate with the same value as before."),
            ]
        );
        assert_eq!(about.value_of("name"), "new");
    }

    #[test]
    fn test_hydrate_is_repeatable() {
        let pairs = vec![
            ("name".to_string(), "zlib".to_string()),
            ("Custom".to_string(), "x".to_string()),
        ];
        let mut about = About::new();
        let first = about.hydrate(pairs.clone());
        let snapshot = about.as_dict(false, true, true);
        for _ in 0..3 {
            assert_eq!(about.hydrate(pairs.clone()), first);
            assert_eq!(about.as_dict(false, true, true), snapshot);
        }
        assert_eq!(first, vec![Issue::info("Field custom is a custom field")]);
    }

    #[test]
    fn test_hydrate_clears_previous_custom_fields() {
        let mut about = About::new();
        about.hydrate(vec![("extra".to_string(), "1".to_string())]);
        about.hydrate(vec![("name".to_string(), "z".to_string())]);
        assert!(about.custom_fields().is_empty());
        assert_eq!(about.value_of("name"), "z");
    }

    #[test]
    fn test_load_dict_rejects_invalid_names() {
        let mut about = About::new();
        let errors = about
            .load_dict(
                [("name", "x"), ("bad-name", "y"), ("about_file_path", "a/b.ABOUT")],
                None,
            )
            .to_vec();
        assert!(errors.iter().any(|e| e.is_critical() && e.message.contains("bad-name")));
        assert!(about.field("bad-name").is_none());
        assert_eq!(about.about_file_path(), Some("a/b.ABOUT"));
    }

    #[test]
    fn test_validate_is_idempotent() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("apache.LICENSE"), "license text").unwrap();
        let mut about = loaded(
            "about_resource: .\nname: x\nlicense_file: apache.LICENSE\nnotice_file: missing\n",
            Some(dir.path()),
        );
        let first = about.errors().to_vec();
        assert_eq!(first, vec![Issue::critical("Field notice_file: Path missing not found")]);
        for _ in 0..3 {
            assert_eq!(about.validate(Some(dir.path())), &first[..]);
        }
    }

    #[test]
    fn test_dumps_selection_flags() {
        let about = loaded("about_resource: .\nname: n\nversion:\nnotes: a\n b\n", None);
        assert_eq!(
            about.dumps(false, false),
            "about_resource: .\nname: n\nnotes: a\n b\n"
        );
        assert_eq!(
            about.dumps(false, true),
            "about_resource: .\nname: n\nversion:\nnotes: a\n b\n"
        );
        let with_absent = about.dumps(true, false);
        assert!(with_absent.starts_with("about_resource: .\nname: n\ndownload_url:\n"));
        assert!(!with_absent.contains("\nversion:"));
        assert!(with_absent.ends_with("spec_version:\n"));
    }

    #[test]
    fn test_dumps_round_trip() {
        let text = "about_resource: .\nname: AboutCode\nversion: 0.11.0\nlicense: apache-2.0\n cddl-1.0\ncustom1: multi\n line\n";
        let about = loaded(text, None);
        assert_eq!(about.dumps(false, true), text);
        assert_eq!(loaded(&about.dumps(false, true), None), about);
    }

    #[test]
    fn test_as_dict_with_paths() {
        let mut about = About::new();
        about.set_about_file_path("complete/about.ABOUT");
        about.loads("about_resource: .\nname: x\n", None);
        let dict = about.as_dict(true, false, false);
        assert_eq!(dict[ABOUT_FILE_PATH_ATTR], "complete/about.ABOUT");
        assert_eq!(dict[ABOUT_RESOURCE_PATH_ATTR], "complete");
        assert_eq!(
            dict.keys().collect::<Vec<_>>(),
            vec![ABOUT_FILE_PATH_ATTR, ABOUT_RESOURCE_PATH_ATTR, "about_resource", "name"]
        );
    }

    #[test]
    fn test_equality_ignores_trailing_whitespace_and_location() {
        let mut a = loaded("about_resource: .\nname: x\nnotes: one  \n two \n", None);
        let b = loaded("about_resource: .\nname: x\nnotes: one\n two\n", None);
        a.set_about_file_path("elsewhere/x.ABOUT");
        assert_eq!(a, b);
        let c = loaded("about_resource: .\nname: y\n", None);
        assert_ne!(a, c);
    }

    #[test]
    fn test_same_attribution() {
        let a = loaded("about_resource: a\nname: zlib\nversion: 1\n", None);
        let b = loaded("about_resource: b\nname: zlib\nversion: 1\nnotes: x\n", None);
        let c = loaded("about_resource: a\nname: zlib\nversion: 2\n", None);
        assert!(a.same_attribution(&b));
        assert!(!a.same_attribution(&c));
    }

    #[test]
    fn test_from_location_reports_undecodable_file() {
        let dir = TempDir::new().unwrap();
        let location = dir.path().join("bad.ABOUT");
        fs::write(&location, [0x6e, 0x61, 0x6d, 0x65, 0x3a, 0x20, 0xff, 0xfe]).unwrap();
        let about = About::from_location(&location, None);
        assert_eq!(about.errors().len(), 1);
        let issue = &about.errors()[0];
        assert!(issue.is_critical());
        assert!(issue.message.starts_with("Cannot load invalid ABOUT file: "));
        assert!(issue.message.contains(": UnicodeDecodeError: invalid utf-8"));
        assert_eq!(about.value_of("name"), "");
    }

    #[test]
    fn test_from_location_resolves_against_record_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("zlib.c"), "int main;").unwrap();
        fs::write(dir.path().join("zlib.LICENSE"), "zlib license").unwrap();
        let location = dir.path().join("zlib.ABOUT");
        fs::write(
            &location,
            "about_resource: zlib.c\nname: zlib\nlicense: zlib\nlicense_file: zlib.LICENSE\n",
        )
        .unwrap();

        let about = About::from_location(&location, Some("pkg/zlib.ABOUT"));
        assert!(about.errors().is_empty(), "{:?}", about.errors());
        assert_eq!(about.resource_paths(), ["pkg/zlib.c"]);
        let texts = about.field("license_file").unwrap().value().as_paths().unwrap();
        assert_eq!(texts["zlib.LICENSE"].as_deref(), Some("zlib license"));
    }

    #[test]
    fn test_dump_writes_file() {
        let dir = TempDir::new().unwrap();
        let about = loaded("about_resource: .\nname: x\n", None);
        let target = dir.path().join("nested").join("x.ABOUT");
        about.dump(&target, false, true).unwrap();
        assert_eq!(
            fs::read_to_string(&target).unwrap(),
            "about_resource: .\nname: x\n"
        );
    }

    #[test]
    fn test_license_keys_are_deduplicated() {
        let about = loaded("license: mit\n bsd-new\n mit\n", None);
        assert_eq!(about.license_keys(), vec!["mit", "bsd-new"]);
    }
}
