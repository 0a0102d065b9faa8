//! Planning and writing generated records
//!
//! Planning is separate from writing: [`plan`] decides every output and
//! collects issues, reading only existing record files; [`write_plan`] then
//! performs the writes.

use aboutcode_common::{Issue, Severity};
use aboutcode_model::About;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

use crate::action::GenerationAction;
use crate::error::{GenError, Result};
use crate::library::LicenseLibrary;
use crate::rows::Row;

/// Column naming the record file or directory to document.
pub const ABOUT_FILE_COLUMN: &str = "about_file";

/// Columns every input must have.
pub const MANDATORY_COLUMNS: &[&str] = &[ABOUT_FILE_COLUMN, "name"];

const LICENSE_FIELDS: &[&str] = &["license", "license_name", "license_file", "license_url"];

/// Settings for one generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerationOptions {
    pub action: GenerationAction,
    /// Write every record directly under the target directory
    pub all_in_one: bool,
    /// Directory holding license files named by `license_file` cells
    pub license_dir: Option<PathBuf>,
}

/// Everything a generation run will write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationPlan {
    /// Record files and their text
    pub records: Vec<(PathBuf, String)>,
    /// License files to copy, as `(destination, source)`
    pub license_copies: Vec<(PathBuf, PathBuf)>,
    /// License texts from the library, as `(destination, text)`
    pub license_texts: Vec<(PathBuf, String)>,
    pub issues: Vec<Issue>,
}

/// Output location of the record for an `about_file` cell.
///
/// ```
/// use aboutcode_gen::output_path;
/// use std::path::Path;
///
/// let target = Path::new("/out");
/// assert_eq!(output_path(target, "/TESTCASE/", false), Path::new("/out/TESTCASE/TESTCASE.ABOUT"));
/// assert_eq!(output_path(target, "lib/zlib.c", false), Path::new("/out/lib/zlib.c.ABOUT"));
/// assert_eq!(output_path(target, "lib/zlib.ABOUT", true), Path::new("/out/zlib.ABOUT"));
/// ```
pub fn output_path(target: &Path, about_file: &str, all_in_one: bool) -> PathBuf {
    let about_file = about_file.trim().replace('\\', "/");
    let about_file = about_file.trim_start_matches('/');

    let relative = if about_file.ends_with('/') {
        let dir = about_file.trim_end_matches('/');
        let name = dir.rsplit('/').next().unwrap_or(dir);
        format!("{}/{}.ABOUT", dir, name)
    } else if about_file.to_lowercase().ends_with(".about") {
        about_file.to_string()
    } else {
        format!("{}.ABOUT", about_file)
    };

    if all_in_one {
        let name = relative.rsplit('/').next().unwrap_or(&relative);
        target.join(name)
    } else {
        target.join(relative)
    }
}

/// `about_resource` value implied by an `about_file` cell.
///
/// ```
/// use aboutcode_gen::derive_about_resource;
///
/// assert_eq!(derive_about_resource("/tmp/test/"), ".");
/// assert_eq!(derive_about_resource("/tmp/test.c"), "test.c");
/// assert_eq!(derive_about_resource("lib/zlib.c.ABOUT"), "zlib.c");
/// ```
pub fn derive_about_resource(about_file: &str) -> String {
    let about_file = about_file.trim().replace('\\', "/");
    if about_file.ends_with('/') {
        return ".".to_string();
    }
    let name = about_file.rsplit('/').next().unwrap_or(&about_file);
    let suffix = ".about";
    if name.len() > suffix.len() && name.to_lowercase().ends_with(suffix) {
        name[..name.len() - suffix.len()].to_string()
    } else {
        name.to_string()
    }
}

/// Plan the records described by `rows` under `target`.
pub fn plan(
    rows: &[Row],
    target: &Path,
    options: &GenerationOptions,
    library: &dyn LicenseLibrary,
) -> GenerationPlan {
    let mut result = GenerationPlan::default();
    let Some(first) = rows.first() else {
        return result;
    };

    let missing: Vec<&str> = MANDATORY_COLUMNS
        .iter()
        .copied()
        .filter(|column| !first.contains_key(*column))
        .collect();
    if !missing.is_empty() {
        result.issues.push(Issue::critical(format!(
            "Required column(s) missing: {}",
            missing.join(", ")
        )));
        return result;
    }

    let mut seen: Vec<String> = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        // the header is line 1
        let line = index + 2;
        let about_file = row
            .get(ABOUT_FILE_COLUMN)
            .map(|cell| cell.trim().to_string())
            .unwrap_or_default();

        if about_file.is_empty() {
            result.issues.push(Issue::critical(format!(
                "Row {}: Field about_file is empty",
                line
            )));
            continue;
        }
        if seen.contains(&about_file) {
            result.issues.push(Issue::error(format!(
                "Row {}: Duplicated about_file: {}",
                line, about_file
            )));
            continue;
        }
        seen.push(about_file.clone());

        let output = output_path(target, &about_file, options.all_in_one);
        let mut fields: IndexMap<String, String> = row
            .iter()
            .filter(|(name, _)| name.as_str() != ABOUT_FILE_COLUMN)
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        if fields.get("about_resource").is_none_or(|value| value.trim().is_empty()) {
            fields.insert("about_resource".to_string(), derive_about_resource(&about_file));
        }

        if output.exists() {
            match options.action {
                GenerationAction::CreateIfAbsent => {
                    result.issues.push(Issue::warning(format!(
                        "Row {}: {} already exists and is left unchanged",
                        line,
                        output.display()
                    )));
                    continue;
                }
                GenerationAction::UpdateLicenseInfo => {
                    let mut existing = existing_fields(&output);
                    for name in LICENSE_FIELDS {
                        if let Some(value) = fields.get(*name).filter(|v| !v.trim().is_empty()) {
                            existing.insert(name.to_string(), value.clone());
                        }
                    }
                    fields = existing;
                }
                GenerationAction::UpdateNonEmpty => {
                    let mut existing = existing_fields(&output);
                    for (name, value) in fields {
                        if !value.trim().is_empty() {
                            existing.insert(name, value);
                        }
                    }
                    fields = existing;
                }
                GenerationAction::OverwriteAll => {}
            }
        }

        let record_dir = output.parent().map(Path::to_path_buf).unwrap_or_default();
        plan_licenses(
            line,
            &mut fields,
            &record_dir,
            options,
            library,
            &mut result,
        );

        let mut about = About::new();
        let pairs: Vec<(String, String)> = fields.into_iter().collect();
        for issue in about.hydrate(pairs) {
            if issue.severity > Severity::Info {
                result
                    .issues
                    .push(Issue::new(issue.severity, format!("Row {}: {}", line, issue.message)));
            }
        }
        result.records.push((output, about.dumps(false, false)));
    }

    tracing::debug!(
        records = result.records.len(),
        issues = result.issues.len(),
        "planned generation"
    );
    result
}

fn existing_fields(location: &Path) -> IndexMap<String, String> {
    let about = About::from_location(location, None);
    about.as_dict(false, true, false)
}

fn plan_licenses(
    line: usize,
    fields: &mut IndexMap<String, String>,
    record_dir: &Path,
    options: &GenerationOptions,
    library: &dyn LicenseLibrary,
    result: &mut GenerationPlan,
) {
    let license_file = fields.get("license_file").cloned().unwrap_or_default();

    if license_file.trim().is_empty() {
        let keys: Vec<String> = fields
            .get("license")
            .map(|value| {
                value
                    .lines()
                    .map(str::trim)
                    .filter(|key| !key.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let mut files = Vec::new();
        for key in keys {
            match library.lookup(&key) {
                Some((short_code, text)) => {
                    let file_name = format!("{}.LICENSE", short_code);
                    result.license_texts.push((record_dir.join(&file_name), text));
                    files.push(file_name);
                }
                None => result.issues.push(Issue::warning(format!(
                    "Row {}: License key {} not found in the license library",
                    line, key
                ))),
            }
        }
        if !files.is_empty() {
            fields.insert("license_file".to_string(), files.join("\n"));
        }
        return;
    }

    let Some(license_dir) = &options.license_dir else {
        return;
    };
    for file_name in license_file.lines().map(str::trim).filter(|f| !f.is_empty()) {
        let source = license_dir.join(file_name);
        if source.is_file() {
            result
                .license_copies
                .push((record_dir.join(file_name), source));
        } else {
            result.issues.push(Issue::warning(format!(
                "Row {}: License file {} not found in {}",
                line,
                file_name,
                license_dir.display()
            )));
        }
    }
}

/// Write every record, license text and license copy in `plan`.
pub fn write_plan(plan: &GenerationPlan) -> Result<()> {
    for (location, text) in plan.records.iter().chain(plan.license_texts.iter()) {
        create_parent(location)?;
        std::fs::write(location, text).map_err(|e| GenError::file_write(location, e))?;
        tracing::debug!(path = %location.display(), "wrote file");
    }
    for (destination, source) in &plan.license_copies {
        create_parent(destination)?;
        std::fs::copy(source, destination).map_err(|e| GenError::file_write(destination, e))?;
        tracing::debug!(
            from = %source.display(),
            to = %destination.display(),
            "copied license file"
        );
    }
    Ok(())
}

fn create_parent(location: &Path) -> Result<()> {
    match location.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| GenError::file_write(parent, e))
        }
        _ => Ok(()),
    }
}
