//! Pure operations over collections of records

use aboutcode_common::{ABOUT_FILE_PATH_ATTR, ABOUT_RESOURCE_PATH_ATTR};
use std::collections::BTreeMap;

use crate::about::{About, WELL_KNOWN_FIELDS};

/// Keep the first record of each group of equal records, in order.
pub fn unique(abouts: &[About]) -> Vec<&About> {
    let mut kept: Vec<&About> = Vec::new();
    for about in abouts {
        if !kept.iter().any(|existing| *existing == about) {
            kept.push(about);
        }
    }
    kept
}

/// Group records under every license key they declare.
///
/// Records without a license are grouped under the empty key.
pub fn by_license(abouts: &[About]) -> BTreeMap<String, Vec<&About>> {
    let mut groups: BTreeMap<String, Vec<&About>> = BTreeMap::new();
    for about in abouts {
        let keys = about.license_keys();
        if keys.is_empty() {
            groups.entry(String::new()).or_default().push(about);
            continue;
        }
        for key in keys {
            groups.entry(key).or_default().push(about);
        }
    }
    groups
}

/// Group records by their `name` value.
pub fn by_name(abouts: &[About]) -> BTreeMap<String, Vec<&About>> {
    let mut groups: BTreeMap<String, Vec<&About>> = BTreeMap::new();
    for about in abouts {
        groups.entry(about.value_of("name")).or_default().push(about);
    }
    groups
}

/// Union of the field names selected across `abouts`.
///
/// Well-known names come in canonical order, custom names in the order they
/// are first seen. With `with_paths` the two reserved path keys lead.
pub fn field_names(
    abouts: &[About],
    with_paths: bool,
    with_absent: bool,
    with_empty: bool,
) -> Vec<String> {
    let mut names = Vec::new();
    if with_paths {
        names.push(ABOUT_FILE_PATH_ATTR.to_string());
        names.push(ABOUT_RESOURCE_PATH_ATTR.to_string());
    }

    let selected: Vec<Vec<String>> = abouts
        .iter()
        .map(|about| {
            about
                .selected_fields(with_absent, with_empty)
                .map(|field| field.name().to_string())
                .collect()
        })
        .collect();

    for (name, _) in WELL_KNOWN_FIELDS {
        if selected.iter().any(|fields| fields.iter().any(|f| f == *name)) {
            names.push(name.to_string());
        }
    }

    for fields in &selected {
        for name in fields {
            let well_known = WELL_KNOWN_FIELDS.iter().any(|(known, _)| *known == name.as_str());
            if !well_known && !names.contains(name) {
                names.push(name.clone());
            }
        }
    }
    names
}
