//! Reading inventory rows from CSV

use indexmap::IndexMap;
use std::io::Read;
use std::path::Path;

use crate::error::{GenError, Result};

/// One input row: lowercased column name to cell text.
pub type Row = IndexMap<String, String>;

/// Read rows from a CSV file with a header row.
pub fn load_rows(location: &Path) -> Result<Vec<Row>> {
    let file = std::fs::File::open(location).map_err(|source| GenError::FileRead {
        path: location.to_path_buf(),
        source,
    })?;
    let rows = read_rows(file)?;
    tracing::debug!(path = %location.display(), rows = rows.len(), "loaded CSV rows");
    Ok(rows)
}

/// Read rows from CSV text.
///
/// Column names are trimmed and lowercased; names that repeat after that are
/// rejected. Rows whose cells are all empty are dropped.
///
/// ```
/// use aboutcode_gen::read_rows;
///
/// let rows = read_rows("About_File,Name\nzlib/,zlib\n,\n".as_bytes()).unwrap();
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0]["about_file"], "zlib/");
/// ```
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<Row>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let header: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|name| name.trim().to_lowercase())
        .collect();

    let mut duplicates: Vec<String> = Vec::new();
    for (index, name) in header.iter().enumerate() {
        if header[..index].contains(name) && !duplicates.contains(name) {
            duplicates.push(name.clone());
        }
    }
    if !duplicates.is_empty() {
        return Err(GenError::DuplicateColumns {
            columns: duplicates,
        });
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let row: Row = header
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let cell = record.get(index).unwrap_or("").trim();
                (name.clone(), cell.to_string())
            })
            .collect();
        if row.values().any(|cell| !cell.is_empty()) {
            rows.push(row);
        }
    }
    Ok(rows)
}

/// Rename source columns to field names.
///
/// `mapping` goes from target field name to source column header; headers
/// are matched case-insensitively. Unmapped columns keep their name.
pub fn apply_mapping(rows: &[Row], mapping: &IndexMap<String, String>) -> Vec<Row> {
    let renames: IndexMap<String, String> = mapping
        .iter()
        .map(|(target, source)| (source.trim().to_lowercase(), target.trim().to_lowercase()))
        .collect();

    rows.iter()
        .map(|row| {
            row.iter()
                .map(|(name, value)| {
                    let name = renames.get(name).cloned().unwrap_or_else(|| name.clone());
                    (name, value.clone())
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_is_lowercased() {
        let rows = read_rows("About_File, Name ,VERSION\nabout.ABOUT,ABOUT tool,0.8.1\n".as_bytes())
            .unwrap();
        assert_eq!(
            rows[0].keys().collect::<Vec<_>>(),
            vec!["about_file", "name", "version"]
        );
        assert_eq!(rows[0]["version"], "0.8.1");
    }

    #[test]
    fn test_duplicate_columns_differing_in_case() {
        let err = read_rows("name,Name,version\na,b,c\n".as_bytes()).unwrap_err();
        match err {
            GenError::DuplicateColumns { columns } => assert_eq!(columns, vec!["name"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_short_rows_are_padded() {
        let rows = read_rows("about_file,name,version\nx.ABOUT,x\n".as_bytes()).unwrap();
        assert_eq!(rows[0]["version"], "");
    }

    #[test]
    fn test_apply_mapping() {
        let rows = read_rows(
            "Directory/Filename,Component,Confirmed Version,ignore field\n/opensans/,OpenSans Fonts,1,i\n"
                .as_bytes(),
        )
        .unwrap();
        let mapping: IndexMap<String, String> = [
            ("about_file", "Directory/Filename"),
            ("name", "Component"),
            ("version", "Confirmed Version"),
        ]
        .into_iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect();

        let mapped = apply_mapping(&rows, &mapping);
        assert_eq!(mapped[0]["about_file"], "/opensans/");
        assert_eq!(mapped[0]["name"], "OpenSans Fonts");
        assert_eq!(mapped[0]["version"], "1");
        assert_eq!(mapped[0]["ignore field"], "i");
    }
}
