//! CSV inventory export

use aboutcode_common::{AboutCodeError, Result};
use std::io::Write;
use std::path::Path;

use crate::about::About;
use crate::groupings::field_names;

/// Write an inventory as CSV.
///
/// The header is the union of selected field names with the reserved path
/// columns first; a record without a column gets an empty cell.
pub fn to_csv<W: Write>(abouts: &[About], writer: W) -> Result<()> {
    let header = field_names(abouts, true, false, true);
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(&header)?;

    for about in abouts {
        let row = about.as_dict(true, true, false);
        let cells = header
            .iter()
            .map(|name| row.get(name).map(String::as_str).unwrap_or(""));
        csv_writer.write_record(cells)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write an inventory CSV file at `location`, creating parent directories.
pub fn write_csv(abouts: &[About], location: &Path) -> Result<()> {
    if let Some(parent) = location.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| AboutCodeError::file_write(parent, e))?;
        }
    }
    let file = std::fs::File::create(location).map_err(|e| AboutCodeError::file_write(location, e))?;
    to_csv(abouts, file)?;
    tracing::debug!(path = %location.display(), records = abouts.len(), "wrote inventory CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_csv_fills_missing_cells() {
        let mut first = About::new();
        first.set_about_file_path("pkg/a.ABOUT");
        first.loads("about_resource: .\nname: a\nlicense: mit\n bsd-new\n", None);
        let mut second = About::new();
        second.set_about_file_path("pkg/b.ABOUT");
        second.loads("about_resource: b.c\nname: b\nextra: x\n", None);

        let mut out = Vec::new();
        to_csv(&[first, second], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let expected = "about_file_path,about_resource_path,about_resource,name,license,extra\n\
                        pkg/a.ABOUT,pkg,.,a,\"mit\nbsd-new\",\n\
                        pkg/b.ABOUT,pkg/b.c,b.c,b,,x\n";
        assert_eq!(text, expected);
    }
}
