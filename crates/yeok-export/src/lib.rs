use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use yeok_core::Dictionary;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] XlsxError),

    #[error("Export target {} has no file name", .0.display())]
    InvalidPath(PathBuf),
}

/// Spreadsheet path next to a dictionary file
pub fn default_export_path(dictionary_path: &Path) -> PathBuf {
    dictionary_path.with_extension("xlsx")
}

/// Write every (word, translation) pair to an `.xlsx` workbook
///
/// Row 0 holds the column titles, pairs follow in dictionary order.
pub fn export_xlsx(
    dictionary: &Dictionary,
    headers: [&str; 2],
    path: &Path,
) -> Result<PathBuf, ExportError> {
    if path.file_name().is_none() {
        return Err(ExportError::InvalidPath(path.to_path_buf()));
    }

    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();

    worksheet.write_string_with_format(0, 0, headers[0], &bold)?;
    worksheet.write_string_with_format(0, 1, headers[1], &bold)?;

    let mut row = 0;
    for (word, translation) in dictionary.pairs() {
        row += 1;
        worksheet.write_string(row, 0, word)?;
        worksheet.write_string(row, 1, translation)?;
    }

    workbook.save(path)?;
    tracing::info!("Exported {} pairs to {}", row, path.display());
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use yeok_core::ValuePolicy;

    use super::*;

    fn sample() -> Dictionary {
        let mut dict = Dictionary::new(ValuePolicy::Multi);
        dict.upsert("눈", &["глаз".to_string(), "снег".to_string()]);
        dict.upsert("비", &["дождь".to_string()]);
        dict
    }

    #[test]
    fn test_default_path_swaps_extension() {
        assert_eq!(
            default_export_path(Path::new("data/dictionary.csv")),
            PathBuf::from("data/dictionary.xlsx")
        );
        assert_eq!(
            default_export_path(Path::new("words")),
            PathBuf::from("words.xlsx")
        );
    }

    #[test]
    fn test_export_writes_workbook() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join("dictionary.xlsx");

        let written = export_xlsx(&sample(), ["Word", "Translation"], &target).unwrap();

        assert_eq!(written, target);
        let bytes = fs::read(&target).unwrap();
        // xlsx is a zip container
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_export_empty_dictionary() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join("empty.xlsx");

        export_xlsx(
            &Dictionary::new(ValuePolicy::Single),
            ["Word", "Translation"],
            &target,
        )
        .unwrap();

        assert!(target.exists());
    }

    #[test]
    fn test_export_into_missing_directory_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join("no/such/dir/out.xlsx");

        let err = export_xlsx(&sample(), ["Word", "Translation"], &target).unwrap_err();
        assert!(matches!(err, ExportError::Xlsx(_)));
    }
}
