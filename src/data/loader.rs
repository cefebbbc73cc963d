//! Spreadsheet Loader Module
//! Reads a source file into a Polars DataFrame holding every column as text.

use super::error::ExtractError;
use calamine::{open_workbook_auto, Data, Reader};
use polars::prelude::*;
use std::path::Path;

/// Source formats recognised by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Excel / OpenDocument workbook, first worksheet.
    Workbook,
    Csv,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(SourceFormat::Workbook),
            "csv" => Some(SourceFormat::Csv),
            _ => None,
        }
    }
}

/// Loads tabular source files with raw (unnormalized) headers.
pub struct DataLoader;

impl DataLoader {
    /// Load all rows of `path`. Every column of the result has dtype `String`.
    pub fn load(path: &Path) -> Result<DataFrame, ExtractError> {
        if !path.exists() {
            return Err(ExtractError::InputNotFound {
                path: path.to_path_buf(),
            });
        }

        let format = SourceFormat::from_path(path).ok_or_else(|| ExtractError::Read {
            path: path.to_path_buf(),
            reason: format!(
                "unsupported file extension '{}'",
                path.extension().and_then(|e| e.to_str()).unwrap_or("")
            ),
        })?;

        let df = match format {
            SourceFormat::Workbook => Self::load_workbook(path)?,
            SourceFormat::Csv => Self::load_csv(path)?,
        };

        log::debug!(
            "Loaded {}: {} rows, {} columns",
            path.display(),
            df.height(),
            df.width()
        );
        Ok(df)
    }

    fn load_csv(path: &Path) -> Result<DataFrame, ExtractError> {
        // Schema inference disabled: every column comes back as String
        LazyCsvReader::new(path)
            .with_infer_schema_length(Some(0))
            .with_ignore_errors(true)
            .finish()
            .and_then(|lazy| lazy.collect())
            .map_err(|e| ExtractError::Read {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }

    fn load_workbook(path: &Path) -> Result<DataFrame, ExtractError> {
        let read_error = |reason: String| ExtractError::Read {
            path: path.to_path_buf(),
            reason,
        };

        let mut workbook = open_workbook_auto(path).map_err(|e| read_error(e.to_string()))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| read_error("workbook has no worksheet".to_string()))?
            .map_err(|e| read_error(e.to_string()))?;

        let mut rows = range.rows();
        let Some(header) = rows.next() else {
            return Ok(DataFrame::empty());
        };

        let names: Vec<String> = header
            .iter()
            .enumerate()
            .map(|(i, cell)| cell_text(cell).unwrap_or_else(|| format!("column_{}", i + 1)))
            .collect();

        let mut values: Vec<Vec<Option<String>>> = vec![Vec::new(); names.len()];
        for row in rows {
            for (i, column) in values.iter_mut().enumerate() {
                column.push(row.get(i).and_then(cell_text));
            }
        }

        let columns: Vec<Column> = dedupe_names(names)
            .into_iter()
            .zip(values)
            .map(|(name, column)| Column::new(name.into(), column))
            .collect();

        DataFrame::new(columns).map_err(|e| read_error(e.to_string()))
    }
}

/// Render a workbook cell as text; empty and error cells are missing.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Workbook headers may repeat; DataFrame column names may not.
fn dedupe_names(names: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        let mut candidate = name.clone();
        let mut n = 1;
        while seen.contains(&candidate) {
            n += 1;
            candidate = format!("{}_{}", name, n);
        }
        seen.push(candidate);
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn format_follows_extension_case_insensitively() {
        assert_eq!(
            SourceFormat::from_path(Path::new("loyers.XLSX")),
            Some(SourceFormat::Workbook)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("a/b/loyers.csv")),
            Some(SourceFormat::Csv)
        );
        assert_eq!(SourceFormat::from_path(Path::new("loyers.json")), None);
        assert_eq!(SourceFormat::from_path(Path::new("loyers")), None);
    }

    #[test]
    fn missing_file_is_input_not_found() {
        let err = DataLoader::load(Path::new("/definitely/not/here.xlsx")).unwrap_err();
        assert!(matches!(err, ExtractError::InputNotFound { .. }));
        assert!(err.to_string().contains("/definitely/not/here.xlsx"));
    }

    #[test]
    fn unsupported_extension_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loyers.json");
        fs::write(&path, "{}").unwrap();

        let err = DataLoader::load(&path).unwrap_err();
        assert!(matches!(err, ExtractError::Read { .. }));
    }

    #[test]
    fn csv_columns_are_all_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loyers.csv");
        fs::write(&path, "a,b\n1,2.5\n3,x\n").unwrap();

        let df = DataLoader::load(&path).unwrap();
        assert_eq!(df.height(), 2);
        for column in df.get_columns() {
            assert_eq!(column.dtype(), &DataType::String);
        }
    }

    #[test]
    fn repeated_headers_get_suffixes() {
        let names = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        assert_eq!(dedupe_names(names), vec!["a", "b", "a_2"]);
    }

    #[test]
    fn cell_text_skips_empty_cells() {
        assert_eq!(cell_text(&Data::Empty), None);
        assert_eq!(cell_text(&Data::String("nue".into())), Some("nue".to_string()));
        assert_eq!(cell_text(&Data::Float(2.0)), Some("2".to_string()));
        assert_eq!(cell_text(&Data::Int(3)), Some("3".to_string()));
    }
}
