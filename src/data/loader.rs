use std::io::Cursor;
use std::path::Path;

use calamine::{Reader, Xlsx};

use crate::error::AnalyzeError;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a diagnosis dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` – spreadsheet, diagnosis strings in the first column
/// * `.csv`  – comma-separated, diagnosis strings in the first column
/// * anything else – plain text, one diagnosis per line
pub fn load_file(path: &Path) -> Result<Dataset, AnalyzeError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("dataset")
        .to_string();
    let bytes = std::fs::read(path).map_err(|e| AnalyzeError::format(&name, e))?;
    load_bytes(&name, &bytes)
}

/// Load a dataset from an in-memory byte buffer plus its file name.
///
/// This is the format core: the desktop shell and the CLI both hand the file
/// content here, so upload-style callers (a buffer, not a path) work too.
pub fn load_bytes(file_name: &str, bytes: &[u8]) -> Result<Dataset, AnalyzeError> {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "xlsx" => load_xlsx(file_name, bytes),
        "csv" => load_csv(file_name, bytes),
        // Unrecognised extensions are treated as line-delimited text.
        _ => load_text(file_name, bytes),
    }
}

// ---------------------------------------------------------------------------
// Spreadsheet loader
// ---------------------------------------------------------------------------

/// First worksheet only.  The first row is a header and is skipped; if the
/// sheet has several columns, only the first is kept (the diagnosis column).
fn load_xlsx(file_name: &str, bytes: &[u8]) -> Result<Dataset, AnalyzeError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
        .map_err(|e| AnalyzeError::format(file_name, e))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AnalyzeError::format(file_name, "workbook has no worksheets"))?
        .map_err(|e| AnalyzeError::format(file_name, e))?;

    let lines: Vec<String> = range
        .rows()
        .skip(1)
        .filter_map(|row| row.first())
        .map(|cell| cell.to_string())
        .filter(|s| !s.trim().is_empty())
        .collect();

    Ok(Dataset::from_raw_lines(file_name, lines))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Header row assumed and skipped; only the first field of each row is kept.
/// Rows of uneven width are tolerated.
fn load_csv(file_name: &str, bytes: &[u8]) -> Result<Dataset, AnalyzeError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let mut lines = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| AnalyzeError::format(file_name, e))?;
        let first = record.get(0).unwrap_or("");
        if !first.trim().is_empty() {
            lines.push(first.to_string());
        }
    }

    Ok(Dataset::from_raw_lines(file_name, lines))
}

// ---------------------------------------------------------------------------
// Plain-text loader
// ---------------------------------------------------------------------------

/// One diagnosis per line; surrounding whitespace trimmed, blank lines dropped.
fn load_text(file_name: &str, bytes: &[u8]) -> Result<Dataset, AnalyzeError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| AnalyzeError::format(file_name, format!("not valid UTF-8 text: {e}")))?;

    let lines = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty());

    Ok(Dataset::from_raw_lines(file_name, lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_loader_trims_and_drops_blank_lines() {
        let bytes = b"1A00-Cholera\n\n  8A68.Z-Thyrotoxicosis  \n\n";
        let ds = load_bytes("dump.txt", bytes).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].code, "1A00");
        assert_eq!(ds.records[1].raw, "8A68.Z-Thyrotoxicosis");
    }

    #[test]
    fn unknown_extension_falls_back_to_text() {
        let ds = load_bytes("dump.dat", b"BA00-Hypertension\n").unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].code, "BA00");
    }

    #[test]
    fn csv_loader_keeps_first_column_and_skips_header() {
        let bytes = b"diagnosis,ward\n1A00-Cholera,East\nBA00-Hypertension,West\n";
        let ds = load_bytes("export.csv", bytes).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].raw, "1A00-Cholera");
        assert_eq!(ds.records[1].code, "BA00");
    }

    #[test]
    fn csv_loader_tolerates_uneven_rows() {
        let bytes = b"diagnosis\n1A00-Cholera,extra,fields\nBA00-Hypertension\n";
        let ds = load_bytes("export.csv", bytes).unwrap();
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn invalid_utf8_text_is_a_format_error() {
        let err = load_bytes("dump.txt", &[0xff, 0xfe, 0x00]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("dump.txt"));
        assert!(msg.contains("Supported formats"));
    }
}
