use std::io::Write;

use crate::error::AnalyzeError;

use super::model::Record;

/// Write records as CSV with header `diagnosis,code,description`.
///
/// Used for the range-filter download; the record order is the file order of
/// the source dataset.
pub fn write_csv<'a, W, I>(records: I, writer: W) -> Result<(), AnalyzeError>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for rec in records {
        wtr.serialize(rec)
            .map_err(|e| AnalyzeError::format("export", e))?;
    }
    wtr.flush()
        .map_err(|e| AnalyzeError::format("export", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    #[test]
    fn export_has_original_column_names() {
        let records = [
            Record::parse("1A00-Cholera"),
            Record::parse("8A68.Z"),
        ];

        let mut buf = Vec::new();
        write_csv(&records, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("diagnosis,code,description"));
        assert_eq!(lines.next(), Some("1A00-Cholera,1A00,Cholera"));
        assert_eq!(lines.next(), Some("8A68.Z,8A68.Z,"));
    }

    #[test]
    fn descriptions_with_commas_are_quoted() {
        let records = [Record::parse("8A68.Z-Thyrotoxicosis, unspecified")];

        let mut buf = Vec::new();
        write_csv(&records, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("\"8A68.Z-Thyrotoxicosis, unspecified\""));
    }
}
